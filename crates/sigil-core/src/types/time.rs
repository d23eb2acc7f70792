use serde::{Deserialize, Serialize};

/// Timezone and locale readings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneInfo {
    /// IANA timezone identifier; empty when unresolvable
    #[serde(default)]
    pub time_zone: String,

    /// Offset from UTC in minutes, UTC-minus-local sign convention
    /// (UTC+2 reads as -120); `None` when unknown
    #[serde(default)]
    pub timezone_offset: Option<i32>,

    /// Preferred languages, most preferred first
    #[serde(default)]
    pub languages: Vec<String>,
}
