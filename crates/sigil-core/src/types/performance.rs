use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Navigation, memory and resource timing readings
///
/// This category is explicitly time-varying: two collections in the same
/// session may legitimately differ here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceTimings {
    /// Navigation-timing entry, as reported by the host
    #[serde(default)]
    pub timings: Map<String, Value>,

    /// Heap/memory statistics, as reported by the host
    #[serde(default)]
    pub memory: Map<String, Value>,

    /// Resource URL to elapsed milliseconds (response end minus start)
    #[serde(default)]
    pub network_timing: BTreeMap<String, f64>,

    /// Average frames per second; frame counting is disabled (slow, and
    /// most hosts pin at 60), so this stays 0
    #[serde(default)]
    pub framerate: f64,
}
