use serde::{Deserialize, Serialize};

/// Resolved state of one permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    /// Permission granted
    Granted,
    /// Permission denied
    Denied,
    /// User has not decided yet
    Prompt,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
            Self::Prompt => write!(f, "prompt"),
        }
    }
}

/// Permission states for the probed set
///
/// `None` means the permission surface is absent or the query itself was
/// refused -- distinct from an explicit `denied`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionsStatus {
    /// Geolocation access
    #[serde(default)]
    pub geolocation: Option<PermissionState>,

    /// Notification display
    #[serde(default)]
    pub notifications: Option<PermissionState>,

    /// Camera capture
    #[serde(default)]
    pub camera: Option<PermissionState>,

    /// Microphone capture
    #[serde(default)]
    pub microphone: Option<PermissionState>,

    /// MIDI device access
    #[serde(default)]
    pub midi: Option<PermissionState>,
}
