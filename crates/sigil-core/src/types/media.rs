use serde::{Deserialize, Serialize};

/// Kind of enumerable media device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaDeviceKind {
    /// Audio capture device
    AudioInput,
    /// Audio playback device
    AudioOutput,
    /// Video capture device
    VideoInput,
}

/// One enumerated media device
///
/// Field names keep the camelCase wire form of the enumeration surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaDeviceInfo {
    /// Opaque per-origin device identifier
    pub device_id: String,

    /// Device kind
    pub kind: MediaDeviceKind,

    /// Human-readable label; empty until capture permission is granted
    #[serde(default)]
    pub label: String,

    /// Identifier grouping devices on the same physical unit
    #[serde(default)]
    pub group_id: String,
}

/// Codec support and device enumeration results
///
/// Codec lists are supported subsets of the fixed candidate lists, in
/// candidate order. Empty means "probed, none supported" -- the lists are
/// never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    /// Supported audio codec content-type strings
    #[serde(default)]
    pub audio_codecs: Vec<String>,

    /// Supported video codec content-type strings
    #[serde(default)]
    pub video_codecs: Vec<String>,

    /// Enumerated media devices
    #[serde(default)]
    pub media_devices: Vec<MediaDeviceInfo>,
}

/// Supported content-decryption key systems
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedMediaCapabilities {
    /// Key systems that granted access; empty when none did
    #[serde(default)]
    pub cdm_list: Vec<String>,
}
