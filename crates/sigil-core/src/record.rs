//! The fingerprint record -- the pipeline's sole external product.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{
    AudioArtifact, Behavioral, BrowserInfo, CanvasArtifacts, CssFeatures, DisplayInfo,
    EncryptedMediaCapabilities, Fonts, Graphics, Hardware, HttpHeaderFingerprint, IpInfo, Media,
    NetworkConnection, PerformanceTimings, PermissionsStatus, Plugins, StorageInfo, TimeZoneInfo,
    TouchPointer,
};

/// The twenty category keys, in wire order.
///
/// Declaration order of [`FingerprintRecord`] fields must match this list;
/// serialization order follows declaration order.
pub const CATEGORY_KEYS: [&str; 20] = [
    "ip",
    "audio",
    "behavioral",
    "browser",
    "canvas",
    "css_features",
    "display",
    "fonts",
    "graphics",
    "hardware",
    "http_header_fingerprint",
    "media",
    "network",
    "performance",
    "permissions",
    "plugins",
    "encrypted_media_capabilities",
    "storage",
    "time_zone",
    "touch_pointer",
];

/// Complete fingerprint of one collection pass
///
/// Every schema category is always present, even when all of its fields are
/// empty defaults. The record is immutable once assembled and carries no
/// state across collection passes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FingerprintRecord {
    /// Client address placeholder (populated out-of-band)
    #[serde(default)]
    pub ip: IpInfo,

    /// Synthesized-audio artifact
    #[serde(default)]
    pub audio: AudioArtifact,

    /// Behavioral biometrics placeholder
    #[serde(default)]
    pub behavioral: Behavioral,

    /// Browser identity
    #[serde(default)]
    pub browser: BrowserInfo,

    /// Rendered-artifact digests
    #[serde(default)]
    pub canvas: CanvasArtifacts,

    /// CSS media-feature preferences
    #[serde(default)]
    pub css_features: CssFeatures,

    /// Screen geometry and color capabilities
    #[serde(default)]
    pub display: DisplayInfo,

    /// Installed-font placeholder
    #[serde(default)]
    pub fonts: Fonts,

    /// 3D rendering stack identity
    #[serde(default)]
    pub graphics: Graphics,

    /// Hardware hints
    #[serde(default)]
    pub hardware: Hardware,

    /// Transport-level request fingerprint
    #[serde(default)]
    pub http_header_fingerprint: HttpHeaderFingerprint,

    /// Codec support and media devices
    #[serde(default)]
    pub media: Media,

    /// Connection-quality hints
    #[serde(default)]
    pub network: NetworkConnection,

    /// Timing readings (time-varying by design)
    #[serde(default)]
    pub performance: PerformanceTimings,

    /// Permission states
    #[serde(default)]
    pub permissions: PermissionsStatus,

    /// Plugin enumerations
    #[serde(default)]
    pub plugins: Plugins,

    /// Content-decryption key systems
    #[serde(default)]
    pub encrypted_media_capabilities: EncryptedMediaCapabilities,

    /// Storage surfaces
    #[serde(default)]
    pub storage: StorageInfo,

    /// Timezone and locale
    #[serde(default)]
    pub time_zone: TimeZoneInfo,

    /// Touch and pointer capabilities
    #[serde(default)]
    pub touch_pointer: TouchPointer,
}

impl FingerprintRecord {
    /// Serialize to the canonical JSON text form handed to the transport
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to human-readable JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Collected categories awaiting assembly
///
/// One optional slot per category. [`RecordParts::assemble`] fills any slot
/// the aggregation never populated with the category's documented default;
/// correct aggregation populates all twenty, so the fallback is defensive
/// only.
#[derive(Debug, Clone, Default)]
pub struct RecordParts {
    pub ip: Option<IpInfo>,
    pub audio: Option<AudioArtifact>,
    pub behavioral: Option<Behavioral>,
    pub browser: Option<BrowserInfo>,
    pub canvas: Option<CanvasArtifacts>,
    pub css_features: Option<CssFeatures>,
    pub display: Option<DisplayInfo>,
    pub fonts: Option<Fonts>,
    pub graphics: Option<Graphics>,
    pub hardware: Option<Hardware>,
    pub http_header_fingerprint: Option<HttpHeaderFingerprint>,
    pub media: Option<Media>,
    pub network: Option<NetworkConnection>,
    pub performance: Option<PerformanceTimings>,
    pub permissions: Option<PermissionsStatus>,
    pub plugins: Option<Plugins>,
    pub encrypted_media_capabilities: Option<EncryptedMediaCapabilities>,
    pub storage: Option<StorageInfo>,
    pub time_zone: Option<TimeZoneInfo>,
    pub touch_pointer: Option<TouchPointer>,
}

impl RecordParts {
    /// Assemble the final record, defaulting any unpopulated category
    #[must_use]
    pub fn assemble(self) -> FingerprintRecord {
        FingerprintRecord {
            ip: self.ip.unwrap_or_default(),
            audio: self.audio.unwrap_or_default(),
            behavioral: self.behavioral.unwrap_or_default(),
            browser: self.browser.unwrap_or_default(),
            canvas: self.canvas.unwrap_or_default(),
            css_features: self.css_features.unwrap_or_default(),
            display: self.display.unwrap_or_default(),
            fonts: self.fonts.unwrap_or_default(),
            graphics: self.graphics.unwrap_or_default(),
            hardware: self.hardware.unwrap_or_default(),
            http_header_fingerprint: self.http_header_fingerprint.unwrap_or_default(),
            media: self.media.unwrap_or_default(),
            network: self.network.unwrap_or_default(),
            performance: self.performance.unwrap_or_default(),
            permissions: self.permissions.unwrap_or_default(),
            plugins: self.plugins.unwrap_or_default(),
            encrypted_media_capabilities: self.encrypted_media_capabilities.unwrap_or_default(),
            storage: self.storage.unwrap_or_default(),
            time_zone: self.time_zone.unwrap_or_default(),
            touch_pointer: self.touch_pointer.unwrap_or_default(),
        }
    }
}
