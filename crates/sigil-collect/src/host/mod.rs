//! The host capability provider -- the pipeline's only view of the world.
//!
//! Production bindings wrap a real environment ([`NativeHost`] wraps the
//! local machine plus software renderers); tests bind [`StaticHost`] with
//! whatever capability mix the scenario needs. Every trait method defaults
//! to `Err(HostError::Unsupported)`, so a binding implements only the
//! surfaces it can actually observe.

mod dsp;
mod native;
mod raster;
mod static_host;

pub use native::NativeHost;
pub use raster::{SoftwareCanvas, SoftwareGl};
pub use static_host::StaticHost;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

use sigil_core::{
    ColorGamut, GpuAdapterInfo, MediaDeviceInfo, NetworkConnection, PermissionState,
    StorageEstimate,
};

/// Result type alias for host capability reads
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Why a capability read did not produce a value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host does not expose this capability at all
    #[error("capability not supported")]
    Unsupported,

    /// The capability exists but the read was refused
    #[error("capability denied: {0}")]
    Denied(String),

    /// The capability exists but the read threw
    #[error("capability failed: {0}")]
    Failed(String),
}

/// Screen geometry as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Width in physical pixels
    pub width: u32,
    /// Height in physical pixels
    pub height: u32,
    /// Color depth in bits
    pub color_depth: u32,
    /// Physical-to-CSS pixel ratio
    pub device_pixel_ratio: f64,
}

/// Boolean media-feature queries the pipeline issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFeature {
    /// `(prefers-color-scheme: dark)`
    PrefersDarkScheme,
    /// `(prefers-reduced-motion: reduce)`
    ReducedMotion,
    /// `(prefers-reduced-data: reduce)`
    ReducedData,
    /// `(forced-colors: active)`
    ForcedColors,
    /// `(pointer: fine)`
    PointerFine,
    /// `(display-mode: standalone)`
    DisplayStandalone,
    /// `(color-gamut: ...)`
    ColorGamut(ColorGamut),
}

/// Permissions the pipeline queries, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionName {
    Geolocation,
    Notifications,
    Camera,
    Microphone,
    Midi,
}

impl PermissionName {
    /// Wire name of the permission
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Geolocation => "geolocation",
            Self::Notifications => "notifications",
            Self::Camera => "camera",
            Self::Microphone => "microphone",
            Self::Midi => "midi",
        }
    }
}

/// One resource-timing entry
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceTiming {
    /// Resource URL
    pub name: String,
    /// Fetch start, milliseconds from the timing origin
    pub start_time_ms: f64,
    /// Response end, milliseconds from the timing origin
    pub response_end_ms: f64,
}

/// Decode configuration for one video-codec candidate
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDecodeConfig {
    /// Full content-type string including the codecs parameter
    pub content_type: String,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
    /// Bitrate in bits per second
    pub bitrate: u32,
    /// Frames per second
    pub framerate: f64,
}

impl VideoDecodeConfig {
    /// The fixed probe configuration used for every candidate
    #[must_use]
    pub fn for_candidate(content_type: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            width: 1920,
            height: 1080,
            bitrate: 5_000_000,
            framerate: 30.0,
        }
    }
}

/// Access configuration for one key-system candidate
#[derive(Debug, Clone, PartialEq)]
pub struct KeySystemConfig {
    /// Accepted initialization-data formats
    pub init_data_types: Vec<String>,
    /// Video capability the system must decrypt
    pub video_content_type: String,
}

impl Default for KeySystemConfig {
    fn default() -> Self {
        Self {
            init_data_types: vec!["cenc".to_string()],
            video_content_type: "video/mp4; codecs=\"avc1.42E01E\"".to_string(),
        }
    }
}

/// Waveform shapes an offline oscillator can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// Oscillator parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorSpec {
    /// Waveform shape
    pub waveform: Waveform,
    /// Frequency in Hz
    pub frequency_hz: f64,
}

/// Dynamics-compressor parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressorSpec {
    /// Level above which compression starts, in dB
    pub threshold_db: f64,
    /// Soft-knee width in dB
    pub knee_db: f64,
    /// Compression ratio
    pub ratio: f64,
    /// Attack time in seconds
    pub attack_s: f64,
    /// Release time in seconds
    pub release_s: f64,
}

/// Complete offline audio graph: oscillator -> compressor -> buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioGraphSpec {
    /// Number of frames to render
    pub frames: u32,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Source oscillator
    pub oscillator: OscillatorSpec,
    /// Dynamics stage
    pub compressor: CompressorSpec,
}

impl AudioGraphSpec {
    /// The fixed graph the audio renderer always submits: one second of a
    /// 10 kHz triangle through a -50 dB / knee 40 / 12:1 compressor.
    #[must_use]
    pub const fn fingerprint() -> Self {
        Self {
            frames: 44_100,
            sample_rate: 44_100,
            oscillator: OscillatorSpec {
                waveform: Waveform::Triangle,
                frequency_hz: 10_000.0,
            },
            compressor: CompressorSpec {
                threshold_db: -50.0,
                knee_db: 40.0,
                ratio: 12.0,
                attack_s: 0.0,
                release_s: 0.25,
            },
        }
    }
}

/// Text baseline modes for 2D drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// Glyph top at the given y
    Top,
    /// Baseline at the given y
    #[default]
    Alphabetic,
}

/// RGBA fill color; alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Fully opaque color
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// An offscreen 2D drawing surface
pub trait Canvas2d: Send {
    /// Set the text baseline for subsequent `fill_text` calls
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Set the font (CSS shorthand, e.g. `"14px Arial"`)
    fn set_font(&mut self, font: &str);

    /// Set the fill color for subsequent fill operations
    fn set_fill_style(&mut self, color: Rgba);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill a text run at the given position
    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    /// Read back the canonical PNG encoding of the surface
    fn encode_png(&self) -> HostResult<Vec<u8>>;
}

/// An offscreen 3D surface limited to the operations the pipeline issues
pub trait GlSurface: Send {
    /// Driver renderer string, if the context exposes one
    fn renderer(&self) -> Option<String>;

    /// Driver vendor string
    fn vendor(&self) -> Option<String>;

    /// Supported extension names, in enumeration order
    fn extensions(&self) -> Vec<String>;

    /// Set the viewport (and readback) dimensions
    fn viewport(&mut self, width: u32, height: u32);

    /// Set the clear color
    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32);

    /// Clear the color buffer
    fn clear(&mut self);

    /// Read back the RGBA bytes of the viewport
    fn read_pixels(&self) -> Vec<u8>;
}

/// The host capability surface the pipeline probes.
///
/// Async methods are the pipeline's suspension points; each must resolve to
/// a deterministic shape before its category is merged. Implementations
/// must not panic -- refusals are expressed as [`HostError`].
#[async_trait]
pub trait Host: Send + Sync {
    /// Full user-agent string
    fn user_agent(&self) -> HostResult<String> {
        Err(HostError::Unsupported)
    }

    /// Build identifier, where still exposed
    fn build_id(&self) -> HostResult<String> {
        Err(HostError::Unsupported)
    }

    /// Screen geometry and color depth
    fn screen(&self) -> HostResult<ScreenMetrics> {
        Err(HostError::Unsupported)
    }

    /// Evaluate one boolean media-feature query
    fn media_feature(&self, _feature: MediaFeature) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Whether font smoothing is active
    fn font_smoothing(&self) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Logical CPU core count
    fn hardware_concurrency(&self) -> HostResult<u32> {
        Err(HostError::Unsupported)
    }

    /// Device memory hint in gigabytes
    fn device_memory_gb(&self) -> HostResult<f64> {
        Err(HostError::Unsupported)
    }

    /// Whether cookies are enabled
    fn cookies_enabled(&self) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Preferred languages, most preferred first
    fn languages(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// IANA timezone identifier
    fn time_zone(&self) -> HostResult<String> {
        Err(HostError::Unsupported)
    }

    /// UTC offset in minutes, UTC-minus-local sign convention
    fn timezone_offset_minutes(&self) -> HostResult<i32> {
        Err(HostError::Unsupported)
    }

    /// Maximum simultaneous touch points
    fn max_touch_points(&self) -> HostResult<u32> {
        Err(HostError::Unsupported)
    }

    /// Installed plugin names, in enumeration order
    fn plugins(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// MIME types registered by plugins
    fn mime_types(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// Referring document URL
    fn referrer(&self) -> HostResult<String> {
        Err(HostError::Unsupported)
    }

    /// Connection-quality hints
    fn connection(&self) -> HostResult<NetworkConnection> {
        Err(HostError::Unsupported)
    }

    /// The navigation-timing entry, as an open mapping
    fn navigation_timing(&self) -> HostResult<Map<String, Value>> {
        Err(HostError::Unsupported)
    }

    /// Heap/memory statistics, as an open mapping
    fn memory_info(&self) -> HostResult<Map<String, Value>> {
        Err(HostError::Unsupported)
    }

    /// Resource-timing entries
    fn resource_timing(&self) -> HostResult<Vec<ResourceTiming>> {
        Err(HostError::Unsupported)
    }

    /// Resolve one permission's state
    async fn query_permission(&self, _name: PermissionName) -> HostResult<PermissionState> {
        Err(HostError::Unsupported)
    }

    /// Storage usage/quota accounting
    async fn storage_estimate(&self) -> HostResult<StorageEstimate> {
        Err(HostError::Unsupported)
    }

    /// Registered service-worker scopes
    async fn service_worker_scopes(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// IndexedDB database names
    async fn indexed_db_names(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// Cache-storage keys
    async fn cache_storage_keys(&self) -> HostResult<Vec<String>> {
        Err(HostError::Unsupported)
    }

    /// Enumerate media devices
    async fn media_devices(&self) -> HostResult<Vec<MediaDeviceInfo>> {
        Err(HostError::Unsupported)
    }

    /// Whether one audio codec decodes on this host
    async fn audio_codec_supported(&self, _content_type: &str) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Whether one video codec decodes on this host
    async fn video_codec_supported(&self, _config: &VideoDecodeConfig) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Whether one key system grants access
    async fn key_system_supported(
        &self,
        _key_system: &str,
        _config: &KeySystemConfig,
    ) -> HostResult<bool> {
        Err(HostError::Unsupported)
    }

    /// Request the GPU adapter; `Ok(None)` when the entry point exists but
    /// no adapter is obtainable
    async fn gpu_adapter(&self) -> HostResult<Option<GpuAdapterInfo>> {
        Err(HostError::Unsupported)
    }

    /// Obtain an offscreen 2D surface of the given size
    fn canvas_2d(&self, _width: u32, _height: u32) -> HostResult<Box<dyn Canvas2d>> {
        Err(HostError::Unsupported)
    }

    /// Obtain an offscreen 3D surface
    fn gl_surface(&self) -> HostResult<Box<dyn GlSurface>> {
        Err(HostError::Unsupported)
    }

    /// Render the given audio graph offline and return the sample buffer
    async fn render_offline_audio(&self, _graph: &AudioGraphSpec) -> HostResult<Vec<f32>> {
        Err(HostError::Unsupported)
    }
}
