//! Configurable in-memory host for tests and replay.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde_json::{Map, Value};

use sigil_core::{
    GpuAdapterInfo, MediaDeviceInfo, NetworkConnection, PermissionState, StorageEstimate,
};

use super::{
    dsp, AudioGraphSpec, Canvas2d, GlSurface, Host, HostError, HostResult, KeySystemConfig,
    MediaFeature, PermissionName, ResourceTiming, ScreenMetrics, SoftwareCanvas, SoftwareGl,
    VideoDecodeConfig,
};

#[derive(Debug, Clone, Default)]
struct GlIdentity {
    renderer: Option<String>,
    vendor: Option<String>,
    extensions: Vec<String>,
}

/// A host whose every capability is configured up front.
///
/// Unset capabilities report `Unsupported`; capabilities named via
/// [`StaticHost::with_failure`] report `Failed`, exercising the denied/
/// throwing paths. `StaticHost::default()` is the "nothing available"
/// minimal host.
#[derive(Default)]
pub struct StaticHost {
    user_agent: Option<String>,
    build_id: Option<String>,
    screen: Option<ScreenMetrics>,
    media_features: HashMap<MediaFeature, bool>,
    font_smoothing: Option<bool>,
    hardware_concurrency: Option<u32>,
    device_memory_gb: Option<f64>,
    cookies_enabled: Option<bool>,
    languages: Option<Vec<String>>,
    time_zone: Option<String>,
    timezone_offset: Option<i32>,
    max_touch_points: Option<u32>,
    plugins: Option<Vec<String>>,
    mime_types: Option<Vec<String>>,
    referrer: Option<String>,
    connection: Option<NetworkConnection>,
    navigation_timing: Option<Map<String, Value>>,
    memory_info: Option<Map<String, Value>>,
    resource_timing: Option<Vec<ResourceTiming>>,
    permissions: HashMap<PermissionName, PermissionState>,
    storage_estimate: Option<StorageEstimate>,
    service_workers: Option<Vec<String>>,
    indexeddb_names: Option<Vec<String>>,
    cache_keys: Option<Vec<String>>,
    media_devices: Option<Vec<MediaDeviceInfo>>,
    media_capabilities: bool,
    audio_codecs: HashSet<String>,
    video_codecs: HashSet<String>,
    eme: bool,
    key_systems: HashSet<String>,
    webgpu: bool,
    gpu_adapter: Option<GpuAdapterInfo>,
    canvas: bool,
    gl: Option<GlIdentity>,
    offline_audio: bool,
    failures: HashSet<&'static str>,
}

impl StaticHost {
    /// The minimal host: nothing available
    #[must_use]
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Set the user-agent string
    #[must_use]
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the build identifier
    #[must_use]
    pub fn with_build_id(mut self, id: impl Into<String>) -> Self {
        self.build_id = Some(id.into());
        self
    }

    /// Set screen metrics
    #[must_use]
    pub fn with_screen(mut self, width: u32, height: u32, depth: u32, ratio: f64) -> Self {
        self.screen = Some(ScreenMetrics {
            width,
            height,
            color_depth: depth,
            device_pixel_ratio: ratio,
        });
        self
    }

    /// Set one media-feature answer
    #[must_use]
    pub fn with_media_feature(mut self, feature: MediaFeature, matches: bool) -> Self {
        self.media_features.insert(feature, matches);
        self
    }

    /// Set the font-smoothing reading
    #[must_use]
    pub fn with_font_smoothing(mut self, on: bool) -> Self {
        self.font_smoothing = Some(on);
        self
    }

    /// Set the CPU core count
    #[must_use]
    pub fn with_hardware_concurrency(mut self, cores: u32) -> Self {
        self.hardware_concurrency = Some(cores);
        self
    }

    /// Set the device-memory hint
    #[must_use]
    pub fn with_device_memory(mut self, gb: f64) -> Self {
        self.device_memory_gb = Some(gb);
        self
    }

    /// Set cookie availability
    #[must_use]
    pub fn with_cookies(mut self, enabled: bool) -> Self {
        self.cookies_enabled = Some(enabled);
        self
    }

    /// Set preferred languages
    #[must_use]
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = Some(languages);
        self
    }

    /// Set timezone identifier and offset
    #[must_use]
    pub fn with_time_zone(mut self, tz: impl Into<String>, offset_minutes: i32) -> Self {
        self.time_zone = Some(tz.into());
        self.timezone_offset = Some(offset_minutes);
        self
    }

    /// Set the touch-point count
    #[must_use]
    pub fn with_max_touch_points(mut self, points: u32) -> Self {
        self.max_touch_points = Some(points);
        self
    }

    /// Set plugin and MIME-type enumerations
    #[must_use]
    pub fn with_plugins(mut self, plugins: Vec<String>, mime_types: Vec<String>) -> Self {
        self.plugins = Some(plugins);
        self.mime_types = Some(mime_types);
        self
    }

    /// Set the referring document
    #[must_use]
    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    /// Set connection hints
    #[must_use]
    pub fn with_connection(mut self, connection: NetworkConnection) -> Self {
        self.connection = Some(connection);
        self
    }

    /// Set the navigation-timing entry
    #[must_use]
    pub fn with_navigation_timing(mut self, timings: Map<String, Value>) -> Self {
        self.navigation_timing = Some(timings);
        self
    }

    /// Set memory statistics
    #[must_use]
    pub fn with_memory_info(mut self, memory: Map<String, Value>) -> Self {
        self.memory_info = Some(memory);
        self
    }

    /// Set resource-timing entries
    #[must_use]
    pub fn with_resource_timing(mut self, entries: Vec<ResourceTiming>) -> Self {
        self.resource_timing = Some(entries);
        self
    }

    /// Set one permission's state
    #[must_use]
    pub fn with_permission(mut self, name: PermissionName, state: PermissionState) -> Self {
        self.permissions.insert(name, state);
        self
    }

    /// Set storage accounting
    #[must_use]
    pub fn with_storage_estimate(mut self, usage: u64, quota: u64) -> Self {
        self.storage_estimate = Some(StorageEstimate { usage, quota });
        self
    }

    /// Set registered service-worker scopes
    #[must_use]
    pub fn with_service_workers(mut self, scopes: Vec<String>) -> Self {
        self.service_workers = Some(scopes);
        self
    }

    /// Set IndexedDB database names
    #[must_use]
    pub fn with_indexeddb_names(mut self, names: Vec<String>) -> Self {
        self.indexeddb_names = Some(names);
        self
    }

    /// Set cache-storage keys
    #[must_use]
    pub fn with_cache_keys(mut self, keys: Vec<String>) -> Self {
        self.cache_keys = Some(keys);
        self
    }

    /// Set enumerable media devices
    #[must_use]
    pub fn with_media_devices(mut self, devices: Vec<MediaDeviceInfo>) -> Self {
        self.media_devices = Some(devices);
        self
    }

    /// Expose the media-capabilities surface without any supported codec
    #[must_use]
    pub fn with_media_capabilities(mut self) -> Self {
        self.media_capabilities = true;
        self
    }

    /// Mark one audio codec as supported
    #[must_use]
    pub fn with_audio_codec(mut self, content_type: impl Into<String>) -> Self {
        self.media_capabilities = true;
        self.audio_codecs.insert(content_type.into());
        self
    }

    /// Mark one video codec as supported
    #[must_use]
    pub fn with_video_codec(mut self, content_type: impl Into<String>) -> Self {
        self.media_capabilities = true;
        self.video_codecs.insert(content_type.into());
        self
    }

    /// Mark one key system as granting access
    #[must_use]
    pub fn with_key_system(mut self, key_system: impl Into<String>) -> Self {
        self.eme = true;
        self.key_systems.insert(key_system.into());
        self
    }

    /// Expose the key-system surface without any granting system
    #[must_use]
    pub fn with_encrypted_media(mut self) -> Self {
        self.eme = true;
        self
    }

    /// Provide a GPU adapter
    #[must_use]
    pub fn with_gpu_adapter(mut self, adapter: GpuAdapterInfo) -> Self {
        self.webgpu = true;
        self.gpu_adapter = Some(adapter);
        self
    }

    /// Expose the GPU entry point with no obtainable adapter
    #[must_use]
    pub fn with_webgpu_no_adapter(mut self) -> Self {
        self.webgpu = true;
        self
    }

    /// Provide a 2D drawing surface
    #[must_use]
    pub fn with_canvas(mut self) -> Self {
        self.canvas = true;
        self
    }

    /// Provide a 3D surface reporting the given identity
    #[must_use]
    pub fn with_webgl(
        mut self,
        renderer: impl Into<String>,
        vendor: impl Into<String>,
        extensions: Vec<String>,
    ) -> Self {
        self.gl = Some(GlIdentity {
            renderer: Some(renderer.into()),
            vendor: Some(vendor.into()),
            extensions,
        });
        self
    }

    /// Provide offline audio rendering
    #[must_use]
    pub fn with_offline_audio(mut self) -> Self {
        self.offline_audio = true;
        self
    }

    /// Make the named capability fail instead of resolving.
    ///
    /// Names match the [`Host`] method names.
    #[must_use]
    pub fn with_failure(mut self, capability: &'static str) -> Self {
        self.failures.insert(capability);
        self
    }

    fn check(&self, capability: &str) -> HostResult<()> {
        if self.failures.contains(capability) {
            Err(HostError::Failed(format!("injected failure: {capability}")))
        } else {
            Ok(())
        }
    }

    fn get<T: Clone>(&self, capability: &str, value: &Option<T>) -> HostResult<T> {
        self.check(capability)?;
        value.clone().ok_or(HostError::Unsupported)
    }
}

#[async_trait]
impl Host for StaticHost {
    fn user_agent(&self) -> HostResult<String> {
        self.get("user_agent", &self.user_agent)
    }

    fn build_id(&self) -> HostResult<String> {
        self.get("build_id", &self.build_id)
    }

    fn screen(&self) -> HostResult<ScreenMetrics> {
        self.get("screen", &self.screen)
    }

    fn media_feature(&self, feature: MediaFeature) -> HostResult<bool> {
        self.check("media_feature")?;
        self.media_features
            .get(&feature)
            .copied()
            .ok_or(HostError::Unsupported)
    }

    fn font_smoothing(&self) -> HostResult<bool> {
        self.get("font_smoothing", &self.font_smoothing)
    }

    fn hardware_concurrency(&self) -> HostResult<u32> {
        self.get("hardware_concurrency", &self.hardware_concurrency)
    }

    fn device_memory_gb(&self) -> HostResult<f64> {
        self.get("device_memory_gb", &self.device_memory_gb)
    }

    fn cookies_enabled(&self) -> HostResult<bool> {
        self.get("cookies_enabled", &self.cookies_enabled)
    }

    fn languages(&self) -> HostResult<Vec<String>> {
        self.get("languages", &self.languages)
    }

    fn time_zone(&self) -> HostResult<String> {
        self.get("time_zone", &self.time_zone)
    }

    fn timezone_offset_minutes(&self) -> HostResult<i32> {
        self.get("timezone_offset_minutes", &self.timezone_offset)
    }

    fn max_touch_points(&self) -> HostResult<u32> {
        self.get("max_touch_points", &self.max_touch_points)
    }

    fn plugins(&self) -> HostResult<Vec<String>> {
        self.get("plugins", &self.plugins)
    }

    fn mime_types(&self) -> HostResult<Vec<String>> {
        self.get("mime_types", &self.mime_types)
    }

    fn referrer(&self) -> HostResult<String> {
        self.get("referrer", &self.referrer)
    }

    fn connection(&self) -> HostResult<NetworkConnection> {
        self.get("connection", &self.connection)
    }

    fn navigation_timing(&self) -> HostResult<Map<String, Value>> {
        self.get("navigation_timing", &self.navigation_timing)
    }

    fn memory_info(&self) -> HostResult<Map<String, Value>> {
        self.get("memory_info", &self.memory_info)
    }

    fn resource_timing(&self) -> HostResult<Vec<ResourceTiming>> {
        self.get("resource_timing", &self.resource_timing)
    }

    async fn query_permission(&self, name: PermissionName) -> HostResult<PermissionState> {
        self.check("query_permission")?;
        self.permissions
            .get(&name)
            .copied()
            .ok_or(HostError::Unsupported)
    }

    async fn storage_estimate(&self) -> HostResult<StorageEstimate> {
        self.get("storage_estimate", &self.storage_estimate)
    }

    async fn service_worker_scopes(&self) -> HostResult<Vec<String>> {
        self.get("service_worker_scopes", &self.service_workers)
    }

    async fn indexed_db_names(&self) -> HostResult<Vec<String>> {
        self.get("indexed_db_names", &self.indexeddb_names)
    }

    async fn cache_storage_keys(&self) -> HostResult<Vec<String>> {
        self.get("cache_storage_keys", &self.cache_keys)
    }

    async fn media_devices(&self) -> HostResult<Vec<MediaDeviceInfo>> {
        self.get("media_devices", &self.media_devices)
    }

    async fn audio_codec_supported(&self, content_type: &str) -> HostResult<bool> {
        self.check("audio_codec_supported")?;
        if self.media_capabilities {
            Ok(self.audio_codecs.contains(content_type))
        } else {
            Err(HostError::Unsupported)
        }
    }

    async fn video_codec_supported(&self, config: &VideoDecodeConfig) -> HostResult<bool> {
        self.check("video_codec_supported")?;
        if self.media_capabilities {
            Ok(self.video_codecs.contains(&config.content_type))
        } else {
            Err(HostError::Unsupported)
        }
    }

    async fn key_system_supported(
        &self,
        key_system: &str,
        _config: &KeySystemConfig,
    ) -> HostResult<bool> {
        self.check("key_system_supported")?;
        if self.eme {
            Ok(self.key_systems.contains(key_system))
        } else {
            Err(HostError::Unsupported)
        }
    }

    async fn gpu_adapter(&self) -> HostResult<Option<GpuAdapterInfo>> {
        self.check("gpu_adapter")?;
        if self.webgpu {
            Ok(self.gpu_adapter.clone())
        } else {
            Err(HostError::Unsupported)
        }
    }

    fn canvas_2d(&self, width: u32, height: u32) -> HostResult<Box<dyn Canvas2d>> {
        self.check("canvas_2d")?;
        if self.canvas {
            Ok(Box::new(SoftwareCanvas::new(width, height)))
        } else {
            Err(HostError::Unsupported)
        }
    }

    fn gl_surface(&self) -> HostResult<Box<dyn GlSurface>> {
        self.check("gl_surface")?;
        self.gl.as_ref().map_or(Err(HostError::Unsupported), |gl| {
            Ok(Box::new(SoftwareGl::with_identity(
                gl.renderer.clone(),
                gl.vendor.clone(),
                gl.extensions.clone(),
            )) as Box<dyn GlSurface>)
        })
    }

    async fn render_offline_audio(&self, graph: &AudioGraphSpec) -> HostResult<Vec<f32>> {
        self.check("render_offline_audio")?;
        if self.offline_audio {
            Ok(dsp::render(graph))
        } else {
            Err(HostError::Unsupported)
        }
    }
}
