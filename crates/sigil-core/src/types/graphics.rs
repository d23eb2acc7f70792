use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 3D rendering stack identity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graphics {
    /// Driver renderer string; `None` when no 3D context is obtainable
    #[serde(default)]
    pub webgl_renderer: Option<String>,

    /// Driver vendor string
    #[serde(default)]
    pub webgl_vendor: Option<String>,

    /// Supported extension names, in host enumeration order
    #[serde(default)]
    pub webgl_extensions: Vec<String>,

    /// GPU adapter properties; empty mapping when no adapter is obtainable
    #[serde(default)]
    pub webgpu_adapter: Map<String, Value>,
}

impl Graphics {
    /// Returns true if a 3D context was obtainable
    #[must_use]
    pub const fn has_webgl(&self) -> bool {
        self.webgl_renderer.is_some()
    }
}

/// GPU adapter description as reported by the host's GPU entry point
///
/// Serialized into the `webgpu_adapter` mapping of [`Graphics`], preserving
/// the wire field names of the original capability surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuAdapterInfo {
    /// Adapter name, if the host reports one
    #[serde(default)]
    pub name: Option<String>,

    /// Enabled adapter feature names
    #[serde(default)]
    pub features: Vec<String>,

    /// Adapter limits, as an open mapping
    #[serde(default)]
    pub limits: Map<String, Value>,

    /// Whether this is a software fallback adapter
    #[serde(rename = "isFallbackAdapter", default)]
    pub is_fallback_adapter: bool,
}
