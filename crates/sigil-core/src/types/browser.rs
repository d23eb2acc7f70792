use serde::{Deserialize, Serialize};

/// Browser identity derived from the user-agent string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    /// Product name and major.minor version (e.g. `"Firefox 128.0"`)
    pub browser: String,

    /// Rendering engine family (Blink, Gecko, WebKit, Trident)
    pub engine: String,

    /// Build identifier, where the host still exposes one
    #[serde(default)]
    pub build_id: Option<String>,

    /// Private/incognito status; not detectable client-side, kept `None`
    #[serde(default)]
    pub private_mode: Option<bool>,
}

impl Default for BrowserInfo {
    fn default() -> Self {
        Self {
            browser: "Unknown".to_string(),
            engine: "Unknown".to_string(),
            build_id: None,
            private_mode: None,
        }
    }
}

/// Installed plugin and MIME-type enumerations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugins {
    /// Plugin names, in host enumeration order
    #[serde(default)]
    pub installed_plugins: Vec<String>,

    /// MIME types registered by plugins
    #[serde(default)]
    pub mime_types: Vec<String>,
}
