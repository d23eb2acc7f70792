use serde::{Deserialize, Serialize};

/// Storage usage and quota estimate in bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageEstimate {
    /// Bytes in use
    #[serde(default)]
    pub usage: u64,

    /// Quota available to the origin
    #[serde(default)]
    pub quota: u64,
}

/// Storage surfaces visible to the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageInfo {
    /// Whether cookies are enabled; `None` when unknowable
    #[serde(default)]
    pub cookies_enabled: Option<bool>,

    /// Usage/quota accounting; 0/0 when the surface is absent
    #[serde(default)]
    pub storage_estimate: StorageEstimate,

    /// Registered service-worker scopes
    #[serde(default)]
    pub service_workers: Vec<String>,

    /// IndexedDB database names
    #[serde(default)]
    pub indexeddb_dbs: Vec<String>,

    /// Cache-storage keys
    #[serde(default)]
    pub cache_storage_keys: Vec<String>,
}
