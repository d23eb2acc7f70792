use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Connection-quality hints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConnection {
    /// Effective connection type (e.g. `"4g"`); empty when unknown
    #[serde(default)]
    pub effective_type: String,

    /// Approximate downlink bandwidth in Mbps; 0 when unknown
    #[serde(default)]
    pub downlink: f64,

    /// Round-trip-time estimate in milliseconds; 0 when unknown
    #[serde(default)]
    pub rtt: u32,
}

/// Client address and geolocation details
///
/// Populated out-of-band (server side or by an external lookup); the
/// collection pipeline emits the empty placeholder by design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    /// Public IP address
    #[serde(default)]
    pub ip_address: Option<String>,

    /// Lookup details (city, region, ASN, ...), as an open mapping
    #[serde(default)]
    pub details: Map<String, Value>,
}
