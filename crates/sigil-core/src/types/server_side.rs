//! Categories populated out-of-band.
//!
//! These keys are part of the record shape but are filled in server side
//! (`http_header_fingerprint`), by a later behavioral layer (`behavioral`),
//! or not at all yet (`fonts`). The collection pipeline emits their
//! documented placeholders.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Transport-level request fingerprint
///
/// Everything except `referer` is only observable at the receiving server;
/// the client emits nulls/empty lists and the server overwrites them (see
/// `sigil_transport::http_header`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpHeaderFingerprint {
    /// Total number of request headers
    #[serde(default)]
    pub header_count: Option<u32>,

    /// HTTP protocol version of the request
    #[serde(default)]
    pub http_version: Option<String>,

    /// Negotiated TLS protocol version
    #[serde(default)]
    pub tls_protocol: Option<String>,

    /// Negotiated TLS cipher suite
    #[serde(default)]
    pub tls_cipher_suite: Option<String>,

    /// Header names present on the request
    #[serde(default)]
    pub headers_present: Vec<String>,

    /// Header names outside the common set
    #[serde(default)]
    pub unusual_headers: Vec<String>,

    /// Referring document, as visible to the client
    #[serde(default)]
    pub referer: Option<String>,
}

/// Behavioral biometrics placeholder
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Behavioral {
    /// Average typing speed
    #[serde(default)]
    pub typing_speed: Option<f64>,

    /// Mouse-movement randomness measure
    #[serde(default)]
    pub mouse_entropy: Option<f64>,

    /// Keystroke timing statistics
    #[serde(default)]
    pub keystroke_dynamics: BTreeMap<String, f64>,

    /// Scroll event statistics
    #[serde(default)]
    pub scroll_behavior: BTreeMap<String, f64>,

    /// URLs visited during the session
    #[serde(default)]
    pub url_changes: Vec<String>,

    /// Visit-time patterns
    #[serde(default)]
    pub time_of_visit_patterns: Vec<String>,
}

/// Installed-font enumeration placeholder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    /// Installed system fonts
    #[serde(default)]
    pub installed_fonts: Vec<String>,
}
