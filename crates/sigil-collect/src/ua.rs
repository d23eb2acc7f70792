//! User-agent derivation: OS, browser product, engine, architecture.
//!
//! Plain token scanning; the version grammars involved are too small to
//! justify a regex engine.

use sigil_core::Architecture;

/// Extract an OS name and version from a user-agent string.
///
/// Falls back to `"Unknown"` when no known token matches.
#[must_use]
pub fn extract_os(ua: &str) -> String {
    if let Some(v) = os_version(ua, "Windows NT ") {
        return format!("Windows {v}");
    }
    if let Some(v) = os_version(ua, "Mac OS X ") {
        return format!("macOS {v}");
    }
    if let Some(v) = os_version(ua, "Android ") {
        return format!("Android {v}");
    }
    if let Some(v) = os_version(ua, "iPhone OS ").or_else(|| os_version(ua, "CPU OS ")) {
        return format!("iOS {v}");
    }
    if ua.contains("Linux") {
        return "Linux".to_string();
    }
    "Unknown".to_string()
}

/// Derive the browser product and major.minor version.
///
/// Token precedence matters: Opera and Edge ship a Chrome token, Chrome
/// ships a Safari token.
#[must_use]
pub fn browser_product(ua: &str) -> String {
    if let Some(v) = browser_version(ua, "OPR/") {
        return format!("Opera {v}");
    }
    if let Some(v) = browser_version(ua, "Edg/") {
        return format!("Edge {v}");
    }
    if !ua.contains("Edg") && !ua.contains("OPR") {
        if let Some(v) = browser_version(ua, "Chrome/") {
            return format!("Chrome {v}");
        }
    }
    if let Some(v) = browser_version(ua, "Firefox/") {
        return format!("Firefox {v}");
    }
    if ua.contains("Safari") {
        if let Some(v) = browser_version(ua, "Version/") {
            return format!("Safari {v}");
        }
    }
    if let Some(v) = browser_version(ua, "MSIE ") {
        return format!("IE {v}");
    }
    if ua.contains("Trident/") {
        if let Some(v) = browser_version(ua, "rv:") {
            return format!("IE {v}");
        }
    }
    "Unknown".to_string()
}

/// Derive the rendering engine family.
#[must_use]
pub fn engine(ua: &str) -> String {
    let blink = ua.contains("OPR") || ua.contains("Edg") || ua.contains("Chrome");
    if blink {
        return "Blink".to_string();
    }
    if ua.contains("Firefox") {
        return "Gecko".to_string();
    }
    if ua.contains("Safari") {
        return "WebKit".to_string();
    }
    if ua.contains("Trident") || ua.contains("MSIE") {
        return "Trident".to_string();
    }
    "Unknown".to_string()
}

/// Infer the CPU architecture; ARM tokens win over x86 tokens.
#[must_use]
pub fn architecture(ua: &str) -> Option<Architecture> {
    let lower = ua.to_lowercase();
    if lower.contains("arm") || lower.contains("aarch64") {
        return Some(Architecture::Arm);
    }
    if ["x86_64", "win64", "wow64", "x64", "amd64"]
        .iter()
        .any(|t| lower.contains(t))
    {
        return Some(Architecture::X86_64);
    }
    None
}

/// Full version run after `token`, with `_` separators normalized to `.`.
fn os_version(ua: &str, token: &str) -> Option<String> {
    let run = version_run(ua, token, &['.', '_'])?;
    Some(run.replace('_', "."))
}

/// Version after `token`, truncated to major.minor.
fn browser_version(ua: &str, token: &str) -> Option<String> {
    let run = version_run(ua, token, &['.'])?;
    let mut parts = run.split('.');
    let major = parts.next()?;
    Some(match parts.next() {
        Some(minor) if !minor.is_empty() => format!("{major}.{minor}"),
        _ => major.to_string(),
    })
}

/// The maximal run of digits and `separators` following `token`.
fn version_run(ua: &str, token: &str, separators: &[char]) -> Option<String> {
    let start = ua.find(token)? + token.len();
    let run: String = ua[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || separators.contains(c))
        .collect();
    let trimmed = run.trim_matches(|c: char| !c.is_ascii_digit());
    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        Some(trimmed.to_string())
    } else {
        None
    }
}
