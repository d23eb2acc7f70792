//! Host binding for the local machine.
//!
//! A headless process sees a narrow capability surface: CPU and memory
//! hints, locale and timezone from the environment, and the built-in
//! software renderers. Everything else reports `Unsupported` and degrades
//! to the schema defaults downstream.

use async_trait::async_trait;
use procfs::prelude::*;
use serde_json::{Map, Value};

use super::{
    dsp, AudioGraphSpec, Canvas2d, GlSurface, Host, HostError, HostResult, SoftwareCanvas,
    SoftwareGl,
};

/// The local-machine capability provider
#[derive(Debug, Clone)]
pub struct NativeHost {
    user_agent: String,
}

impl NativeHost {
    /// Create a host bound to the current machine
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_agent: format!(
                "sigil/{} ({} {})",
                env!("CARGO_PKG_VERSION"),
                os_label(),
                std::env::consts::ARCH
            ),
        }
    }
}

impl Default for NativeHost {
    fn default() -> Self {
        Self::new()
    }
}

fn os_label() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        other => other,
    }
}

/// Quantize a raw byte count onto the coarse device-memory ladder
/// (0.25 to 8 GiB, powers of two) so the hint reads like its browser
/// counterpart instead of leaking exact RAM.
fn quantize_memory_gb(bytes: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let gb = bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    [8.0, 4.0, 2.0, 1.0, 0.5]
        .into_iter()
        .find(|&step| gb >= step)
        .unwrap_or(0.25)
}

#[async_trait]
impl Host for NativeHost {
    fn user_agent(&self) -> HostResult<String> {
        Ok(self.user_agent.clone())
    }

    fn hardware_concurrency(&self) -> HostResult<u32> {
        std::thread::available_parallelism()
            .map(|n| u32::try_from(n.get()).unwrap_or(u32::MAX))
            .map_err(|e| HostError::Failed(e.to_string()))
    }

    fn device_memory_gb(&self) -> HostResult<f64> {
        let meminfo =
            procfs::Meminfo::current().map_err(|e| HostError::Failed(e.to_string()))?;
        Ok(quantize_memory_gb(meminfo.mem_total))
    }

    fn languages(&self) -> HostResult<Vec<String>> {
        let raw = std::env::var("LANGUAGE")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| std::env::var("LANG").ok())
            .ok_or(HostError::Unsupported)?;

        let languages: Vec<String> = raw.split(':').filter_map(normalize_locale).collect();
        if languages.is_empty() {
            Err(HostError::Unsupported)
        } else {
            Ok(languages)
        }
    }

    fn time_zone(&self) -> HostResult<String> {
        if let Ok(tz) = std::env::var("TZ") {
            let tz = tz.trim_start_matches(':').to_string();
            if !tz.is_empty() {
                return Ok(tz);
            }
        }
        std::fs::read_to_string("/etc/timezone")
            .map(|s| s.trim().to_string())
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(HostError::Unsupported)
    }

    fn timezone_offset_minutes(&self) -> HostResult<i32> {
        use chrono::Offset;
        let seconds = chrono::Local::now().offset().fix().local_minus_utc();
        Ok(-(seconds / 60))
    }

    fn memory_info(&self) -> HostResult<Map<String, Value>> {
        let me = procfs::process::Process::myself()
            .map_err(|e| HostError::Failed(e.to_string()))?;
        let statm = me.statm().map_err(|e| HostError::Failed(e.to_string()))?;
        let page = procfs::page_size();

        let mut map = Map::new();
        map.insert(
            "resident_bytes".to_string(),
            Value::from(statm.resident * page),
        );
        map.insert("virtual_bytes".to_string(), Value::from(statm.size * page));
        Ok(map)
    }

    fn canvas_2d(&self, width: u32, height: u32) -> HostResult<Box<dyn Canvas2d>> {
        Ok(Box::new(SoftwareCanvas::new(width, height)))
    }

    fn gl_surface(&self) -> HostResult<Box<dyn GlSurface>> {
        Ok(Box::new(SoftwareGl::with_identity(
            Some("Software Rasterizer".to_string()),
            Some("sigil".to_string()),
            Vec::new(),
        )))
    }

    async fn render_offline_audio(&self, graph: &AudioGraphSpec) -> HostResult<Vec<f32>> {
        Ok(dsp::render(graph))
    }
}

fn normalize_locale(tag: &str) -> Option<String> {
    let tag = tag.split('.').next().unwrap_or(tag).trim();
    if tag.is_empty() || tag == "C" || tag == "POSIX" {
        return None;
    }
    Some(tag.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_ladder() {
        assert!((quantize_memory_gb(32 * 1024 * 1024 * 1024) - 8.0).abs() < f64::EPSILON);
        assert!((quantize_memory_gb(3 * 1024 * 1024 * 1024) - 2.0).abs() < f64::EPSILON);
        assert!((quantize_memory_gb(100 * 1024 * 1024) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn locale_normalization() {
        assert_eq!(normalize_locale("en_US.UTF-8"), Some("en-US".to_string()));
        assert_eq!(normalize_locale("de_DE"), Some("de-DE".to_string()));
        assert_eq!(normalize_locale("C"), None);
        assert_eq!(normalize_locale(""), None);
    }

    #[test]
    fn user_agent_carries_platform_tokens() {
        let ua = NativeHost::new().user_agent().unwrap();
        assert!(ua.starts_with("sigil/"));
        assert!(ua.contains(std::env::consts::ARCH));
    }

    #[test]
    fn software_surfaces_always_available() {
        let host = NativeHost::new();
        assert!(host.canvas_2d(10, 10).is_ok());
        assert!(host.gl_surface().is_ok());
    }
}
