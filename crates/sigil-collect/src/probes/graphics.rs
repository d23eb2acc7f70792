//! 3D stack identity: context strings plus the GPU adapter profile.

use serde_json::{Map, Value};

use sigil_core::Graphics;

use crate::host::Host;
use crate::probe;

/// Probe the 3D context identity and the GPU adapter.
pub async fn graphics(host: &dyn Host) -> Graphics {
    let (webgl_renderer, webgl_vendor, webgl_extensions) =
        probe::or_none(host.gl_surface(), "gl_surface").map_or((None, None, Vec::new()), |gl| {
            (gl.renderer(), gl.vendor(), gl.extensions())
        });

    let webgpu_adapter = match host.gpu_adapter().await {
        Ok(Some(adapter)) => match serde_json::to_value(adapter) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        },
        // No entry point and no obtainable adapter read the same: {}
        Ok(None) | Err(_) => Map::new(),
    };

    Graphics {
        webgl_renderer,
        webgl_vendor,
        webgl_extensions,
        webgpu_adapter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use sigil_core::GpuAdapterInfo;

    #[tokio::test]
    async fn no_context_and_no_adapter_degrades_fully() {
        let g = graphics(&StaticHost::minimal()).await;
        assert_eq!(g.webgl_renderer, None);
        assert_eq!(g.webgl_vendor, None);
        assert!(g.webgl_extensions.is_empty());
        assert!(g.webgpu_adapter.is_empty());
    }

    #[tokio::test]
    async fn webgpu_without_adapter_is_empty_mapping() {
        let g = graphics(&StaticHost::minimal().with_webgpu_no_adapter()).await;
        assert!(g.webgpu_adapter.is_empty());
    }

    #[tokio::test]
    async fn context_identity_flows_through() {
        let host = StaticHost::minimal().with_webgl(
            "ANGLE (NVIDIA GeForce RTX 3060)",
            "Google Inc. (NVIDIA)",
            vec!["OES_texture_float".to_string(), "EXT_sRGB".to_string()],
        );

        let g = graphics(&host).await;
        assert!(g.has_webgl());
        assert_eq!(g.webgl_vendor.as_deref(), Some("Google Inc. (NVIDIA)"));
        assert_eq!(g.webgl_extensions.len(), 2);
    }

    #[tokio::test]
    async fn adapter_profile_serializes_with_wire_names() {
        let adapter = GpuAdapterInfo {
            name: Some("mock-gpu".to_string()),
            features: vec!["texture-compression-bc".to_string()],
            limits: Map::new(),
            is_fallback_adapter: true,
        };
        let g = graphics(&StaticHost::minimal().with_gpu_adapter(adapter)).await;

        assert_eq!(
            g.webgpu_adapter.get("name"),
            Some(&Value::String("mock-gpu".to_string()))
        );
        assert_eq!(
            g.webgpu_adapter.get("isFallbackAdapter"),
            Some(&Value::Bool(true))
        );
    }
}
