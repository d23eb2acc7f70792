//! The signal aggregator.

use std::sync::Arc;

use tracing::debug;

use sigil_core::{Behavioral, CanvasArtifacts, FingerprintRecord, Fonts, IpInfo, RecordParts};

use crate::host::Host;
use crate::probes;
use crate::render;

/// Drives every probe and renderer and assembles the record.
///
/// One collection pass owns its own rendering surfaces and holds no state
/// afterwards; collecting twice builds two independent records.
#[derive(Clone)]
pub struct Collector {
    host: Arc<dyn Host>,
}

impl Collector {
    /// Create a collector over the given host binding
    #[must_use]
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self { host }
    }

    /// Run one collection pass.
    ///
    /// Independent categories fan out concurrently and join before
    /// assembly; probe failures degrade to the category defaults, so this
    /// cannot fail -- the record always carries the full schema.
    pub async fn collect(&self) -> FingerprintRecord {
        let host: &dyn Host = &*self.host;
        debug!("collection pass started");

        let (audio, graphics, media, encrypted_media_capabilities, storage, permissions) =
            futures_util::join!(
                render::audio_artifact(host),
                probes::graphics(host),
                probes::media(host),
                probes::encrypted_media(host),
                probes::storage(host),
                probes::permissions(host),
            );

        let canvas = CanvasArtifacts {
            canvas_hash: render::canvas_digest(host),
            webgl_hash: render::webgl_digest(host),
        };

        let record = RecordParts {
            // Populated out-of-band; the placeholders are part of the shape
            ip: Some(IpInfo::default()),
            audio: Some(audio),
            behavioral: Some(Behavioral::default()),
            browser: Some(probes::browser(host)),
            canvas: Some(canvas),
            css_features: Some(probes::css_features(host)),
            display: Some(probes::display(host)),
            fonts: Some(Fonts::default()),
            graphics: Some(graphics),
            hardware: Some(probes::hardware(host)),
            http_header_fingerprint: Some(probes::http_header(host)),
            media: Some(media),
            network: Some(probes::network(host)),
            performance: Some(probes::performance(host)),
            permissions: Some(permissions),
            plugins: Some(probes::plugins(host)),
            encrypted_media_capabilities: Some(encrypted_media_capabilities),
            storage: Some(storage),
            time_zone: Some(probes::time_zone(host)),
            touch_pointer: Some(probes::touch_pointer(host)),
        }
        .assemble();

        debug!(
            canvas = record.canvas.canvas_hash.is_some(),
            webgl = record.canvas.webgl_hash.is_some(),
            audio = record.audio.audio_hash.is_some(),
            "collection pass finished"
        );
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use sigil_core::CATEGORY_KEYS;

    fn collector(host: StaticHost) -> Collector {
        Collector::new(Arc::new(host))
    }

    #[tokio::test]
    async fn minimal_host_still_yields_full_schema() {
        let record = collector(StaticHost::minimal()).collect().await;
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), CATEGORY_KEYS.len());
        for key in CATEGORY_KEYS {
            assert!(object.contains_key(key), "missing category {key}");
        }
    }

    #[tokio::test]
    async fn missing_webgl_leaves_other_artifacts_intact() {
        let host = StaticHost::minimal().with_canvas().with_offline_audio();
        let record = collector(host).collect().await;

        assert_eq!(record.graphics.webgl_renderer, None);
        assert_eq!(record.graphics.webgl_vendor, None);
        assert!(record.graphics.webgl_extensions.is_empty());
        assert_eq!(record.canvas.webgl_hash, None);

        assert!(record.canvas.canvas_hash.is_some());
        assert!(record.audio.audio_hash.is_some());
    }

    #[tokio::test]
    async fn deterministic_fields_are_stable_across_passes() {
        let c = collector(
            StaticHost::minimal()
                .with_canvas()
                .with_webgl("r", "v", vec![])
                .with_offline_audio()
                .with_user_agent("Mozilla/5.0 (X11; Linux x86_64) Chrome/124.0.0.0 Safari/537.36")
                .with_hardware_concurrency(8),
        );

        let first = c.collect().await;
        let second = c.collect().await;

        assert_eq!(first.canvas, second.canvas);
        assert_eq!(first.audio, second.audio);
        assert_eq!(first.hardware, second.hardware);
        assert_eq!(first.graphics, second.graphics);
    }

    #[tokio::test]
    async fn collection_is_read_only() {
        // A static host has no mutable surface; byte-identical records
        // across passes double as the non-interference check.
        let c = collector(
            StaticHost::minimal()
                .with_canvas()
                .with_offline_audio()
                .with_service_workers(vec!["https://example.test/".to_string()])
                .with_cache_keys(vec!["v1".to_string()]),
        );

        let first = c.collect().await;
        let second = c.collect().await;
        assert_eq!(first, second);
        assert_eq!(
            first.storage.service_workers,
            vec!["https://example.test/".to_string()]
        );
    }

    #[tokio::test]
    async fn placeholder_categories_stay_empty() {
        let record = collector(StaticHost::minimal()).collect().await;
        assert_eq!(record.ip.ip_address, None);
        assert!(record.ip.details.is_empty());
        assert!(record.fonts.installed_fonts.is_empty());
        assert_eq!(record.behavioral.typing_speed, None);
    }
}
