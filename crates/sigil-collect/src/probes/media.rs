//! Codec, device and key-system probes.
//!
//! Candidates are probed strictly in listed order and appended on success
//! only; an unsupported or erroring candidate is skipped silently, never
//! recorded as an explicit failure.

use sigil_core::{EncryptedMediaCapabilities, Media};

use crate::host::{Host, KeySystemConfig, VideoDecodeConfig};
use crate::probe;

/// Audio codec candidates, in probe order
pub const AUDIO_CODEC_CANDIDATES: [&str; 3] = [
    "audio/mp4; codecs=\"mp4a.40.2\"",
    "audio/webm; codecs=\"opus\"",
    "audio/ogg; codecs=\"vorbis\"",
];

/// Video codec candidates, in probe order
pub const VIDEO_CODEC_CANDIDATES: [&str; 4] = [
    "video/mp4; codecs=\"avc1.42E01E\"",
    "video/webm; codecs=\"vp8\"",
    "video/webm; codecs=\"vp9\"",
    "video/ogg; codecs=\"theora\"",
];

/// Key-system candidates, in probe order
pub const KEY_SYSTEM_CANDIDATES: [&str; 3] = [
    "com.widevine.alpha",
    "com.microsoft.playready",
    "com.apple.fps.1_0",
];

/// Probe codec support and enumerate media devices.
pub async fn media(host: &dyn Host) -> Media {
    let mut audio_codecs = Vec::new();
    for candidate in AUDIO_CODEC_CANDIDATES {
        if matches!(host.audio_codec_supported(candidate).await, Ok(true)) {
            audio_codecs.push(candidate.to_string());
        }
    }

    let mut video_codecs = Vec::new();
    for candidate in VIDEO_CODEC_CANDIDATES {
        let config = VideoDecodeConfig::for_candidate(candidate);
        if matches!(host.video_codec_supported(&config).await, Ok(true)) {
            video_codecs.push(candidate.to_string());
        }
    }

    let media_devices = probe::or_default(host.media_devices().await, "media_devices");

    Media {
        audio_codecs,
        video_codecs,
        media_devices,
    }
}

/// Probe which key systems grant access.
pub async fn encrypted_media(host: &dyn Host) -> EncryptedMediaCapabilities {
    let config = KeySystemConfig::default();

    let mut cdm_list = Vec::new();
    for candidate in KEY_SYSTEM_CANDIDATES {
        if matches!(host.key_system_supported(candidate, &config).await, Ok(true)) {
            cdm_list.push(candidate.to_string());
        }
    }

    EncryptedMediaCapabilities { cdm_list }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;
    use sigil_core::{MediaDeviceInfo, MediaDeviceKind};

    #[tokio::test]
    async fn only_supported_candidates_appear() {
        // Middle candidate only: result is ["B"] of [A, B, C]
        let host = StaticHost::minimal().with_audio_codec(AUDIO_CODEC_CANDIDATES[1]);
        let m = media(&host).await;
        assert_eq!(m.audio_codecs, vec![AUDIO_CODEC_CANDIDATES[1].to_string()]);
    }

    #[tokio::test]
    async fn candidate_order_is_preserved() {
        // Configure support "backwards"; output must follow the probe list
        let host = StaticHost::minimal()
            .with_video_codec(VIDEO_CODEC_CANDIDATES[2])
            .with_video_codec(VIDEO_CODEC_CANDIDATES[0]);

        let m = media(&host).await;
        assert_eq!(
            m.video_codecs,
            vec![
                VIDEO_CODEC_CANDIDATES[0].to_string(),
                VIDEO_CODEC_CANDIDATES[2].to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn absent_surface_yields_empty_lists() {
        let m = media(&StaticHost::minimal()).await;
        assert!(m.audio_codecs.is_empty());
        assert!(m.video_codecs.is_empty());
        assert!(m.media_devices.is_empty());
    }

    #[tokio::test]
    async fn probed_but_unsupported_is_also_empty() {
        // Surface present, nothing decodes: same empty-list convention
        let m = media(&StaticHost::minimal().with_media_capabilities()).await;
        assert!(m.audio_codecs.is_empty());

        let e = encrypted_media(&StaticHost::minimal().with_encrypted_media()).await;
        assert!(e.cdm_list.is_empty());
    }

    #[tokio::test]
    async fn key_systems_follow_candidate_order() {
        let host = StaticHost::minimal()
            .with_key_system(KEY_SYSTEM_CANDIDATES[2])
            .with_key_system(KEY_SYSTEM_CANDIDATES[0]);

        let e = encrypted_media(&host).await;
        assert_eq!(
            e.cdm_list,
            vec![
                KEY_SYSTEM_CANDIDATES[0].to_string(),
                KEY_SYSTEM_CANDIDATES[2].to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn devices_flow_through() {
        let devices = vec![MediaDeviceInfo {
            device_id: "default".to_string(),
            kind: MediaDeviceKind::AudioInput,
            label: String::new(),
            group_id: "g1".to_string(),
        }];
        let m = media(&StaticHost::minimal().with_media_devices(devices.clone())).await;
        assert_eq!(m.media_devices, devices);
    }
}
