//! The audio artifact: offline synthesis reduced to one scalar.

use sigil_core::AudioArtifact;

use crate::host::{AudioGraphSpec, Host};
use crate::probe;

/// Render the fixed audio graph and reduce it to the absolute sample sum.
///
/// The render must run to completion before the category counts as
/// populated; an unsupported or failing pipeline resolves to `None` instead
/// of hanging.
pub async fn audio_artifact(host: &dyn Host) -> AudioArtifact {
    let graph = AudioGraphSpec::fingerprint();
    let samples = probe::or_none(
        host.render_offline_audio(&graph).await,
        "render_offline_audio",
    );

    AudioArtifact {
        audio_hash: samples.map(|buf| {
            let sum: f64 = buf.iter().map(|s| f64::from(s.abs())).sum();
            sum.to_string()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[tokio::test]
    async fn scalar_is_stable_across_renders() {
        let host = StaticHost::minimal().with_offline_audio();
        let first = audio_artifact(&host).await.audio_hash.unwrap();
        let second = audio_artifact(&host).await.audio_hash.unwrap();

        assert_eq!(first, second);
        assert!(first.parse::<f64>().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn absent_pipeline_yields_null() {
        let artifact = audio_artifact(&StaticHost::minimal()).await;
        assert!(artifact.audio_hash.is_none());
    }
}
