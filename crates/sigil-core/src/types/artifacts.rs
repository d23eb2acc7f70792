use serde::{Deserialize, Serialize};

/// Digests of the 2D and 3D rendered artifacts
///
/// Both fields are 64-character lowercase hex SHA-256 digests, or `None`
/// when the underlying rendering capability is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasArtifacts {
    /// Digest of the canonical PNG bytes of the 2D text scene
    #[serde(default)]
    pub canvas_hash: Option<String>,

    /// Digest of the comma-joined RGBA readback of the cleared 3D surface
    #[serde(default)]
    pub webgl_hash: Option<String>,
}

impl CanvasArtifacts {
    /// Returns true if at least one rendering modality produced a digest
    #[must_use]
    pub const fn any_rendered(&self) -> bool {
        self.canvas_hash.is_some() || self.webgl_hash.is_some()
    }
}

/// The synthesized-audio artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioArtifact {
    /// Absolute sample-magnitude sum of the rendered buffer, as a decimal
    /// string; `None` when offline rendering is unsupported or fails
    #[serde(default)]
    pub audio_hash: Option<String>,
}
