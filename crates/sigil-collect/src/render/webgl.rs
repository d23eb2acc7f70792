//! The 3D artifact: a bare clear, isolating driver-level differences.

use crate::digest;
use crate::host::Host;
use crate::probe;

const WIDTH: u32 = 256;
const HEIGHT: u32 = 256;
const CLEAR_COLOR: [f32; 4] = [0.1, 0.2, 0.3, 1.0];

/// Clear a fixed surface and digest the comma-joined decimal readback.
///
/// No draw calls beyond the clear. Returns `None` when no 3D context is
/// obtainable.
#[must_use]
pub fn webgl_digest(host: &dyn Host) -> Option<String> {
    let mut gl = probe::or_none(host.gl_surface(), "gl_surface")?;

    gl.viewport(WIDTH, HEIGHT);
    gl.clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);
    gl.clear();

    let pixels = gl.read_pixels();
    Some(digest::sha256_hex(
        digest::comma_joined(&pixels).as_bytes(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    fn gl_host() -> StaticHost {
        StaticHost::minimal().with_webgl("ANGLE (test)", "test-vendor", vec![])
    }

    #[test]
    fn digest_is_deterministic() {
        let host = gl_host();
        assert_eq!(webgl_digest(&host), webgl_digest(&host));
    }

    #[test]
    fn digest_matches_readback_encoding() {
        let host = gl_host();
        let digest_value = webgl_digest(&host).unwrap();

        // Recompute from the known clear result: every pixel (26,51,77,255)
        let pixels: Vec<u8> = std::iter::repeat([26u8, 51, 77, 255])
            .take(256 * 256)
            .flatten()
            .collect();
        let expected = digest::sha256_hex(digest::comma_joined(&pixels).as_bytes());
        assert_eq!(digest_value, expected);
    }

    #[test]
    fn absent_context_yields_none() {
        assert_eq!(webgl_digest(&StaticHost::minimal()), None);
    }
}
