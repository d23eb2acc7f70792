//! The 2D canvas artifact: a fixed two-pass text scene.

use crate::digest;
use crate::host::{Host, Rgba, TextBaseline};
use crate::probe;

const WIDTH: u32 = 187;
const HEIGHT: u32 = 35;
const FONT: &str = "14px Arial";
const TEXT: &str = "Canvas fingerprint";

// #f60, #069, rgba(102,204,0,0.7)
const RECT_FILL: Rgba = Rgba::opaque(0xff, 0x66, 0x00);
const TEXT_FILL: Rgba = Rgba::opaque(0x00, 0x66, 0x99);
const OVERLAY_FILL: Rgba = Rgba::new(102, 204, 0, 0.7);

/// Render the fixed scene and digest the canonical PNG readback.
///
/// Returns `None` when no 2D surface is obtainable or the readback fails;
/// the scene itself cannot fail.
#[must_use]
pub fn canvas_digest(host: &dyn Host) -> Option<String> {
    let mut surface = probe::or_none(host.canvas_2d(WIDTH, HEIGHT), "canvas_2d")?;

    surface.set_text_baseline(TextBaseline::Top);
    surface.set_font(FONT);
    surface.set_fill_style(RECT_FILL);
    surface.fill_rect(125.0, 1.0, 62.0, 20.0);
    surface.set_fill_style(TEXT_FILL);
    surface.fill_text(TEXT, 2.0, 15.0);
    surface.set_fill_style(OVERLAY_FILL);
    surface.fill_text(TEXT, 4.0, 17.0);

    let png = probe::or_none(surface.encode_png(), "canvas_readback")?;
    Some(digest::sha256_hex(&png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[test]
    fn digest_is_deterministic() {
        let host = StaticHost::minimal().with_canvas();
        let first = canvas_digest(&host).unwrap();
        let second = canvas_digest(&host).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn absent_surface_yields_none() {
        assert_eq!(canvas_digest(&StaticHost::minimal()), None);
    }
}
