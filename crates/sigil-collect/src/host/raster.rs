//! Software rendering surfaces for hosts without a real graphics stack.
//!
//! Determinism is the contract here: the same draw sequence must yield the
//! same bytes on every run, on every machine running this code.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use super::{Canvas2d, GlSurface, HostError, HostResult, Rgba, TextBaseline};

/// Deterministic software 2D surface with src-over alpha blending
pub struct SoftwareCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    fill: Rgba,
    font_px: f64,
    baseline: TextBaseline,
}

impl SoftwareCanvas {
    /// Create a transparent surface of the given size
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
            fill: Rgba::opaque(0, 0, 0),
            font_px: 10.0,
            baseline: TextBaseline::Alphabetic,
        }
    }

    fn blend_pixel(&mut self, x: i64, y: i64) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_sign_loss)]
        let idx = ((y as u64 * u64::from(self.width) + x as u64) * 4) as usize;
        let src = self.fill;
        let a = f64::from(src.a.clamp(0.0, 1.0));
        for (channel, value) in [src.r, src.g, src.b].into_iter().enumerate() {
            let dst = f64::from(self.pixels[idx + channel]);
            let out = f64::from(value) * a + dst * (1.0 - a);
            self.pixels[idx + channel] = round_channel(out);
        }
        let dst_a = f64::from(self.pixels[idx + 3]);
        self.pixels[idx + 3] = round_channel(255.0 * a + dst_a * (1.0 - a));
    }

    fn blend_rect(&mut self, x0: i64, y0: i64, w: i64, h: i64) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                self.blend_pixel(x, y);
            }
        }
    }

    /// Top edge of a glyph cell for the current baseline
    fn glyph_top(&self, y: f64) -> f64 {
        match self.baseline {
            TextBaseline::Top => y,
            // Approximate ascent of 80% of the em box
            TextBaseline::Alphabetic => y - self.font_px * 0.8,
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation)]
fn to_cell(v: f64) -> i64 {
    v.round() as i64
}

/// Bit pattern for one glyph row.
///
/// The surface needs deterministic, per-character-distinct shapes, not
/// legible text; glyphs are 5x7 cells whose bits mix the character code and
/// row index. A real embedder substitutes its own text stack behind
/// [`Canvas2d`].
fn glyph_row(c: char, row: u32) -> u8 {
    let mut x = (c as u32)
        .wrapping_mul(0x9E37_79B9)
        .wrapping_add(row.wrapping_mul(0x85EB_CA6B));
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2_AE35);
    x ^= x >> 16;
    (x & 0x1F) as u8
}

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;

impl Canvas2d for SoftwareCanvas {
    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.baseline = baseline;
    }

    fn set_font(&mut self, font: &str) {
        // CSS shorthand: leading "<size>px" is all this surface honors
        if let Some(px) = font
            .split_whitespace()
            .next()
            .and_then(|t| t.strip_suffix("px"))
            .and_then(|t| t.parse::<f64>().ok())
        {
            self.font_px = px;
        }
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.blend_rect(to_cell(x), to_cell(y), to_cell(width), to_cell(height));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let cell_w = self.font_px * 0.6;
        let top = self.glyph_top(y);
        let sx = cell_w / f64::from(GLYPH_COLS);
        let sy = self.font_px / f64::from(GLYPH_ROWS);

        let mut pen = x;
        for c in text.chars() {
            if c != ' ' {
                for row in 0..GLYPH_ROWS {
                    let bits = glyph_row(c, row);
                    for col in 0..GLYPH_COLS {
                        if bits & (1 << col) != 0 {
                            let px = pen + f64::from(col) * sx;
                            let py = top + f64::from(row) * sy;
                            self.blend_rect(
                                to_cell(px),
                                to_cell(py),
                                to_cell(sx).max(1),
                                to_cell(sy).max(1),
                            );
                        }
                    }
                }
            }
            pen += cell_w + 1.0;
        }
    }

    fn encode_png(&self) -> HostResult<Vec<u8>> {
        let img = RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or_else(|| HostError::Failed("pixel buffer size mismatch".to_string()))?;
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png)
            .map_err(|e| HostError::Failed(e.to_string()))?;
        Ok(out.into_inner())
    }
}

/// Software 3D surface: clear and readback only
pub struct SoftwareGl {
    viewport: (u32, u32),
    clear: [f32; 4],
    pixels: Option<Vec<u8>>,
    renderer: Option<String>,
    vendor: Option<String>,
    extensions: Vec<String>,
}

impl SoftwareGl {
    /// Surface reporting the given driver identity
    #[must_use]
    pub fn with_identity(
        renderer: Option<String>,
        vendor: Option<String>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            // Default surface size before the caller sets a viewport
            viewport: (300, 150),
            clear: [0.0; 4],
            pixels: None,
            renderer,
            vendor,
            extensions,
        }
    }

    fn buffer_len(&self) -> usize {
        (self.viewport.0 * self.viewport.1 * 4) as usize
    }
}

impl GlSurface for SoftwareGl {
    fn renderer(&self) -> Option<String> {
        self.renderer.clone()
    }

    fn vendor(&self) -> Option<String> {
        self.vendor.clone()
    }

    fn extensions(&self) -> Vec<String> {
        self.extensions.clone()
    }

    fn viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        self.pixels = None;
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.clear = [r, g, b, a];
    }

    fn clear(&mut self) {
        let rgba: [u8; 4] = [
            float_channel(self.clear[0]),
            float_channel(self.clear[1]),
            float_channel(self.clear[2]),
            float_channel(self.clear[3]),
        ];
        let len = self.buffer_len();
        let mut buf = Vec::with_capacity(len);
        for _ in 0..len / 4 {
            buf.extend_from_slice(&rgba);
        }
        self.pixels = Some(buf);
    }

    fn read_pixels(&self) -> Vec<u8> {
        // An uncleared buffer reads back as zeros
        self.pixels
            .clone()
            .unwrap_or_else(|| vec![0; self.buffer_len()])
    }
}

/// Fixed-point conversion of a clamped float channel
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_channel(c: f32) -> u8 {
    (f64::from(c.clamp(0.0, 1.0)) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_draw_is_deterministic() {
        let draw = || {
            let mut c = SoftwareCanvas::new(187, 35);
            c.set_text_baseline(TextBaseline::Top);
            c.set_font("14px Arial");
            c.set_fill_style(Rgba::opaque(255, 102, 0));
            c.fill_rect(125.0, 1.0, 62.0, 20.0);
            c.set_fill_style(Rgba::new(102, 204, 0, 0.7));
            c.fill_text("Canvas fingerprint", 4.0, 17.0);
            c.encode_png().unwrap()
        };
        assert_eq!(draw(), draw());
        assert!(!draw().is_empty());
    }

    #[test]
    fn alpha_blend_covers_opaque_fill() {
        let mut c = SoftwareCanvas::new(4, 4);
        c.set_fill_style(Rgba::opaque(255, 102, 0));
        c.fill_rect(0.0, 0.0, 4.0, 4.0);
        c.set_fill_style(Rgba::new(0, 0, 255, 0.5));
        c.fill_rect(0.0, 0.0, 4.0, 4.0);

        // 50% blue over opaque orange
        assert_eq!(&c.pixels[..4], &[128, 51, 128, 255]);
    }

    #[test]
    fn gl_clear_converts_channels_fixed_point() {
        let mut gl = SoftwareGl::with_identity(None, None, vec![]);
        gl.viewport(2, 2);
        gl.clear_color(0.1, 0.2, 0.3, 1.0);
        gl.clear();

        let pixels = gl.read_pixels();
        assert_eq!(pixels.len(), 16);
        assert_eq!(&pixels[..4], &[26, 51, 77, 255]);
    }

    #[test]
    fn gl_readback_before_clear_is_zeroed() {
        let mut gl = SoftwareGl::with_identity(None, None, vec![]);
        gl.viewport(2, 1);
        assert_eq!(gl.read_pixels(), vec![0; 8]);
    }
}
