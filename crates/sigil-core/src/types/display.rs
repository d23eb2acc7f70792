use serde::{Deserialize, Serialize};

/// Supported color gamut, widest first in probe order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorGamut {
    /// BT.2020 wide gamut
    Rec2020,
    /// Display-P3
    P3,
    /// Standard sRGB
    Srgb,
}

impl ColorGamut {
    /// All gamuts in probe order (widest match wins)
    pub const PROBE_ORDER: [Self; 3] = [Self::Rec2020, Self::P3, Self::Srgb];
}

impl std::fmt::Display for ColorGamut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rec2020 => write!(f, "rec2020"),
            Self::P3 => write!(f, "p3"),
            Self::Srgb => write!(f, "srgb"),
        }
    }
}

/// Screen geometry and color capabilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayInfo {
    /// Screen height in physical pixels
    #[serde(default)]
    pub screen_height: Option<u32>,

    /// Screen width in physical pixels
    #[serde(default)]
    pub screen_width: Option<u32>,

    /// Color depth in bits
    #[serde(default)]
    pub color_depth: Option<u32>,

    /// Ratio of physical pixels to CSS pixels
    #[serde(default)]
    pub device_pixel_ratio: Option<f64>,

    /// Widest supported color gamut
    #[serde(default)]
    pub color_gamut: Option<ColorGamut>,
}

impl DisplayInfo {
    /// Returns width and height as a tuple if both are known
    #[must_use]
    pub const fn resolution(&self) -> Option<(u32, u32)> {
        match (self.screen_width, self.screen_height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

/// CSS media-feature preferences
///
/// The first three features read as plain booleans (an unsupported query
/// reads as "not matched"); `reduced_data` and `forced_colors` keep a
/// tri-state because several engines do not implement the query at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssFeatures {
    /// Dark color-scheme preference
    #[serde(default)]
    pub prefers_dark_scheme: bool,

    /// Font smoothing enabled
    #[serde(default)]
    pub font_smoothing: bool,

    /// Reduced-motion preference
    #[serde(default)]
    pub reduced_motion: bool,

    /// Reduced-data preference
    #[serde(default)]
    pub reduced_data: Option<bool>,

    /// Forced-colors (high contrast) mode active
    #[serde(default)]
    pub forced_colors: Option<bool>,
}

/// Touch and pointer capabilities
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TouchPointer {
    /// Maximum simultaneous touch points; 0 when unknown or non-touch
    #[serde(default)]
    pub max_touch_points: u32,

    /// Fine (mouse-class) pointer available
    #[serde(default)]
    pub pointer_fine: bool,

    /// Running in standalone display mode
    #[serde(default)]
    pub standalone: bool,
}
