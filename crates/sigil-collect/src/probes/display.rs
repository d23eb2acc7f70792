//! Display, CSS-feature and touch/pointer probes.

use sigil_core::{ColorGamut, CssFeatures, DisplayInfo, TouchPointer};

use crate::host::{Host, MediaFeature};
use crate::probe;

/// Probe screen geometry and the supported color gamut.
pub fn display(host: &dyn Host) -> DisplayInfo {
    let screen = probe::or_none(host.screen(), "screen");

    // Widest gamut that matches, in probe order
    let color_gamut = ColorGamut::PROBE_ORDER.into_iter().find(|gamut| {
        matches!(
            host.media_feature(MediaFeature::ColorGamut(*gamut)),
            Ok(true)
        )
    });

    DisplayInfo {
        screen_height: screen.map(|s| s.height),
        screen_width: screen.map(|s| s.width),
        color_depth: screen.map(|s| s.color_depth),
        device_pixel_ratio: screen.map(|s| s.device_pixel_ratio),
        color_gamut,
    }
}

/// Probe CSS media-feature preferences.
pub fn css_features(host: &dyn Host) -> CssFeatures {
    CssFeatures {
        prefers_dark_scheme: probe::or_default(
            host.media_feature(MediaFeature::PrefersDarkScheme),
            "prefers_dark_scheme",
        ),
        font_smoothing: probe::or_default(host.font_smoothing(), "font_smoothing"),
        reduced_motion: probe::or_default(
            host.media_feature(MediaFeature::ReducedMotion),
            "reduced_motion",
        ),
        reduced_data: probe::or_none(
            host.media_feature(MediaFeature::ReducedData),
            "reduced_data",
        ),
        forced_colors: probe::or_none(
            host.media_feature(MediaFeature::ForcedColors),
            "forced_colors",
        ),
    }
}

/// Probe touch and pointer capabilities.
pub fn touch_pointer(host: &dyn Host) -> TouchPointer {
    TouchPointer {
        max_touch_points: probe::or_default(host.max_touch_points(), "max_touch_points"),
        pointer_fine: probe::or_default(
            host.media_feature(MediaFeature::PointerFine),
            "pointer_fine",
        ),
        standalone: probe::or_default(
            host.media_feature(MediaFeature::DisplayStandalone),
            "standalone",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticHost;

    #[test]
    fn widest_matching_gamut_wins() {
        let host = StaticHost::minimal()
            .with_media_feature(MediaFeature::ColorGamut(ColorGamut::Srgb), true)
            .with_media_feature(MediaFeature::ColorGamut(ColorGamut::P3), true)
            .with_media_feature(MediaFeature::ColorGamut(ColorGamut::Rec2020), false);

        assert_eq!(display(&host).color_gamut, Some(ColorGamut::P3));
    }

    #[test]
    fn minimal_host_degrades_to_nulls() {
        let info = display(&StaticHost::minimal());
        assert_eq!(info.screen_width, None);
        assert_eq!(info.color_gamut, None);

        let css = css_features(&StaticHost::minimal());
        assert!(!css.prefers_dark_scheme);
        assert_eq!(css.reduced_data, None);
        assert_eq!(css.forced_colors, None);
    }

    #[test]
    fn screen_metrics_flow_through() {
        let host = StaticHost::minimal().with_screen(2560, 1440, 30, 2.0);
        let info = display(&host);
        assert_eq!(info.resolution(), Some((2560, 1440)));
        assert_eq!(info.color_depth, Some(30));
    }

    #[test]
    fn touch_defaults_are_zero_and_false() {
        let tp = touch_pointer(&StaticHost::minimal());
        assert_eq!(tp.max_touch_points, 0);
        assert!(!tp.pointer_fine);
        assert!(!tp.standalone);
    }
}
