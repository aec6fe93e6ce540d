//! Color conversions between the calcvis palette and egui.

use calcvis_color::{ColorScheme, Rgb};
use egui::{Color32, Visuals};

pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn visuals_for(scheme: ColorScheme) -> Visuals {
    match scheme {
        ColorScheme::Light => Visuals::light(),
        ColorScheme::Dark => Visuals::dark(),
    }
}

/// Tint for error banners.
pub fn error_color(scheme: ColorScheme) -> Color32 {
    match scheme {
        ColorScheme::Light => Color32::from_rgb(220, 38, 38),
        ColorScheme::Dark => Color32::from_rgb(248, 113, 113),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color32() {
        assert_eq!(
            to_color32(Rgb::new(0xef, 0x44, 0x44)),
            Color32::from_rgb(239, 68, 68)
        );
    }

    #[test]
    fn test_visuals_match_scheme() {
        assert!(visuals_for(ColorScheme::Dark).dark_mode);
        assert!(!visuals_for(ColorScheme::Light).dark_mode);
    }
}
