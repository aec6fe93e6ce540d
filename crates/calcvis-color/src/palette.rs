//! Fixed colors shared by every renderer.

use crate::critical::CriticalKind;
use crate::rgb::Rgb;
use crate::scheme::ColorScheme;

/// Gradient stop and marker fill for a critical point.
pub fn kind_color(kind: CriticalKind, scheme: ColorScheme) -> Rgb {
    match (kind, scheme) {
        (CriticalKind::Maximum, ColorScheme::Light) => Rgb::new(0xef, 0x44, 0x44),
        (CriticalKind::Maximum, ColorScheme::Dark) => Rgb::new(0xf8, 0x71, 0x71),
        (CriticalKind::Minimum, ColorScheme::Light) => Rgb::new(0x3b, 0x82, 0xf6),
        (CriticalKind::Minimum, ColorScheme::Dark) => Rgb::new(0x60, 0xa5, 0xfa),
        (CriticalKind::Inflection, ColorScheme::Light) => Rgb::new(0x10, 0xb9, 0x81),
        (CriticalKind::Inflection, ColorScheme::Dark) => Rgb::new(0x34, 0xd3, 0x99),
    }
}

/// Single-letter marker caption: the kind name's initial, upper-cased.
pub fn marker_label(kind: CriticalKind) -> char {
    kind.name()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Two-stop background used when there are no critical points.
pub fn placeholder_stops(scheme: ColorScheme) -> [Rgb; 2] {
    match scheme {
        ColorScheme::Light => [Rgb::new(0xf0, 0xf9, 0xff), Rgb::new(0xe6, 0xf7, 0xff)],
        ColorScheme::Dark => [Rgb::new(0x0f, 0x17, 0x2a), Rgb::new(0x1e, 0x29, 0x3b)],
    }
}

/// Canvas colors for background, grid, axes, curve and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasPalette {
    pub background: Rgb,
    pub grid: Rgb,
    pub axis: Rgb,
    pub curve: Rgb,
    pub label: Rgb,
}

impl CanvasPalette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                background: Rgb::new(0xf8, 0xfa, 0xfc),
                grid: Rgb::new(0xe2, 0xe8, 0xf0),
                axis: Rgb::new(0x64, 0x74, 0x8b),
                curve: Rgb::new(0x0f, 0x17, 0x2a),
                label: Rgb::new(0x0f, 0x17, 0x2a),
            },
            ColorScheme::Dark => Self {
                background: Rgb::new(0x1e, 0x29, 0x3b),
                grid: Rgb::new(0x33, 0x41, 0x55),
                axis: Rgb::new(0x94, 0xa3, 0xb8),
                curve: Rgb::new(0xf8, 0xfa, 0xfc),
                label: Rgb::new(0xf8, 0xfa, 0xfc),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_colors_match_css_hex() {
        assert_eq!(kind_color(CriticalKind::Maximum, ColorScheme::Light).to_hex(), "#ef4444");
        assert_eq!(kind_color(CriticalKind::Minimum, ColorScheme::Dark).to_hex(), "#60a5fa");
        assert_eq!(kind_color(CriticalKind::Inflection, ColorScheme::Light).to_hex(), "#10b981");
    }

    #[test]
    fn test_marker_labels() {
        assert_eq!(marker_label(CriticalKind::Maximum), 'M');
        assert_eq!(marker_label(CriticalKind::Minimum), 'M');
        assert_eq!(marker_label(CriticalKind::Inflection), 'I');
    }

    #[test]
    fn test_palettes_differ_by_scheme() {
        let light = CanvasPalette::for_scheme(ColorScheme::Light);
        let dark = CanvasPalette::for_scheme(ColorScheme::Dark);
        assert_ne!(light.background, dark.background);
        assert_eq!(light.curve, light.label);
        assert_eq!(dark.curve, dark.label);
    }
}
