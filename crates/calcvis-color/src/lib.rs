pub mod colorizer;
pub mod critical;
pub mod gradient;
pub mod palette;
pub mod rgb;
pub mod scheme;

// Re-exports
pub use colorizer::{color_from_derivative, normalize_derivative, SATURATION_SLOPE};
pub use critical::{CriticalKind, CriticalPoint};
pub use gradient::{gradient, Gradient, GradientStop};
pub use palette::{kind_color, marker_label, CanvasPalette};
pub use rgb::Rgb;
pub use scheme::ColorScheme;
