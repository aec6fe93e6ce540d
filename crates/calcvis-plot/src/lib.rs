//! Plot composition.
//!
//! [`compose`] turns an expression, its derivative and its critical points
//! into a [`PlotScene`]: a flat list of pixel-space primitives that any
//! surface (egui painter, SVG writer) can draw without further math.

pub mod compose;
pub mod error;
pub mod input;
pub mod scene;
pub mod svg;
pub mod viewport;

// Re-exports
pub use compose::{compose, FRAME_INSET, GRID_DIVISIONS, MARKER_RADIUS, MARKER_TOLERANCE};
pub use error::PlotError;
pub use input::{PlotInput, DEFAULT_STEPS};
pub use scene::{Line, Marker, PlotScene, Point, Polyline, Stroke, Text, ERROR_MESSAGE};
pub use viewport::{Projection, Viewport};
