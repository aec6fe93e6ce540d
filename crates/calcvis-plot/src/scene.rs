//! Pixel-space primitives produced by [`compose`](crate::compose).

use calcvis_color::{CriticalKind, Gradient, Rgb};

/// Text drawn in place of the curve when nothing could be sampled.
pub const ERROR_MESSAGE: &str = "Error plotting function";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

/// Filled circle with a one-letter caption centred on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub kind: CriticalKind,
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb,
    pub label: char,
    pub label_color: Rgb,
    pub label_size: f64,
    /// Baseline offset of the caption below `center`.
    pub label_offset: f64,
}

/// Horizontally centred text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub anchor: Point,
    pub content: String,
    pub size: f64,
    pub color: Rgb,
}

/// One composed plot, in paint order: gradient frame, background, grid,
/// axes, curve, shaded segments, markers, message.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotScene {
    pub width: f64,
    pub height: f64,
    /// Band around the canvas that shows the critical-point gradient.
    pub frame_inset: f64,
    pub gradient: Gradient,
    pub background: Rgb,
    pub grid: Vec<Line>,
    pub axes: Vec<Line>,
    pub curve: Option<Polyline>,
    pub segments: Vec<Line>,
    pub markers: Vec<Marker>,
    pub message: Option<Text>,
}

impl PlotScene {
    /// Outer size including the gradient frame.
    pub fn outer_size(&self) -> (f64, f64) {
        (
            self.width + 2.0 * self.frame_inset,
            self.height + 2.0 * self.frame_inset,
        )
    }
}
