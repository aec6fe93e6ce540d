use crate::error::PlotError;
use crate::scene::Point;

/// Drawable canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// 4:3, the aspect of the plot card.
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Maps data coordinates onto the viewport, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    x0: f64,
    y0: f64,
    scale_x: f64,
    scale_y: f64,
    height: f64,
}

impl Projection {
    pub fn new(domain: [f64; 2], range: [f64; 2], viewport: Viewport) -> Result<Self, PlotError> {
        let [x0, x1] = domain;
        let [y0, y1] = range;

        if !(x0.is_finite() && x1.is_finite() && x0 < x1) {
            return Err(PlotError::InvalidDomain(x0, x1));
        }
        if !(y0.is_finite() && y1.is_finite() && y0 < y1) {
            return Err(PlotError::InvalidRange(y0, y1));
        }
        let Viewport { width, height } = viewport;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(PlotError::EmptyViewport { width, height });
        }

        Ok(Self {
            x0,
            y0,
            scale_x: width / (x1 - x0),
            scale_y: height / (y1 - y0),
            height,
        })
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        Point::new(
            (x - self.x0) * self.scale_x,
            self.height - (y - self.y0) * self.scale_y,
        )
    }
}
