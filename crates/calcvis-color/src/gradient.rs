//! Left-to-right background gradient built from critical points.

use crate::critical::CriticalPoint;
use crate::palette::{kind_color, placeholder_stops};
use crate::rgb::Rgb;
use crate::scheme::ColorScheme;
use log::warn;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub color: Rgb,
    /// Percentage in `[0, 100]`
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gradient {
    pub stops: Vec<GradientStop>,
    placeholder: bool,
}

impl Gradient {
    /// The fixed two-stop gradient shown when there is nothing to mark.
    pub fn placeholder(scheme: ColorScheme) -> Self {
        let [from, to] = placeholder_stops(scheme);
        Self {
            stops: vec![
                GradientStop {
                    color: from,
                    position: 0.0,
                },
                GradientStop {
                    color: to,
                    position: 100.0,
                },
            ],
            placeholder: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// CSS `linear-gradient(to right, ...)` value.
    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|stop| {
                if self.placeholder {
                    stop.color.to_hex()
                } else {
                    format!("{} {}%", stop.color.to_hex(), stop.position)
                }
            })
            .collect();
        format!("linear-gradient(to right, {})", stops.join(", "))
    }

    /// Color at `percent` along the gradient, for raster renderers.
    ///
    /// Outside the first/last stop the end color extends. Where several stops
    /// share a position the last of them wins.
    pub fn color_at(&self, percent: f64) -> Rgb {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Rgb::default(),
        };

        if percent < first.position {
            return first.color;
        }
        if percent >= last.position {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if percent >= a.position && percent < b.position {
                let t = (percent - a.position) / (b.position - a.position);
                return a.color.lerp(b.color, t);
            }
        }

        last.color
    }
}

/// Build gradient stops from critical points in any order.
///
/// Points are stably sorted by `x` and placed proportionally between the
/// smallest and largest `x`. When all points share one `x` every stop sits at
/// position 0. Points with a non-finite `x` are ignored.
pub fn gradient(points: &[CriticalPoint], scheme: ColorScheme) -> Gradient {
    let mut sorted: Vec<CriticalPoint> = points
        .iter()
        .copied()
        .filter(|p| p.x.is_finite())
        .collect();

    if sorted.len() < points.len() {
        warn!(
            "ignoring {} critical point(s) with non-finite x",
            points.len() - sorted.len()
        );
    }

    if sorted.is_empty() {
        return Gradient::placeholder(scheme);
    }

    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let x_min = sorted[0].x;
    let x_max = sorted[sorted.len() - 1].x;
    // Halved so the span of two finite extremes stays finite.
    let half_span = x_max / 2.0 - x_min / 2.0;

    let stops = sorted
        .iter()
        .map(|point| GradientStop {
            color: kind_color(point.kind, scheme),
            position: if half_span > 0.0 {
                ((point.x / 2.0 - x_min / 2.0) / half_span * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            },
        })
        .collect();

    Gradient {
        stops,
        placeholder: false,
    }
}
