//! Scene composition.

use crate::error::PlotError;
use crate::input::PlotInput;
use crate::scene::{Line, Marker, PlotScene, Point, Polyline, Stroke, Text, ERROR_MESSAGE};
use crate::viewport::{Projection, Viewport};
use calcvis_color::{
    color_from_derivative, gradient, kind_color, marker_label, CanvasPalette, Rgb,
};
use calcvis_numeric::{find_nearest, pair_by_index, GridSample, Sample, Sampler};
use log::{debug, warn};
use std::collections::HashMap;

pub const GRID_DIVISIONS: usize = 20;
pub const FRAME_INSET: f64 = 4.0;

const GRID_WIDTH: f64 = 1.0;
const AXIS_WIDTH: f64 = 2.0;
const CURVE_WIDTH: f64 = 3.0;
const SEGMENT_WIDTH: f64 = 5.0;

pub const MARKER_RADIUS: f64 = 8.0;
/// How far a sample may sit from a critical point's `x` and still give the
/// marker its height.
pub const MARKER_TOLERANCE: f64 = 0.1;
const LABEL_SIZE: f64 = 12.0;
const LABEL_OFFSET: f64 = 4.0;
const MESSAGE_SIZE: f64 = 16.0;

/// Compose a full scene from scratch.
///
/// The function and its derivative are sampled over the same grid and
/// paired by grid index, so a point dropped from either pass never shifts
/// the colouring of its neighbours.
pub fn compose(input: &PlotInput, viewport: Viewport) -> Result<PlotScene, PlotError> {
    let projection = Projection::new(input.domain, input.range, viewport)?;
    let palette = CanvasPalette::for_scheme(input.scheme);

    let mut scene = PlotScene {
        width: viewport.width,
        height: viewport.height,
        frame_inset: FRAME_INSET,
        gradient: gradient(&input.critical_points, input.scheme),
        background: palette.background,
        grid: grid_lines(viewport, palette.grid),
        axes: axis_lines(viewport, palette.axis),
        curve: None,
        segments: Vec::new(),
        markers: Vec::new(),
        message: None,
    };

    if input.expression.trim().is_empty() {
        return Ok(scene);
    }

    let sampler = Sampler::new();
    let [x_min, x_max] = input.domain;
    let function = sampler.sample_grid(&input.expression, x_min, x_max, input.steps);

    if function.is_empty() {
        warn!("no finite samples for {:?} on [{}, {}]", input.expression, x_min, x_max);
        scene.message = Some(Text {
            anchor: Point::new(viewport.width / 2.0, viewport.height / 2.0),
            content: ERROR_MESSAGE.to_string(),
            size: MESSAGE_SIZE,
            color: palette.label,
        });
        return Ok(scene);
    }

    let derivative = if input.derivative.trim().is_empty() {
        Vec::new()
    } else {
        sampler.sample_grid(&input.derivative, x_min, x_max, input.steps)
    };

    scene.curve = Some(Polyline {
        points: function
            .iter()
            .map(|s| projection.to_screen(s.x, s.y))
            .collect(),
        stroke: Stroke {
            color: palette.curve,
            width: CURVE_WIDTH,
        },
    });
    scene.segments = shaded_segments(&function, &derivative, &projection, input);

    let samples: Vec<Sample> = function.iter().map(GridSample::sample).collect();
    scene.markers = input
        .critical_points
        .iter()
        .map(|point| {
            let y = find_nearest(&samples, point.x, MARKER_TOLERANCE)
                .map(|s| s.y)
                .unwrap_or(0.0);
            Marker {
                kind: point.kind,
                center: projection.to_screen(point.x, y),
                radius: MARKER_RADIUS,
                fill: kind_color(point.kind, input.scheme),
                label: marker_label(point.kind),
                label_color: palette.label,
                label_size: LABEL_SIZE,
                label_offset: LABEL_OFFSET,
            }
        })
        .collect();

    debug!(
        "composed {:?}: {} curve points, {} segments, {} markers",
        input.expression,
        function.len(),
        scene.segments.len(),
        scene.markers.len()
    );
    Ok(scene)
}

/// One segment per pair of consecutive function samples, coloured by the
/// derivative at the segment's left grid index. Segments whose left index
/// has no derivative sample are left unshaded.
fn shaded_segments(
    function: &[GridSample],
    derivative: &[GridSample],
    projection: &Projection,
    input: &PlotInput,
) -> Vec<Line> {
    let slopes: HashMap<usize, f64> = pair_by_index(function, derivative)
        .into_iter()
        .map(|(f, d)| (f.index, d.y))
        .collect();

    function
        .windows(2)
        .filter_map(|pair| {
            let slope = slopes.get(&pair[0].index)?;
            Some(Line {
                from: projection.to_screen(pair[0].x, pair[0].y),
                to: projection.to_screen(pair[1].x, pair[1].y),
                stroke: Stroke {
                    color: color_from_derivative(*slope, input.scheme),
                    width: SEGMENT_WIDTH,
                },
            })
        })
        .collect()
}

fn grid_lines(viewport: Viewport, color: Rgb) -> Vec<Line> {
    let stroke = Stroke {
        color,
        width: GRID_WIDTH,
    };
    let Viewport { width, height } = viewport;
    let divisions = GRID_DIVISIONS as f64;

    let vertical = (0..=GRID_DIVISIONS).map(|i| {
        let x = i as f64 * width / divisions;
        Line {
            from: Point::new(x, 0.0),
            to: Point::new(x, height),
            stroke,
        }
    });
    let horizontal = (0..=GRID_DIVISIONS).map(|i| {
        let y = i as f64 * height / divisions;
        Line {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            stroke,
        }
    });

    vertical.chain(horizontal).collect()
}

/// Axes sit on the canvas centre lines regardless of domain and range.
fn axis_lines(viewport: Viewport, color: Rgb) -> Vec<Line> {
    let stroke = Stroke {
        color,
        width: AXIS_WIDTH,
    };
    let Viewport { width, height } = viewport;
    vec![
        Line {
            from: Point::new(0.0, height / 2.0),
            to: Point::new(width, height / 2.0),
            stroke,
        },
        Line {
            from: Point::new(width / 2.0, 0.0),
            to: Point::new(width / 2.0, height),
            stroke,
        },
    ]
}
