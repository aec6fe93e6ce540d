//! Paints a [`PlotScene`] with the egui painter.

use crate::theme::to_color32;
use calcvis_color::Gradient;
use calcvis_plot::{PlotScene, Point};
use egui::{Align2, FontId, Mesh, Painter, Pos2, Rect, Shape, Stroke, Vec2};

/// Columns used to approximate the gradient with a vertex-coloured mesh.
const GRADIENT_COLUMNS: usize = 64;

/// Viewport for a canvas occupying `outer`, leaving room for the frame.
pub fn inner_size(outer: Vec2, frame_inset: f32) -> Vec2 {
    (outer - Vec2::splat(2.0 * frame_inset)).max(Vec2::ZERO)
}

pub fn paint_scene(painter: &Painter, outer: Rect, scene: &PlotScene) {
    paint_gradient(painter, outer, &scene.gradient);

    let inset = scene.frame_inset as f32;
    let origin = outer.min + Vec2::splat(inset);
    let at = |p: Point| origin + Vec2::new(p.x as f32, p.y as f32);

    let canvas = Rect::from_min_size(origin, Vec2::new(scene.width as f32, scene.height as f32));
    painter.rect_filled(canvas, 0.0, to_color32(scene.background));

    let inner = painter.with_clip_rect(canvas);

    let line_stroke = |stroke: &calcvis_plot::Stroke| {
        Stroke::new(stroke.width as f32, to_color32(stroke.color))
    };

    for line in scene.grid.iter().chain(&scene.axes) {
        inner.line_segment([at(line.from), at(line.to)], line_stroke(&line.stroke));
    }

    if let Some(curve) = &scene.curve {
        let points: Vec<Pos2> = curve.points.iter().copied().map(at).collect();
        inner.add(Shape::line(points, line_stroke(&curve.stroke)));
    }

    // Wider than the curve, so they cover it where the derivative is known.
    for line in &scene.segments {
        inner.line_segment([at(line.from), at(line.to)], line_stroke(&line.stroke));
    }

    for marker in &scene.markers {
        let center = at(marker.center);
        inner.circle_filled(center, marker.radius as f32, to_color32(marker.fill));
        inner.text(
            center,
            Align2::CENTER_CENTER,
            marker.label,
            FontId::proportional(marker.label_size as f32),
            to_color32(marker.label_color),
        );
    }

    if let Some(message) = &scene.message {
        inner.text(
            at(message.anchor),
            Align2::CENTER_CENTER,
            &message.content,
            FontId::proportional(message.size as f32),
            to_color32(message.color),
        );
    }
}

/// Fill `rect` with a left-to-right gradient.
fn paint_gradient(painter: &Painter, rect: Rect, gradient: &Gradient) {
    let mut mesh = Mesh::default();

    for column in 0..=GRADIENT_COLUMNS {
        let t = column as f32 / GRADIENT_COLUMNS as f32;
        let x = rect.left() + t * rect.width();
        let color = to_color32(gradient.color_at(f64::from(t) * 100.0));
        mesh.colored_vertex(Pos2::new(x, rect.top()), color);
        mesh.colored_vertex(Pos2::new(x, rect.bottom()), color);

        if column > 0 {
            let i = (2 * column) as u32;
            mesh.add_triangle(i - 2, i - 1, i);
            mesh.add_triangle(i - 1, i + 1, i);
        }
    }

    painter.add(Shape::mesh(mesh));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_size_never_negative() {
        assert_eq!(inner_size(Vec2::new(408.0, 308.0), 4.0), Vec2::new(400.0, 300.0));
        assert_eq!(inner_size(Vec2::new(4.0, 100.0), 4.0), Vec2::new(0.0, 92.0));
    }
}
