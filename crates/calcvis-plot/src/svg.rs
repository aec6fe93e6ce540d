//! Standalone SVG export.

use crate::scene::{Line, PlotScene};
use std::fmt::Write;

const GRADIENT_ID: &str = "critical-points";

impl PlotScene {
    /// Render as an SVG document. The canvas is inset inside a frame filled
    /// with the critical-point gradient.
    pub fn to_svg(&self) -> String {
        let (outer_w, outer_h) = self.outer_size();
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            num(outer_w),
            num(outer_h),
            num(outer_w),
            num(outer_h)
        );

        let _ = writeln!(out, "  <defs>");
        let _ = writeln!(
            out,
            r#"    <linearGradient id="{}" x1="0" y1="0" x2="1" y2="0">"#,
            GRADIENT_ID
        );
        for stop in &self.gradient.stops {
            let _ = writeln!(
                out,
                r#"      <stop offset="{}%" stop-color="{}"/>"#,
                num(stop.position),
                stop.color.to_hex()
            );
        }
        let _ = writeln!(out, "    </linearGradient>");
        let _ = writeln!(out, "  </defs>");

        let _ = writeln!(
            out,
            r#"  <rect width="{}" height="{}" fill="url(#{})"/>"#,
            num(outer_w),
            num(outer_h),
            GRADIENT_ID
        );
        let _ = writeln!(
            out,
            r#"  <g transform="translate({} {})">"#,
            num(self.frame_inset),
            num(self.frame_inset)
        );
        let _ = writeln!(
            out,
            r#"    <rect width="{}" height="{}" fill="{}"/>"#,
            num(self.width),
            num(self.height),
            self.background.to_hex()
        );

        for line in self.grid.iter().chain(&self.axes) {
            write_line(&mut out, line);
        }

        if let Some(curve) = &self.curve {
            let points: Vec<String> = curve
                .points
                .iter()
                .map(|p| format!("{},{}", num(p.x), num(p.y)))
                .collect();
            let _ = writeln!(
                out,
                r#"    <polyline points="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
                points.join(" "),
                curve.stroke.color.to_hex(),
                num(curve.stroke.width)
            );
        }

        for segment in &self.segments {
            write_line(&mut out, segment);
        }

        for marker in &self.markers {
            let _ = writeln!(
                out,
                r#"    <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                num(marker.center.x),
                num(marker.center.y),
                num(marker.radius),
                marker.fill.to_hex()
            );
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
                num(marker.center.x),
                num(marker.center.y + marker.label_offset),
                num(marker.label_size),
                marker.label_color.to_hex(),
                escape(&marker.label.to_string())
            );
        }

        if let Some(message) = &self.message {
            let _ = writeln!(
                out,
                r#"    <text x="{}" y="{}" font-family="sans-serif" font-size="{}" text-anchor="middle" fill="{}">{}</text>"#,
                num(message.anchor.x),
                num(message.anchor.y),
                num(message.size),
                message.color.to_hex(),
                escape(&message.content)
            );
        }

        let _ = writeln!(out, "  </g>");
        let _ = writeln!(out, "</svg>");
        out
    }
}

fn write_line(out: &mut String, line: &Line) {
    let _ = writeln!(
        out,
        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
        num(line.from.x),
        num(line.from.y),
        num(line.to.x),
        num(line.to.y),
        line.stroke.color.to_hex(),
        num(line.stroke.width)
    );
}

/// Two decimals, trailing zeros trimmed.
fn num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(4.0), "4");
        assert_eq!(num(12.5), "12.5");
        assert_eq!(num(1.0 / 3.0), "0.33");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(100.0), "100");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & c"), "a &lt; b &amp; c");
    }
}
