use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Point};

/// Serialize a finished trace as a standalone SVG document.
///
/// The curve is stroked as one polyline in the order the trace holds its
/// points (most-recent-first); an empty trace yields a valid document with no
/// polyline element.
pub fn trace_svg(canvas: Canvas, points: &[Point]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height,
    );

    if !points.is_empty() {
        let mut attr = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                attr.push(' ');
            }
            let _ = write!(attr, "{:.3},{:.3}", p.x, p.y);
        }
        let _ = writeln!(
            out,
            r##"  <polyline points="{attr}" fill="none" stroke="#ff0000" stroke-width="2"/>"##,
        );
    }

    out.push_str("</svg>\n");
    out
}
