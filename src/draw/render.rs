//! Cairo-based stroke primitives for the drawing tools.

use super::color::Color;
use crate::input::Point;

/// Fills the entire target with a solid background color.
///
/// Uses the `Source` operator so the fill replaces existing pixels instead of
/// blending with them.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgb(color.r, color.g, color.b);
    let _ = ctx.paint(); // If paint fails the canvas keeps its previous contents
    let _ = ctx.restore();
}

/// Strokes a single segment with round caps and joins.
///
/// Pen and eraser strokes are built from consecutive calls to this function;
/// the round caps make each segment overlap its neighbour so the chain reads
/// as one continuous path. The eraser passes [`cairo::Antialias::None`] so
/// every touched pixel becomes exactly `color`.
pub fn stroke_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    color: Color,
    width: f64,
    antialias: cairo::Antialias,
) {
    ctx.set_antialias(antialias);
    ctx.set_source_rgb(color.r, color.g, color.b);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    let _ = ctx.stroke();
}

/// Strokes a rectangle outline with opposite corners `a` and `b`.
///
/// Corners may be given in any order; the rectangle is normalized first.
pub fn stroke_rect(ctx: &cairo::Context, a: Point, b: Point, color: Color, width: f64) {
    let x = a.x.min(b.x);
    let y = a.y.min(b.y);
    let w = (a.x - b.x).abs();
    let h = (a.y - b.y).abs();

    ctx.set_source_rgb(color.r, color.g, color.b);
    ctx.set_line_width(width);
    ctx.set_line_join(cairo::LineJoin::Miter);

    ctx.rectangle(x, y, w, h);
    let _ = ctx.stroke();
}

/// Strokes a circle outline centered at `center`.
pub fn stroke_circle(ctx: &cairo::Context, center: Point, radius: f64, color: Color, width: f64) {
    ctx.set_source_rgb(color.r, color.g, color.b);
    ctx.set_line_width(width);

    ctx.new_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Copies `source` over the target, replacing every pixel.
pub fn paint_surface(ctx: &cairo::Context, source: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(source, 0.0, 0.0)?;
    let result = ctx.paint();
    ctx.restore()?;
    result
}
