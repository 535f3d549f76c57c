//! Display-list primitives.
//!
//! A scene is a `Vec<DrawCmd>` painted back to front. Composition stays a
//! pure function of mood and animation phase; only
//! [`Canvas::paint`](crate::Canvas::paint) touches pixels.

use crate::color::Rgba;

/// Which half of a circle an [`Shape::Arc`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcHalf {
    /// The cap above the center line (used for closed happy eyes).
    Upper,
    /// The bowl below the center line (used for the smile).
    Lower,
}

/// A single filled or stroked primitive in canvas coordinates.
///
/// Coordinates are `f32` because the room layout is specified at fractional
/// positions; the rasterizer rounds once, at paint time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned filled rectangle.
    Rect { x: f32, y: f32, w: f32, h: f32 },
    /// Rectangle outline, stroked centered on the edge path.
    RectOutline { x: f32, y: f32, w: f32, h: f32, stroke: f32 },
    /// Filled ellipse, optionally tilted by `tilt` radians.
    Ellipse { cx: f32, cy: f32, rx: f32, ry: f32, tilt: f32 },
    /// Stroked segment with butt caps.
    Line { x0: f32, y0: f32, x1: f32, y1: f32, stroke: f32 },
    /// Stroked half circle.
    Arc { cx: f32, cy: f32, r: f32, half: ArcHalf, stroke: f32 },
    /// Filled rectangle rotated `angle_deg` degrees about a pivot point.
    /// `x`/`y` are the rect's top-left in the pivot's local frame.
    PivotRect { px: f32, py: f32, x: f32, y: f32, w: f32, h: f32, angle_deg: f32 },
    /// Tiny heart fitted to a `size`-square box with top-left at `x`/`y`.
    Heart { x: f32, y: f32, size: f32 },
    /// The little "z" glyph of the sleeping animation; `x`/`y` is its
    /// baseline-left corner and `px` the nominal font size.
    Zee { x: f32, y: f32, px: f32 },
}

/// A shape plus its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCmd {
    pub shape: Shape,
    pub color: Rgba,
}

pub fn rect(x: f32, y: f32, w: f32, h: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Rect { x, y, w, h }, color }
}

pub fn rect_outline(x: f32, y: f32, w: f32, h: f32, stroke: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::RectOutline { x, y, w, h, stroke }, color }
}

pub fn ellipse(cx: f32, cy: f32, rx: f32, ry: f32, tilt: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Ellipse { cx, cy, rx, ry, tilt }, color }
}

pub fn line(x0: f32, y0: f32, x1: f32, y1: f32, stroke: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Line { x0, y0, x1, y1, stroke }, color }
}

pub fn arc(cx: f32, cy: f32, r: f32, half: ArcHalf, stroke: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Arc { cx, cy, r, half, stroke }, color }
}

#[allow(clippy::too_many_arguments)]
pub fn pivot_rect(
    px: f32,
    py: f32,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    angle_deg: f32,
    color: Rgba,
) -> DrawCmd {
    DrawCmd { shape: Shape::PivotRect { px, py, x, y, w, h, angle_deg }, color }
}

pub fn heart(x: f32, y: f32, size: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Heart { x, y, size }, color }
}

pub fn zee(x: f32, y: f32, px: f32, color: Rgba) -> DrawCmd {
    DrawCmd { shape: Shape::Zee { x, y, px }, color }
}
