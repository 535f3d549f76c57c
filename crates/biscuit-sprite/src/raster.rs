//! Software rasterizer for the room canvas.
//!
//! Shapes are resolved by point-inclusion tests against pixel centers
//! (`px + 0.5`, `py + 0.5`), with coordinates rounded exactly once. The
//! same display list therefore always produces the same bytes, which is
//! what makes snapshot comparisons in tests meaningful.

use std::path::Path;

use anyhow::{Context, Result};

use crate::color::Rgba;
use crate::draw::{ArcHalf, DrawCmd, Shape};

/// Logical canvas width in pixels.
pub const CANVAS_W: u32 = 320;
/// Logical canvas height in pixels.
pub const CANVAS_H: u32 = 240;

const ZEE_LARGE: [&str; 5] = ["#####", "   # ", "  #  ", " #   ", "#####"];
const ZEE_SMALL: [&str; 4] = ["####", "  # ", " #  ", "####"];

/// An RGBA pixel buffer plus the painting routines that fill it.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    /// The standard 320x240 room canvas.
    pub fn room() -> Self {
        Self::new(CANVAS_W, CANVAS_H)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Color at (`x`, `y`), or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some(Rgba::rgba(
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ))
    }

    /// Paints a display list back to front.
    pub fn paint(&mut self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            let color = cmd.color;
            match cmd.shape {
                Shape::Rect { x, y, w, h } => self.fill_rect(x, y, w, h, color),
                Shape::RectOutline { x, y, w, h, stroke } => {
                    self.stroke_rect(x, y, w, h, stroke, color)
                }
                Shape::Ellipse { cx, cy, rx, ry, tilt } => {
                    self.fill_ellipse(cx, cy, rx, ry, tilt, color)
                }
                Shape::Line { x0, y0, x1, y1, stroke } => {
                    self.stroke_line(x0, y0, x1, y1, stroke, color)
                }
                Shape::Arc { cx, cy, r, half, stroke } => {
                    self.stroke_arc(cx, cy, r, half, stroke, color)
                }
                Shape::PivotRect { px, py, x, y, w, h, angle_deg } => {
                    self.fill_pivot_rect(px, py, x, y, w, h, angle_deg, color)
                }
                Shape::Heart { x, y, size } => self.fill_heart(x, y, size, color),
                Shape::Zee { x, y, px } => self.draw_zee(x, y, px, color),
            }
        }
    }

    /// Writes the canvas out as a PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("writing {}", path.display()))
    }

    fn blend(&mut self, x: i32, y: i32, color: Rgba) {
        if color.a == 0 || x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        let dst = Rgba::rgba(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]);
        let out = color.over(dst);
        self.data[i] = out.r;
        self.data[i + 1] = out.g;
        self.data[i + 2] = out.b;
        self.data[i + 3] = out.a;
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let x0 = x.round() as i32;
        let y0 = y.round() as i32;
        let x1 = (x + w).round() as i32;
        let y1 = (y + h).round() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.blend(px, py, color);
            }
        }
    }

    fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: f32, color: Rgba) {
        let half = stroke / 2.0;
        let ox0 = (x - half).round() as i32;
        let oy0 = (y - half).round() as i32;
        let ox1 = (x + w + half).round() as i32;
        let oy1 = (y + h + half).round() as i32;
        let ix0 = (x + half).round() as i32;
        let iy0 = (y + half).round() as i32;
        let ix1 = (x + w - half).round() as i32;
        let iy1 = (y + h - half).round() as i32;
        for py in oy0..oy1 {
            for px in ox0..ox1 {
                let inside = px >= ix0 && px < ix1 && py >= iy0 && py < iy1;
                if !inside {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, tilt: f32, color: Rgba) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let ext = rx.max(ry) + 1.0;
        let (sin_t, cos_t) = tilt.sin_cos();
        let x0 = (cx - ext).floor() as i32;
        let x1 = (cx + ext).ceil() as i32;
        let y0 = (cy - ext).floor() as i32;
        let y1 = (cy + ext).ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                let dx = (px as f32 + 0.5) - cx;
                let dy = (py as f32 + 0.5) - cy;
                let u = dx * cos_t + dy * sin_t;
                let v = -dx * sin_t + dy * cos_t;
                if (u / rx).powi(2) + (v / ry).powi(2) <= 1.0 {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, stroke: f32, color: Rgba) {
        let vx = x1 - x0;
        let vy = y1 - y0;
        let len2 = vx * vx + vy * vy;
        if len2 == 0.0 {
            return;
        }
        let half = stroke / 2.0;
        let bx0 = (x0.min(x1) - half - 1.0).floor() as i32;
        let bx1 = (x0.max(x1) + half + 1.0).ceil() as i32;
        let by0 = (y0.min(y1) - half - 1.0).floor() as i32;
        let by1 = (y0.max(y1) + half + 1.0).ceil() as i32;
        for py in by0..by1 {
            for px in bx0..bx1 {
                let pxc = px as f32 + 0.5;
                let pyc = py as f32 + 0.5;
                let t = ((pxc - x0) * vx + (pyc - y0) * vy) / len2;
                if !(0.0..=1.0).contains(&t) {
                    continue;
                }
                let qx = x0 + t * vx;
                let qy = y0 + t * vy;
                let d2 = (pxc - qx).powi(2) + (pyc - qy).powi(2);
                if d2 <= half * half {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn stroke_arc(&mut self, cx: f32, cy: f32, r: f32, half: ArcHalf, stroke: f32, color: Rgba) {
        let ext = r + stroke;
        let x0 = (cx - ext).floor() as i32;
        let x1 = (cx + ext).ceil() as i32;
        let y0 = (cy - ext).floor() as i32;
        let y1 = (cy + ext).ceil() as i32;
        let hw = stroke / 2.0;
        for py in y0..y1 {
            for px in x0..x1 {
                let pxc = px as f32 + 0.5;
                let pyc = py as f32 + 0.5;
                let keep = match half {
                    ArcHalf::Upper => pyc <= cy,
                    ArcHalf::Lower => pyc >= cy,
                };
                if !keep {
                    continue;
                }
                let d = ((pxc - cx).powi(2) + (pyc - cy).powi(2)).sqrt();
                if (d - r).abs() <= hw {
                    self.blend(px, py, color);
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_pivot_rect(
        &mut self,
        px: f32,
        py: f32,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        angle_deg: f32,
        color: Rgba,
    ) {
        let (sin_a, cos_a) = angle_deg.to_radians().sin_cos();
        let reach = x.abs() + w + y.abs() + h + 1.0;
        let bx0 = (px - reach).floor() as i32;
        let bx1 = (px + reach).ceil() as i32;
        let by0 = (py - reach).floor() as i32;
        let by1 = (py + reach).ceil() as i32;
        for cy in by0..by1 {
            for cx in bx0..bx1 {
                let dx = (cx as f32 + 0.5) - px;
                let dy = (cy as f32 + 0.5) - py;
                let u = dx * cos_a + dy * sin_a;
                let v = -dx * sin_a + dy * cos_a;
                if u >= x && u <= x + w && v >= y && v <= y + h {
                    self.blend(cx, cy, color);
                }
            }
        }
    }

    fn fill_heart(&mut self, x: f32, y: f32, size: f32, color: Rgba) {
        let r = size / 4.0;
        let lobe_y = y + size * 0.25;
        let left = (x + size * 0.25, lobe_y);
        let right = (x + size * 0.75, lobe_y);
        let apex_y = y + size;
        let mid_x = x + size / 2.0;
        let x0 = x.floor() as i32;
        let x1 = (x + size).ceil() as i32;
        let y0 = y.floor() as i32;
        let y1 = apex_y.ceil() as i32;
        for py in y0..y1 {
            for px in x0..x1 {
                let pxc = px as f32 + 0.5;
                let pyc = py as f32 + 0.5;
                let in_lobe = |c: (f32, f32)| {
                    (pxc - c.0).powi(2) + (pyc - c.1).powi(2) <= r * r
                };
                let in_wedge = {
                    let ty = (pyc - lobe_y) / (apex_y - lobe_y);
                    (0.0..=1.0).contains(&ty)
                        && (pxc - mid_x).abs() <= (size / 2.0) * (1.0 - ty)
                };
                if in_lobe(left) || in_lobe(right) || in_wedge {
                    self.blend(px, py, color);
                }
            }
        }
    }

    fn draw_zee(&mut self, x: f32, y: f32, px: f32, color: Rgba) {
        let rows: &[&str] = if px >= 10.0 { &ZEE_LARGE } else { &ZEE_SMALL };
        let ix = x.round() as i32;
        let top = y.round() as i32 - rows.len() as i32;
        for (ry, row) in rows.iter().enumerate() {
            for (rx, ch) in row.bytes().enumerate() {
                if ch == b'#' {
                    self.blend(ix + rx as i32, top + ry as i32, color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw;
    use crate::color::palette;

    fn count_colored(canvas: &Canvas, color: Rgba) -> usize {
        (0..canvas.height())
            .flat_map(|y| (0..canvas.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == Some(color))
            .count()
    }

    #[test]
    fn rect_fills_exact_bounds() {
        let mut c = Canvas::new(16, 16);
        let red = Rgba::rgb(255, 0, 0);
        c.paint(&[draw::rect(2.0, 3.0, 4.0, 5.0, red)]);
        assert_eq!(c.pixel(2, 3), Some(red));
        assert_eq!(c.pixel(5, 7), Some(red));
        assert_eq!(c.pixel(6, 3), Some(Rgba::rgba(0, 0, 0, 0)));
        assert_eq!(c.pixel(2, 8), Some(Rgba::rgba(0, 0, 0, 0)));
        assert_eq!(count_colored(&c, red), 20);
    }

    #[test]
    fn shapes_clip_at_the_canvas_edge() {
        let mut c = Canvas::new(8, 8);
        let red = Rgba::rgb(255, 0, 0);
        c.paint(&[
            draw::rect(-4.0, -4.0, 6.0, 6.0, red),
            draw::ellipse(8.0, 8.0, 5.0, 5.0, 0.0, red),
            draw::line(-10.0, 4.0, 20.0, 4.0, 2.0, red),
        ]);
        // Nothing panicked and the corner pixel got painted.
        assert_eq!(c.pixel(0, 0), Some(red));
    }

    #[test]
    fn rect_outline_is_hollow() {
        let mut c = Canvas::new(32, 32);
        let blue = Rgba::rgb(0, 0, 255);
        c.paint(&[draw::rect_outline(8.0, 8.0, 12.0, 12.0, 2.0, blue)]);
        // On the edge path: painted. In the middle: untouched.
        assert_eq!(c.pixel(8, 14), Some(blue));
        assert_eq!(c.pixel(14, 8), Some(blue));
        assert_eq!(c.pixel(14, 14), Some(Rgba::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn ellipse_is_symmetric_about_its_center() {
        let mut c = Canvas::new(40, 40);
        let green = Rgba::rgb(0, 255, 0);
        c.paint(&[draw::ellipse(20.0, 20.0, 8.0, 4.0, 0.0, green)]);
        assert_eq!(c.pixel(20, 20), Some(green));
        for dx in 0..8u32 {
            assert_eq!(c.pixel(20 - dx - 1, 20), c.pixel(20 + dx, 20), "dx = {dx}");
        }
        // Wider than tall.
        assert_eq!(c.pixel(26, 20), Some(green));
        assert_eq!(c.pixel(20, 26), Some(Rgba::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn horizontal_line_covers_stroke_rows() {
        let mut c = Canvas::new(16, 16);
        let ink = Rgba::rgb(1, 2, 3);
        c.paint(&[draw::line(2.0, 8.0, 10.0, 8.0, 2.0, ink)]);
        assert_eq!(c.pixel(5, 7), Some(ink));
        assert_eq!(c.pixel(5, 8), Some(ink));
        assert_eq!(c.pixel(5, 6), Some(Rgba::rgba(0, 0, 0, 0)));
        assert_eq!(c.pixel(5, 9), Some(Rgba::rgba(0, 0, 0, 0)));
    }

    #[test]
    fn unrotated_pivot_rect_matches_plain_rect() {
        let ink = Rgba::rgb(9, 9, 9);
        let mut a = Canvas::new(24, 24);
        a.paint(&[draw::rect(10.0, 6.0, 6.0, 4.0, ink)]);
        let mut b = Canvas::new(24, 24);
        b.paint(&[draw::pivot_rect(10.0, 6.0, 0.0, 0.0, 6.0, 4.0, 0.0, ink)]);
        // Pixel centers sit at half offsets, so the inclusive local-frame
        // test selects exactly the same pixels as the half-open rect fill.
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn rotated_pivot_rect_moves_pixels() {
        let ink = Rgba::rgb(9, 9, 9);
        let mut flat = Canvas::new(48, 48);
        flat.paint(&[draw::pivot_rect(24.0, 24.0, 0.0, -3.0, 14.0, 5.0, 0.0, ink)]);
        let mut tilted = Canvas::new(48, 48);
        tilted.paint(&[draw::pivot_rect(24.0, 24.0, 0.0, -3.0, 14.0, 5.0, -30.0, ink)]);
        assert_ne!(flat.data(), tilted.data());
        // A negative angle swings the far end upward (y-down coordinates).
        let top_ink_tilted = (0..48)
            .flat_map(|y| (0..48).map(move |x| (x, y)))
            .find(|&(x, y)| tilted.pixel(x, y) == Some(ink))
            .map(|(_, y)| y);
        let top_ink_flat = (0..48)
            .flat_map(|y| (0..48).map(move |x| (x, y)))
            .find(|&(x, y)| flat.pixel(x, y) == Some(ink))
            .map(|(_, y)| y);
        assert!(top_ink_tilted < top_ink_flat);
    }

    #[test]
    fn heart_and_zee_leave_marks_inside_their_boxes() {
        let mut c = Canvas::new(32, 32);
        c.paint(&[
            draw::heart(4.0, 4.0, 6.0, palette::HEART_PINK),
            draw::zee(16.0, 24.0, 10.0, palette::SNOOZE),
        ]);
        assert!(count_colored(&c, palette::HEART_PINK) > 0);
        assert!(count_colored(&c, palette::SNOOZE) > 0);
        // Heart stays inside its size-square box.
        for y in 0..32u32 {
            for x in 0..32u32 {
                if c.pixel(x, y) == Some(palette::HEART_PINK) {
                    assert!((4..=10).contains(&x) && (4..=10).contains(&y), "at ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn translucent_shapes_blend_instead_of_replacing() {
        let mut c = Canvas::new(8, 8);
        c.paint(&[
            draw::rect(0.0, 0.0, 8.0, 8.0, palette::FLOOR),
            draw::ellipse(4.0, 4.0, 3.0, 2.0, 0.0, palette::SHADOW),
        ]);
        let shaded = c.pixel(4, 4).unwrap();
        assert_ne!(shaded, palette::FLOOR);
        assert_eq!(shaded.a, 255);
        // Only slightly darker than the floor.
        assert!(palette::FLOOR.r - shaded.r < 30);
    }
}
