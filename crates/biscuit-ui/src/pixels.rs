use ratatui::{buffer::Buffer, layout::Rect, style::Color};

/// Minimum alpha value (0-255) for a pixel to be considered opaque.
///
/// Pixels below this threshold leave their half of the cell untouched.
const ALPHA_THRESHOLD: u8 = 128;

/// Render an RGBA image into a terminal rect using Unicode half-block
/// characters.
///
/// Each terminal cell represents two vertically stacked pixels via the upper
/// half-block character (`▀`). The image is downsampled from `(src_width x
/// src_height)` to fill `area` with nearest-neighbour scaling. The caller
/// owns any surrounding border; this paints the whole rect.
pub fn blit_rgba(buf: &mut Buffer, area: Rect, data: &[u8], src_width: u32, src_height: u32) {
    if area.width == 0 || area.height == 0 || src_width == 0 || src_height == 0 {
        return;
    }

    let expected_len = match (src_width as u64)
        .checked_mul(src_height as u64)
        .and_then(|v| v.checked_mul(4))
    {
        Some(v) => v,
        None => return,
    };
    if (data.len() as u64) < expected_len {
        return;
    }

    let cell_w = area.width as u32;
    let cell_h = area.height as u32;
    let pixel_h = cell_h * 2; // two vertical pixels per cell

    for cy in 0..cell_h {
        for cx in 0..cell_w {
            let px = (cx * src_width) / cell_w;
            let top = sample(data, src_width, px, (cy * 2 * src_height) / pixel_h);
            let bot = sample(data, src_width, px, ((cy * 2 + 1) * src_height) / pixel_h);
            paint_cell(buf, area.x + cx as u16, area.y + cy as u16, top, bot);
        }
    }
}

fn paint_cell(buf: &mut Buffer, x: u16, y: u16, top: Option<Color>, bot: Option<Color>) {
    let Some(cell) = buf.cell_mut((x, y)) else {
        return;
    };
    match (top, bot) {
        (Some(t), Some(b)) => {
            cell.set_char('▀');
            cell.set_fg(t);
            cell.set_bg(b);
        }
        (Some(t), None) => {
            cell.set_char('▀');
            cell.set_fg(t);
            cell.set_bg(Color::Reset);
        }
        (None, Some(b)) => {
            cell.set_char('▄');
            cell.set_fg(b);
            cell.set_bg(Color::Reset);
        }
        (None, None) => {}
    }
}

/// Read one RGBA pixel, returning its colour only when opaque enough to show.
///
/// Returns `None` for transparent pixels and for coordinates that fall
/// outside `data`.
fn sample(data: &[u8], width: u32, x: u32, y: u32) -> Option<Color> {
    let idx = (y as usize)
        .checked_mul(width as usize)?
        .checked_add(x as usize)?
        .checked_mul(4)?;
    let px = data.get(idx..idx + 4)?;
    if px[3] < ALPHA_THRESHOLD {
        return None;
    }
    Some(Color::Rgb(px[0], px[1], px[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a small RGBA image filled with a single colour.
    fn solid_image(w: u32, h: u32, r: u8, g: u8, b: u8, a: u8) -> Vec<u8> {
        let mut data = vec![0u8; (w * h * 4) as usize];
        for pixel in data.chunks_exact_mut(4) {
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
            pixel[3] = a;
        }
        data
    }

    #[test]
    fn blit_fills_cells_with_half_blocks() {
        // 4x4 red image into a 4x2 area: each cell covers two pixels exactly.
        let data = solid_image(4, 4, 255, 0, 0, 255);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);

        blit_rgba(&mut buf, area, &data, 4, 4);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn transparent_pixels_leave_cells_alone() {
        let data = solid_image(4, 4, 0, 255, 0, 0); // fully transparent
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);

        blit_rgba(&mut buf, area, &data, 4, 4);

        let cell = buf.cell((0, 0)).unwrap();
        assert_ne!(cell.symbol(), "▀");
        assert_ne!(cell.symbol(), "▄");
    }

    #[test]
    fn opaque_top_half_uses_upper_block() {
        // Only pixel row 0 is opaque, so the first cell row pairs an opaque
        // top pixel with a transparent bottom pixel.
        let mut data = vec![0u8; 4 * 4 * 4];
        for x in 0..4u32 {
            let idx = (x * 4) as usize;
            data[idx] = 255;
            data[idx + 3] = 255;
        }
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);

        blit_rgba(&mut buf, area, &data, 4, 4);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(255, 0, 0));
        assert_eq!(cell.bg, Color::Reset);
    }

    #[test]
    fn opaque_bottom_half_uses_lower_block() {
        // Only pixel row 1 is opaque, so the first cell row pairs a
        // transparent top pixel with an opaque bottom pixel.
        let mut data = vec![0u8; 4 * 4 * 4];
        for x in 0..4u32 {
            let idx = ((4 + x) * 4) as usize;
            data[idx + 2] = 255;
            data[idx + 3] = 255;
        }
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);

        blit_rgba(&mut buf, area, &data, 4, 4);

        let cell = buf.cell((0, 0)).unwrap();
        assert_eq!(cell.symbol(), "▄");
        assert_eq!(cell.fg, Color::Rgb(0, 0, 255));
    }

    #[test]
    fn empty_area_no_panic() {
        let data = solid_image(4, 4, 255, 0, 0, 255);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        blit_rgba(&mut buf, Rect::new(0, 0, 0, 0), &data, 4, 4);
    }

    #[test]
    fn short_data_no_panic() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        // data too short for claimed dimensions
        blit_rgba(&mut buf, area, &[0; 8], 4, 4);
    }
}
