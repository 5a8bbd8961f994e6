//! Off-screen paint surface.
//!
//! Frames are composed into an RGBA image the size of the widget and only
//! then presented to the terminal buffer, so a half-drawn frame is never
//! visible.  Presentation packs two vertical pixels into one cell with the
//! upper-half-block glyph.

use image::{imageops::FilterType, Rgba, RgbaImage};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Color,
};

use crate::core::{color::Rgb, geometry::Size};

/// Sub-samples per axis used for anti-aliased coverage.
const SUPERSAMPLE: u32 = 4;

/// An RGBA drawing buffer owned by exactly one widget.
#[derive(Debug, Clone)]
pub struct PaintSurface {
    image: RgbaImage,
}

impl PaintSurface {
    pub fn new(size: Size) -> Self {
        Self {
            image: RgbaImage::new(size.width, size.height),
        }
    }

    /// Drop the old pixels and allocate a fresh buffer of `size`.
    pub fn reallocate(&mut self, size: Size) {
        self.image = RgbaImage::new(size.width, size.height);
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    pub fn clear(&mut self, color: Rgb) {
        let px = to_rgba(color);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    /// Colour at `(x, y)`, or `None` outside the surface.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        self.image.get_pixel_checked(x, y).map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Fill a circle whose bounding box starts at `(x, y)`, blending edge
    /// pixels by coverage.  Parts outside the surface are clipped; a
    /// non-positive diameter draws nothing.
    pub fn fill_ellipse(&mut self, x: f32, y: f32, diameter: i32, color: Rgb) {
        if diameter <= 0 || self.image.width() == 0 || self.image.height() == 0 {
            return;
        }

        let d = diameter as f32;
        let r = d / 2.0;
        let (cx, cy) = (x + r, y + r);
        let r2 = r * r;

        let x0 = x.floor().max(0.0) as u32;
        let y0 = y.floor().max(0.0) as u32;
        let x1 = ((x + d).ceil().max(0.0) as u32).min(self.image.width());
        let y1 = ((y + d).ceil().max(0.0) as u32).min(self.image.height());

        let step = 1.0 / SUPERSAMPLE as f32;
        let total = (SUPERSAMPLE * SUPERSAMPLE) as f32;

        for py in y0..y1 {
            for px in x0..x1 {
                let mut hits = 0u32;
                for sy in 0..SUPERSAMPLE {
                    let dy = py as f32 + (sy as f32 + 0.5) * step - cy;
                    for sx in 0..SUPERSAMPLE {
                        let dx = px as f32 + (sx as f32 + 0.5) * step - cx;
                        if dx * dx + dy * dy <= r2 {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }

                let under = self.image.get_pixel(px, py);
                let under = Rgb::new(under[0], under[1], under[2]);
                let blended = under.blend(color, hits as f32 / total);
                self.image.put_pixel(px, py, to_rgba(blended));
            }
        }
    }

    /// Copy the surface into `area` of the terminal buffer, scaled down to fit
    /// (aspect preserved) and centred.
    pub fn present(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 || self.image.width() == 0 || self.image.height() == 0
        {
            return;
        }

        // Each column = 1 px wide, each row = 2 px tall.
        let max_px_w = area.width as f64;
        let max_px_h = (area.height as f64) * 2.0;
        let src_w = self.image.width() as f64;
        let src_h = self.image.height() as f64;
        let scale = (max_px_w / src_w).min(max_px_h / src_h).min(1.0);

        let scaled;
        let img = if scale < 1.0 {
            let fit_w = (src_w * scale).round().max(1.0) as u32;
            let fit_h = (src_h * scale).round().max(1.0) as u32;
            scaled = image::imageops::resize(&self.image, fit_w, fit_h, FilterType::Triangle);
            &scaled
        } else {
            &self.image
        };
        let (iw, ih) = (img.width(), img.height());

        let rows = ih.div_ceil(2) as u16;
        let col_offset = area.width.saturating_sub(iw as u16) / 2;
        let row_offset = area.height.saturating_sub(rows) / 2;

        for row in 0..rows.min(area.height) {
            let yt = (row as u32) * 2;
            let yb = yt + 1;
            for col in 0..iw.min(area.width as u32) {
                let t = img.get_pixel(col, yt);
                let fg = Color::Rgb(t[0], t[1], t[2]);
                let bg = if yb < ih {
                    let b = img.get_pixel(col, yb);
                    Color::Rgb(b[0], b[1], b[2])
                } else {
                    Color::Reset
                };
                let pos = Position::new(area.x + col_offset + col as u16, area.y + row_offset + row);
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_char('▀').set_fg(fg).set_bg(bg);
                }
            }
        }
    }
}

fn to_rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}
