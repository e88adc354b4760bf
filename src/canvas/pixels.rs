use std::ops::Range;

use bevy::prelude::*;

use super::{Canvas, Surface};

/// Software canvas: an RGBA8 buffer (row-major, top row first) with
/// source-over blending in sRGB space, the way a browser 2D context blends.
#[derive(Clone, Debug)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
    /// Non-premultiplied sRGB fill color.
    fill: [f32; 4],
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
            fill: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Canvas covering `surface`, rounded up to whole pixels.
    pub fn for_surface(surface: Surface) -> Self {
        Self::new(surface.width().ceil() as u32, surface.height().ceil() as u32)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, ready for an `Rgba8UnormSrgb` texture.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        let mut out = [0; 4];
        out.copy_from_slice(&self.data[i..i + 4]);
        Some(out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Source-over of the current fill onto one pixel.
    fn blend(&mut self, x: u32, y: u32) {
        let [sr, sg, sb, sa] = self.fill;
        let i = self.index(x, y);
        let dst = &mut self.data[i..i + 4];

        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            dst.copy_from_slice(&[0, 0, 0, 0]);
            return;
        }
        for (c, s) in [sr, sg, sb].into_iter().enumerate() {
            let d = dst[c] as f32 / 255.0;
            let v = (s * sa + d * da * (1.0 - sa)) / out_a;
            dst[c] = to_byte(v);
        }
        dst[3] = to_byte(out_a);
    }

    /// Pixel columns/rows whose centers fall inside `[lo, hi)`, clipped to `0..limit`.
    fn span(lo: f32, hi: f32, limit: u32) -> Range<u32> {
        if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
            return 0..0;
        }
        let clip = |v: f32| v.round().clamp(0.0, limit as f32) as u32;
        clip(lo)..clip(hi)
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Canvas for PixelCanvas {
    fn set_fill(&mut self, color: Color) {
        let c = color.to_srgba();
        self.fill = [c.red, c.green, c.blue, c.alpha];
    }

    fn clear(&mut self) {
        self.data.fill(0);
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2) {
        let xs = Self::span(min.x, min.x + size.x, self.width);
        let ys = Self::span(min.y, min.y + size.y, self.height);
        for y in ys {
            for x in xs.clone() {
                self.blend(x, y);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let r2 = radius * radius;
        let xs = Self::span(center.x - radius, center.x + radius, self.width);
        let ys = Self::span(center.y - radius, center.y + radius, self.height);
        for y in ys {
            for x in xs.clone() {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_fill_replaces_pixels() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_fill(Color::srgb(0.0, 0.0, 1.0));
        canvas.fill_rect(Vec2::ZERO, Vec2::new(4.0, 4.0));
        assert_eq!(canvas.pixel(3, 3), Some([0, 0, 255, 255]));
    }

    #[test]
    fn translucent_black_fades_toward_black() {
        let mut canvas = PixelCanvas::new(1, 1);
        canvas.set_fill(Color::srgb(1.0, 1.0, 1.0));
        canvas.fill_rect(Vec2::ZERO, Vec2::ONE);
        canvas.set_fill(Color::srgba(0.0, 0.0, 0.0, 0.1));
        canvas.fill_rect(Vec2::ZERO, Vec2::ONE);
        let [r, g, b, a] = canvas.pixel(0, 0).unwrap();
        assert!((229..=230).contains(&r), "r = {r}");
        assert_eq!((r, r, a), (g, b, 255));
    }

    #[test]
    fn circle_covers_center_not_corners() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.set_fill(Color::WHITE);
        canvas.fill_circle(Vec2::new(5.0, 5.0), 3.0);
        assert_eq!(canvas.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(9, 9), Some([0, 0, 0, 0]));
    }

    #[test]
    fn shapes_clip_to_the_buffer() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_fill(Color::WHITE);
        canvas.fill_circle(Vec2::new(-1.0, 2.0), 2.0);
        canvas.fill_rect(Vec2::new(2.0, 2.0), Vec2::new(100.0, 100.0));
        assert_eq!(canvas.pixel(3, 3), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(0, 2), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn non_finite_shapes_are_skipped() {
        let mut canvas = PixelCanvas::new(4, 4);
        canvas.set_fill(Color::WHITE);
        canvas.fill_circle(Vec2::new(f32::NAN, 1.0), 2.0);
        canvas.fill_rect(Vec2::new(0.0, f32::INFINITY), Vec2::ONE);
        assert!(canvas.bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_resets_to_transparent() {
        let mut canvas = PixelCanvas::new(2, 2);
        canvas.set_fill(Color::WHITE);
        canvas.fill_rect(Vec2::ZERO, Vec2::new(2.0, 2.0));
        canvas.clear();
        assert!(canvas.bytes().iter().all(|&b| b == 0));
    }
}
