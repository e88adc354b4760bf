use bevy::prelude::*;

pub mod pixels;
pub use pixels::PixelCanvas;

/// Drawing surface dimensions in pixels. Origin is the top-left corner, +Y down
/// (window cursor coordinates use the same convention).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    width: f32,
    height: f32,
}

impl Surface {
    /// `None` for sizes that cannot back a drawing surface
    /// (a minimized window reports 0×0).
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v >= 1.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        0.5 * self.size()
    }
}

/// The 2D draw operations the scenes paint with.
pub trait Canvas {
    /// Color used by the following fill operations.
    fn set_fill(&mut self, color: Color);
    /// Reset every pixel to transparent.
    fn clear(&mut self);
    /// Fill an axis-aligned rectangle, blending with what is already there.
    fn fill_rect(&mut self, min: Vec2, size: Vec2);
    /// Fill a disc, blending with what is already there.
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes_are_not_surfaces() {
        assert!(Surface::new(0.0, 600.0).is_none());
        assert!(Surface::new(800.0, -1.0).is_none());
        assert!(Surface::new(f32::NAN, 600.0).is_none());
        assert!(Surface::new(f32::INFINITY, 600.0).is_none());
    }

    #[test]
    fn center_is_half_the_size() {
        let s = Surface::new(800.0, 600.0).unwrap();
        assert_eq!(s.center(), Vec2::new(400.0, 300.0));
    }
}
