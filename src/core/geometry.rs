//! Ring geometry — where each dot sits inside the widget's client area.
//!
//! All coordinates are in logical units (paint-surface pixels), with the
//! origin at the top-left corner and `y` growing downwards.

use std::f64::consts::TAU;

/// A 2D point with sub-pixel precision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[cfg(test)]
    pub fn distance(self, other: PointF) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Widget dimensions in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Centre of the client area.
    pub fn center(self) -> PointF {
        PointF::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}

/// Point at `length` from `center` in direction `degrees`.
///
/// Cosine drives the horizontal axis and sine the vertical one, so 0° points
/// right and angles increase clockwise on screen.  The angle is clamped to
/// one full turn.
pub fn polar_point(center: PointF, length: f32, degrees: f64) -> PointF {
    let radians = degrees.to_radians().clamp(0.0, TAU);
    let length = length as f64;
    PointF::new(
        (center.x as f64 + radians.cos() * length) as f32,
        (center.y as f64 + radians.sin() * length) as f32,
    )
}

/// Radius of the ring the dot centres sit on.
///
/// Half of the shorter side (integer halving) minus one dot diameter.  The
/// result can go negative for oversized dots; the ring then flips through
/// the centre, which is harmless.  Widened to `i64` so no diameter overflows.
pub fn ring_radius(size: Size, diameter: i32) -> i64 {
    (size.width.min(size.height) / 2) as i64 - diameter as i64
}

/// Top-left origins of `count` dots of `diameter`, evenly spaced on the ring.
///
/// Angles are derived from the integer step index so the result always holds
/// exactly `count` points.  The sequence runs in reverse angular order (last
/// angle first); a decrementing highlight index therefore travels clockwise.
pub fn dot_layout(size: Size, diameter: i32, count: usize) -> Vec<PointF> {
    if count == 0 {
        return Vec::new();
    }

    let center = size.center();
    let radius = ring_radius(size, diameter) as f32;
    let half = diameter as f32 / 2.0;
    let step = 360.0 / count as f64;

    (0..count)
        .rev()
        .map(|k| {
            let p = polar_point(center, radius, k as f64 * step);
            PointF::new(p.x - half, p.y - half)
        })
        .collect()
}

/// Centre of a dot whose bounding box starts at `origin`.
pub fn dot_center(origin: PointF, diameter: i32) -> PointF {
    let half = diameter as f32 / 2.0;
    PointF::new(origin.x + half, origin.y + half)
}
