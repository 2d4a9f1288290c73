use crate::foundation::error::{CycloError, CycloResult};

pub use kurbo::{Point, Vec2};

/// Index of one animation frame within a run (0-based).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Extents of the drawing surface, used as the coordinate reference for the
/// transform origin and for the epicycle scale computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in surface units (pixels).
    pub width: u32,
    /// Height in surface units (pixels).
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero extents.
    pub fn new(width: u32, height: u32) -> CycloResult<Self> {
        if width == 0 || height == 0 {
            return Err(CycloError::validation("canvas extents must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Geometric center of the canvas. This is the fixed reference point all
    /// samples are translated against, and the anchor of the epicycle chain.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// The smaller of the two extents.
    pub fn min_extent(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}
