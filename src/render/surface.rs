use crate::foundation::core::Point;
use crate::foundation::error::CycloResult;

/// Draw operations a frame emits toward the host's rendering surface.
///
/// All operations are advisory geometry: the surface owns stroke styling,
/// buffering, and presentation. The runner issues, per frame: one `clear`,
/// one circle + one segment per chain component, then the accumulated trace
/// as a polyline (most-recent-first point order).
pub trait RenderSurface {
    /// Clear the whole surface ahead of a frame.
    fn clear(&mut self) -> CycloResult<()>;

    /// Stroke one epicycle outline.
    fn stroke_circle(&mut self, center: Point, radius: f64) -> CycloResult<()>;

    /// Stroke one rotating-vector arm.
    fn stroke_segment(&mut self, from: Point, to: Point) -> CycloResult<()>;

    /// Stroke the reconstructed curve so far, connecting consecutive points.
    fn stroke_polyline(&mut self, points: &[Point]) -> CycloResult<()>;
}

/// One recorded [`RenderSurface`] operation.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Surface cleared.
    Clear,
    /// Circle stroked at `center` with `radius`.
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
    },
    /// Segment stroked from `from` to `to`.
    Segment {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
    },
    /// Polyline stroked through `points`.
    Polyline {
        /// Polyline vertices in draw order.
        points: Vec<Point>,
    },
}

/// Surface that records every operation instead of rasterizing.
///
/// Backs the offline CLI output and lets animation runs be asserted against
/// with no rendering dependency at all.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Operations in emission order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// The last polyline stroked, if any: the most recent view of the trace.
    pub fn last_polyline(&self) -> Option<&[Point]> {
        self.ops.iter().rev().find_map(|op| match op {
            SurfaceOp::Polyline { points } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self) -> CycloResult<()> {
        self.ops.push(SurfaceOp::Clear);
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64) -> CycloResult<()> {
        self.ops.push(SurfaceOp::Circle { center, radius });
        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point) -> CycloResult<()> {
        self.ops.push(SurfaceOp::Segment { from, to });
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point]) -> CycloResult<()> {
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
        });
        Ok(())
    }
}
