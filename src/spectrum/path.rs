use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::{CycloError, CycloResult};

/// Ordered sequence of raw samples captured from an input device.
///
/// Insertion order is the temporal sampling order; the sequence is immutable
/// once constructed. A path must hold at least one point: an empty capture is
/// a caller error, not a computable input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct SampledPath {
    points: Vec<Point>,
}

impl SampledPath {
    /// Build a path from raw samples, rejecting an empty sequence.
    pub fn new(points: Vec<Point>) -> CycloResult<Self> {
        if points.is_empty() {
            return Err(CycloError::validation(
                "path must contain at least one point (draw something first)",
            ));
        }
        Ok(Self { points })
    }

    /// Number of samples N.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction rejects empty paths.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The samples in capture order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Translate every sample against a fixed reference point, yielding the
    /// complex-plane view of the path: re = x - ox, im = y - oy.
    pub(crate) fn centered(&self, origin: Point) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(move |p| *p - origin)
    }
}

impl TryFrom<Vec<Point>> for SampledPath {
    type Error = CycloError;

    fn try_from(points: Vec<Point>) -> CycloResult<Self> {
        Self::new(points)
    }
}

impl From<SampledPath> for Vec<Point> {
    fn from(path: SampledPath) -> Self {
        path.points
    }
}
