//! Smoothed curve representation and the bezier smoother.

use kurbo::{BezPath, CubicBez, ParamCurveExtrema, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Fixed smoothing tension divisor. Control offsets are coordinate deltas
/// divided by this constant; it is not configurable.
const TENSION_DIVISOR: f64 = 3.0;

/// An ordered sequence of cubic bezier segments produced from a point
/// sequence. Produced fresh on each recompute, never mutated after commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    segments: Vec<CubicBez>,
}

impl Curve {
    /// Smooth a point sequence into a curve.
    ///
    /// Catmull-Rom-style interpolation: each point gets a control offset
    /// derived from its neighbors, and consecutive points are joined by a
    /// cubic whose control points lean along those offsets. Fewer than two
    /// points produce an empty curve (a single tap renders nothing).
    pub fn smooth(points: &[Point]) -> Self {
        if points.len() < 2 {
            return Self::default();
        }

        let offsets = control_offsets(points);
        let segments = points
            .windows(2)
            .enumerate()
            .map(|(i, w)| CubicBez::new(w[0], w[0] + offsets[i], w[1] - offsets[i + 1], w[1]))
            .collect();

        Self { segments }
    }

    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First on-curve point, if any.
    pub fn first_point(&self) -> Option<Point> {
        self.segments.first().map(|seg| seg.p0)
    }

    /// Last on-curve point, if any.
    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(|seg| seg.p3)
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.first_point() else {
            return path;
        };

        path.move_to(first);
        for seg in &self.segments {
            path.curve_to(seg.p1, seg.p2, seg.p3);
        }
        path
    }

    /// Bounding box of the curve, or `Rect::ZERO` when empty.
    pub fn bounds(&self) -> Rect {
        self.segments
            .iter()
            .map(|seg| seg.bounding_box())
            .reduce(|a, b| a.union(b))
            .unwrap_or(Rect::ZERO)
    }
}

/// Per-point control offsets.
///
/// First and last points lean toward their single neighbor; interior points
/// span the gap between the two neighbors. Requires `points.len() >= 2`; a
/// two-point sequence uses only the first/last branches.
fn control_offsets(points: &[Point]) -> Vec<Vec2> {
    let last = points.len() - 1;
    (0..points.len())
        .map(|i| {
            let (from, to) = if i == 0 {
                (points[0], points[1])
            } else if i == last {
                (points[last - 1], points[last])
            } else {
                (points[i - 1], points[i + 1])
            };
            (to - from) / TENSION_DIVISOR
        })
        .collect()
}
