//! Raw input sample accumulation for the in-progress stroke.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One raw pointer sample as delivered by the host input source.
///
/// A single input event may carry a batch of historical samples in addition
/// to its current position; the batch arrives in chronological order with the
/// current-position sample last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSample {
    pub position: Point,
    /// True for samples from the event's history buffer.
    pub historical: bool,
}

impl InputSample {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            historical: false,
        }
    }

    pub fn historical(position: Point) -> Self {
        Self {
            position,
            historical: true,
        }
    }
}

/// Ordered buffer of raw points for the stroke currently being drawn.
#[derive(Debug, Clone, Default)]
pub struct SampleBuffer {
    points: Vec<Point>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append a batch of points in arrival order.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) {
        self.points.extend(points);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Clear the buffer for the next stroke.
    pub fn reset(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_preserves_order() {
        let mut buffer = SampleBuffer::new();
        buffer.push(Point::new(0.0, 0.0));
        buffer.extend([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);

        assert_eq!(
            buffer.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut buffer = SampleBuffer::new();
        buffer.push(Point::new(5.0, 5.0));
        assert_eq!(buffer.len(), 1);

        buffer.reset();
        assert!(buffer.is_empty());
    }
}
