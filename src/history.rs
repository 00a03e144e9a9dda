//! Committed stroke history with undo/redo.

use crate::curve::Curve;
use crate::style::Pen;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for strokes.
pub type StrokeId = Uuid;

/// A committed (curve, pen) pair. Immutable once appended to history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    pub curve: Curve,
    pub pen: Pen,
}

impl Stroke {
    pub fn new(curve: Curve, pen: Pen) -> Self {
        Self {
            id: Uuid::new_v4(),
            curve,
            pen,
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }
}

/// Ordered collection of committed strokes plus a LIFO redo buffer.
///
/// Invariant: a stroke lives in at most one of the two sequences at a time.
/// Strokes render in insertion order, later strokes on top.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeHistory {
    strokes: Vec<Stroke>,
    /// Redo buffer (top of stack at the end).
    #[serde(skip)]
    redo_buffer: Vec<Stroke>,
}

impl StrokeHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed stroke.
    ///
    /// The redo buffer is intentionally left intact: a redo after drawing a
    /// new stroke revives the most recently undone one, matching the
    /// behavior this engine is compatible with.
    pub fn commit(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Move the last stroke onto the redo buffer.
    /// Returns false (no-op) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.strokes.pop() {
            Some(stroke) => {
                self.redo_buffer.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move the top of the redo buffer back onto the stroke list.
    /// Returns false (no-op) when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_buffer.pop() {
            Some(stroke) => {
                self.strokes.push(stroke);
                true
            }
            None => false,
        }
    }

    /// Move every stroke onto the redo buffer, newest pushed first, so that
    /// repeated `redo()` calls restore the original sequence oldest-first.
    ///
    /// Strokes undone before the clear are discarded: afterwards only the
    /// just-cleared strokes are redoable.
    pub fn clear(&mut self) {
        self.redo_buffer.clear();
        let drained: Vec<Stroke> = self.strokes.drain(..).rev().collect();
        self.redo_buffer.extend(drained);
    }

    pub fn can_undo(&self) -> bool {
        !self.strokes.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// Committed strokes in draw order (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes.iter()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of strokes waiting in the redo buffer.
    pub fn redo_depth(&self) -> usize {
        self.redo_buffer.len()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Serialize the committed strokes to JSON. The redo buffer is transient
    /// and not included.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a history from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgba;
    use kurbo::Point;

    fn stroke(x: f64) -> Stroke {
        let curve = Curve::smooth(&[Point::new(x, 0.0), Point::new(x + 10.0, 10.0)]);
        Stroke::new(curve, Pen::default())
    }

    #[test]
    fn test_commit_and_order() {
        let mut history = StrokeHistory::new();
        let a = stroke(0.0);
        let b = stroke(100.0);
        let ids = [a.id(), b.id()];

        history.commit(a);
        history.commit(b);

        let seen: Vec<StrokeId> = history.iter().map(Stroke::id).collect();
        assert_eq!(seen, ids);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = StrokeHistory::new();
        history.commit(stroke(0.0));
        history.commit(stroke(50.0));
        let before = history.strokes().to_vec();

        assert!(history.undo());
        assert_eq!(history.len(), 1);
        assert!(history.redo());

        // Idempotence: exact sequence by value
        assert_eq!(history.strokes(), before.as_slice());
    }

    #[test]
    fn test_n_undos_then_n_redos() {
        let mut history = StrokeHistory::new();
        let strokes: Vec<Stroke> = (0..4).map(|i| stroke(i as f64 * 10.0)).collect();
        for s in &strokes {
            history.commit(s.clone());
        }

        for _ in 0..4 {
            assert!(history.undo());
        }
        assert!(history.is_empty());
        assert_eq!(history.redo_depth(), 4);

        for _ in 0..4 {
            assert!(history.redo());
        }
        assert_eq!(history.strokes(), strokes.as_slice());
    }

    #[test]
    fn test_clear_then_redo_restores_original_order() {
        let mut history = StrokeHistory::new();
        let strokes: Vec<Stroke> = (0..3).map(|i| stroke(i as f64)).collect();
        for s in &strokes {
            history.commit(s.clone());
        }

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.redo_depth(), 3);

        for _ in 0..3 {
            assert!(history.redo());
        }
        assert_eq!(history.strokes(), strokes.as_slice());
    }

    #[test]
    fn test_clear_discards_earlier_undos() {
        let mut history = StrokeHistory::new();
        let a = stroke(0.0);
        let a_id = a.id();
        history.commit(a);
        history.commit(stroke(50.0));
        assert!(history.undo());

        history.clear();

        // Only the just-cleared stroke is redoable; the earlier undo is gone
        assert_eq!(history.redo_depth(), 1);
        assert!(history.redo());
        assert_eq!(history.strokes()[0].id(), a_id);
        assert!(!history.redo());
    }

    #[test]
    fn test_empty_history_noops() {
        let mut history = StrokeHistory::new();

        assert!(!history.can_undo());
        assert!(!history.undo());
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert!(history.is_empty());
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_commit_keeps_redo_buffer() {
        let mut history = StrokeHistory::new();
        let old = stroke(0.0);
        let old_id = old.id();
        history.commit(old);
        assert!(history.undo());

        // Compatibility: committing does not invalidate the redo buffer
        history.commit(stroke(50.0));
        assert!(history.can_redo());
        assert!(history.redo());
        assert_eq!(history.strokes()[1].id(), old_id);
    }

    #[test]
    fn test_json_round_trip_skips_redo() {
        let mut history = StrokeHistory::new();
        history.commit(Stroke::new(
            Curve::smooth(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]),
            Pen::new(Rgba::from_hex("#FF0000").unwrap(), 4.0).unwrap(),
        ));
        history.commit(stroke(10.0));
        history.undo();

        let json = history.to_json().unwrap();
        let restored = StrokeHistory::from_json(&json).unwrap();

        assert_eq!(restored.strokes(), history.strokes());
        assert_eq!(restored.redo_depth(), 0);
    }
}
