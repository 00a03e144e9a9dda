//! Drawing surface facade: in-progress stroke plus committed history.

use crate::curve::Curve;
use crate::history::{Stroke, StrokeHistory};
use crate::sample::{InputSample, SampleBuffer};
use crate::style::{Pen, Rgba, StyleError};
use kurbo::Point;

/// One renderable layer: a curve and the pen to stroke it with.
#[derive(Debug, Clone, Copy)]
pub struct Renderable<'a> {
    pub curve: &'a Curve,
    pub pen: Pen,
}

/// Owns the in-progress stroke state and the committed stroke history, and
/// exposes the full mutation API. Single-threaded; a multi-threaded host must
/// serialize calls externally.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    samples: SampleBuffer,
    current_curve: Curve,
    pen: Pen,
    history: StrokeHistory,
    background: Rgba,
    needs_redraw: bool,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// Create a surface with a default pen on a white background.
    pub fn new() -> Self {
        Self::with_style(Pen::default(), Rgba::white())
    }

    /// Create a surface with an initial pen and background color, as supplied
    /// by an external style loader.
    pub fn with_style(pen: Pen, background: Rgba) -> Self {
        Self {
            samples: SampleBuffer::new(),
            current_curve: Curve::default(),
            pen,
            history: StrokeHistory::new(),
            background,
            needs_redraw: true,
        }
    }

    /// Append a batch of raw samples and recompute the in-progress curve.
    ///
    /// The batch must already be in chronological order, current-position
    /// sample last. An empty batch is a no-op for the event.
    pub fn add_samples<I: IntoIterator<Item = InputSample>>(&mut self, batch: I) {
        let before = self.samples.len();
        self.samples.extend(batch.into_iter().map(|s| s.position));
        if self.samples.len() == before {
            return;
        }

        self.current_curve = Curve::smooth(self.samples.points());
        self.needs_redraw = true;
    }

    /// Append a single current-position sample.
    pub fn add_point(&mut self, point: Point) {
        self.add_samples([InputSample::new(point)]);
    }

    /// Commit the in-progress stroke to history and reset for the next one.
    ///
    /// The committed stroke takes a copy of the current pen; the surface
    /// keeps the same color and width for the next stroke.
    pub fn end_stroke(&mut self) {
        let curve = std::mem::take(&mut self.current_curve);
        log::debug!(
            "committing stroke: {} segments, width {}",
            curve.len(),
            self.pen.width()
        );
        self.history.commit(Stroke::new(curve, self.pen));
        self.samples.reset();
        self.needs_redraw = true;
    }

    /// Undo the most recent committed stroke. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        self.needs_redraw |= changed;
        changed
    }

    /// Redo the most recently undone stroke. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        self.needs_redraw |= changed;
        changed
    }

    /// Move every committed stroke onto the redo buffer.
    pub fn clear_all(&mut self) {
        log::debug!("clearing {} strokes", self.history.len());
        self.history.clear();
        self.needs_redraw = true;
    }

    /// Committed strokes in draw order, then the in-progress curve with the
    /// current pen. The in-progress entry is always present; an empty curve
    /// simply draws nothing.
    pub fn renderables(&self) -> impl Iterator<Item = Renderable<'_>> {
        self.history
            .iter()
            .map(|stroke| Renderable {
                curve: &stroke.curve,
                pen: stroke.pen,
            })
            .chain(std::iter::once(Renderable {
                curve: &self.current_curve,
                pen: self.pen,
            }))
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    pub fn current_curve(&self) -> &Curve {
        &self.current_curve
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Set the color of the current, not-yet-committed pen.
    pub fn set_pen_color(&mut self, color: Rgba) {
        self.pen.set_color(color);
        self.needs_redraw = true;
    }

    /// Set the pen color from a hex string. On failure the previous color is
    /// kept and the caller decides the fallback.
    pub fn set_pen_color_hex(&mut self, hex: &str) -> Result<(), StyleError> {
        self.set_pen_color(Rgba::from_hex(hex)?);
        Ok(())
    }

    /// Set the width of the current pen. Non-positive values are rejected.
    pub fn set_pen_width(&mut self, width: f64) -> Result<(), StyleError> {
        self.pen.set_width(width)?;
        self.needs_redraw = true;
        Ok(())
    }

    /// Current pen color in canonical `#RRGGBB` form.
    pub fn pen_color_hex(&self) -> String {
        self.pen.color().to_hex()
    }

    pub fn stroke_width(&self) -> f64 {
        self.pen.width()
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn set_background(&mut self, color: Rgba) {
        self.background = color;
        self.needs_redraw = true;
    }

    pub fn set_background_hex(&mut self, hex: &str) -> Result<(), StyleError> {
        self.set_background(Rgba::from_hex(hex)?);
        Ok(())
    }

    /// Background color in canonical `#RRGGBB` form.
    pub fn background_hex(&self) -> String {
        self.background.to_hex()
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consume the redraw flag; returns whether a redraw was pending.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
