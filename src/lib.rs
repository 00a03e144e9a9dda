//! Inkstroke Core Library
//!
//! Real-time freehand stroke capture and smoothing: raw pointer samples go
//! in, smooth cubic-bezier curves and an undo/redo-capable stroke history
//! come out. Rendering, input parsing, and persistence are left to the host.

pub mod curve;
pub mod history;
pub mod sample;
pub mod style;
pub mod surface;

pub use curve::Curve;
pub use history::{Stroke, StrokeHistory, StrokeId};
pub use sample::{InputSample, SampleBuffer};
pub use style::{Pen, Rgba, StyleError};
pub use surface::{DrawingSurface, Renderable};
