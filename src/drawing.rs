//! Output of a render: measured extents, the fit onto a surface, and the
//! lines handed to a [`LineSink`].

use bevy_math::Rect;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned extent of a traced figure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Degenerate bounds containing only `point`.
    pub fn at(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the bounds to include `point`.
    pub fn include(&mut self, point: Vec2) {
        *self = Rect::from(*self).union_point(point).into();
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Width and height, each at least one unit so that scaling never divides by zero.
    pub fn image_size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height()).max(Vec2::ONE)
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Self {
            min: rect.min,
            max: rect.max,
        }
    }
}

impl From<Bounds> for Rect {
    fn from(bounds: Bounds) -> Self {
        Rect {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

/// A visible line emitted during the paint pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    /// Palette slot, never the background slot 0.
    pub colour: usize,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Receives the output of a paint pass.
///
/// Implemented by whatever owns the display surface.
pub trait LineSink {
    /// Called once before any line, with the background palette slot.
    fn clear(&mut self, background: usize);

    /// Called after [`clear`](Self::clear) with the placement used for this paint pass.
    fn frame(&mut self, _frame: &Frame) {}

    /// Draws a line from `from` to `to` in palette slot `colour`.
    fn line(&mut self, from: Vec2, to: Vec2, colour: usize);
}

/// Scale and placement chosen to fit a figure onto a surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Extent measured by the measurement pass, in unscaled units.
    pub bounds: Bounds,
    /// Target surface size.
    pub surface: Vec2,
    /// Uniform scale from figure units to surface units.
    pub scale: f32,
    /// Offset centering the image along the shorter axis.
    pub padding: Vec2,
    /// Where the turtle starts during the paint pass.
    pub origin: Vec2,
}

/// An in-memory record of a paint pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub background: usize,
    pub segments: Vec<Segment>,
    pub frame: Frame,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LineSink for Drawing {
    fn clear(&mut self, background: usize) {
        self.background = background;
        self.segments.clear();
    }

    fn frame(&mut self, frame: &Frame) {
        self.frame = *frame;
    }

    fn line(&mut self, from: Vec2, to: Vec2, colour: usize) {
        self.segments.push(Segment { from, to, colour });
    }
}
