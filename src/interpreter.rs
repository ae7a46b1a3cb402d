//! Interpreter that traces a [`DrawOp`] stream into auto-fitted line segments.
//!
//! The entry point is [`TurtleInterpreter::render`]. It walks the operation
//! stream twice: a measurement pass that records the figure's [`Bounds`], then
//! a paint pass that starts from a scaled, centered origin and sends every
//! drawn line to a [`LineSink`].

use crate::drawing::{Bounds, Frame, LineSink};
use crate::palette::Palette;
use crate::turtle::{DrawOp, GraphicsState};
use glam::Vec2;

/// Smallest number of turn steps in a full circle.
pub const MIN_ANGLE_DIVISOR: i64 = 3;

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Step length before scaling. The measured figure is expressed in these units.
    pub base_step: f32,
    /// Initial relative and absolute heading in degrees. 90 points along `+Y`.
    pub heading: f32,
    /// Optional limit on the graphics stack depth. Pushes beyond it are
    /// dropped with a warning. `None` (the default) never drops a push.
    pub max_stack_depth: Option<usize>,
    /// Colours that colour indices are resolved against.
    pub palette: Palette,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            base_step: 50.0,
            heading: 90.0,
            max_stack_depth: None,
            palette: Palette::default(),
        }
    }
}

/// Interprets operation streams for one angle divisor.
#[derive(Clone, Debug)]
pub struct TurtleInterpreter {
    angle_divisor: i64,
    angle_step: f32,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter turning `360 / angle_divisor` degrees per relative turn.
    /// `angle_divisor` is clamped to at least [`MIN_ANGLE_DIVISOR`].
    pub fn new(angle_divisor: i64, config: TurtleConfig) -> Self {
        let mut interpreter = Self {
            angle_divisor: MIN_ANGLE_DIVISOR,
            angle_step: 0.0,
            config,
        };
        interpreter.set_angle_divisor(angle_divisor);
        interpreter
    }

    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    pub fn angle_divisor(&self) -> i64 {
        self.angle_divisor
    }

    /// Degrees turned by a single `+` or `-`.
    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    /// Sets the number of turn steps in a full circle, clamped to at least
    /// [`MIN_ANGLE_DIVISOR`], and recomputes the per-step angle.
    pub fn set_angle_divisor(&mut self, angle_divisor: i64) {
        self.angle_divisor = angle_divisor.max(MIN_ANGLE_DIVISOR);
        self.angle_step = 360.0 / self.angle_divisor as f32;
    }

    /// The turtle state every pass starts from, before any scaling.
    pub fn initial_state(&self) -> GraphicsState {
        GraphicsState {
            heading_rel: self.config.heading,
            heading_abs: self.config.heading,
            step: self.config.base_step,
            ..Default::default()
        }
    }

    /// Measures, fits and paints `ops` onto a surface of size `surface`.
    ///
    /// Returns the [`Frame`] that was used to place the figure.
    pub fn render<S: LineSink + ?Sized>(&self, ops: &[DrawOp], surface: Vec2, sink: &mut S) -> Frame {
        let bounds = self.measure(ops);
        let frame = self.fit(bounds, surface);
        self.paint(ops, &frame, sink);
        frame
    }

    /// Measurement pass: traces `ops` without drawing and returns the extent
    /// of every position the turtle visits, including the origin.
    pub fn measure(&self, ops: &[DrawOp]) -> Bounds {
        let start = self.initial_state();
        let mut bounds = Bounds::at(start.position);
        self.trace(ops, start, |_, to, _, _| bounds.include(to));
        bounds
    }

    /// Chooses a uniform scale that fits `bounds` inside `surface`, centered on
    /// the axis with room to spare.
    pub fn fit(&self, bounds: Bounds, surface: Vec2) -> Frame {
        let image = bounds.image_size();
        let scales = surface / image;

        let (scale, padding) = if scales.x < scales.y {
            let scale = scales.x;
            (scale, Vec2::new(0.0, (surface.y - scale * image.y) / 2.0))
        } else {
            let scale = scales.y;
            (scale, Vec2::new((surface.x - scale * image.x) / 2.0, 0.0))
        };

        let origin = -bounds.min * scale + padding;
        log::debug!(
            "fit {}x{} image to {}x{} surface: scale {}, origin {}",
            image.x,
            image.y,
            surface.x,
            surface.y,
            scale,
            origin
        );

        Frame {
            bounds,
            surface,
            scale,
            padding,
            origin,
        }
    }

    /// Paint pass: traces `ops` from the frame's origin with a scaled step and
    /// emits every drawn line.
    pub fn paint<S: LineSink + ?Sized>(&self, ops: &[DrawOp], frame: &Frame, sink: &mut S) {
        let mut start = self.initial_state();
        start.position = frame.origin;
        start.step *= frame.scale;

        sink.clear(0);
        sink.frame(frame);
        let palette = &self.config.palette;
        self.trace(ops, start, |from, to, draw, state| {
            if draw {
                sink.line(from, to, palette.slot(state.colour));
            }
        });
    }

    /// Runs `ops` from `start` and returns the final live state.
    pub fn run(&self, ops: &[DrawOp], start: GraphicsState) -> GraphicsState {
        self.trace(ops, start, |_, _, _, _| {})
    }

    /// Walks every operation in order, calling `on_move(from, to, draws, state)`
    /// after each movement.
    fn trace<F>(&self, ops: &[DrawOp], start: GraphicsState, mut on_move: F) -> GraphicsState
    where
        F: FnMut(Vec2, Vec2, bool, &GraphicsState),
    {
        let mut turtle = start;
        let mut stack: Vec<GraphicsState> = Vec::new();

        for op in ops {
            match *op {
                // --- MOVEMENT ---
                DrawOp::DrawRel | DrawOp::MoveRel => {
                    let from = turtle.advance(turtle.heading_rel);
                    on_move(from, turtle.position, *op == DrawOp::DrawRel, &turtle);
                }
                DrawOp::DrawAbs | DrawOp::MoveAbs => {
                    let from = turtle.advance(turtle.heading_abs);
                    on_move(from, turtle.position, *op == DrawOp::DrawAbs, &turtle);
                }

                // --- TURNING ---
                DrawOp::TurnRightRel => turtle.heading_rel += turtle.turn_sense() * self.angle_step,
                DrawOp::TurnLeftRel => turtle.heading_rel -= turtle.turn_sense() * self.angle_step,
                // Absolute turns follow the reversal flag as well.
                DrawOp::TurnRightAbs(degrees) => turtle.heading_abs += turtle.turn_sense() * degrees,
                DrawOp::TurnLeftAbs(degrees) => turtle.heading_abs -= turtle.turn_sense() * degrees,
                DrawOp::InvertTurns => turtle.reverse = !turtle.reverse,
                DrawOp::Turn180 => {
                    turtle.heading_rel += self.angle_step * (self.angle_divisor / 2) as f32
                }

                // --- STYLE ---
                DrawOp::Scale(factor) => turtle.step *= factor,
                DrawOp::DecrementColour(n) => turtle.colour = turtle.colour.wrapping_sub(n as i32),
                DrawOp::IncrementColour(n) => turtle.colour = turtle.colour.wrapping_add(n as i32),
                DrawOp::SetColour(n) => turtle.colour = n as i32,

                // --- FLOW ---
                DrawOp::Push => {
                    match self.config.max_stack_depth {
                        Some(limit) if stack.len() >= limit => {
                            log::warn!("graphics stack depth {limit} reached, dropping push")
                        }
                        _ => stack.push(turtle),
                    }
                }
                DrawOp::Pop => match stack.pop() {
                    Some(saved) => turtle = saved,
                    None => log::warn!("empty graphics stack, ignoring pop"),
                },
            }
        }

        turtle
    }
}
