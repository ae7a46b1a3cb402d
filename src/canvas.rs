//! Interactive controls around one [`LSystem`]: order, angle and redraw.

use crate::drawing::{Frame, LineSink};
use crate::error::Result;
use crate::grammar::LSystem;
use crate::interpreter::{TurtleConfig, TurtleInterpreter};
use glam::Vec2;

/// Owns the system being displayed and the interpreter used to draw it.
///
/// The angle divisor starts at the grammar's value but can be changed
/// independently; switching systems resets it.
pub struct Canvas {
    lsystem: LSystem,
    interpreter: TurtleInterpreter,
}

impl Canvas {
    pub fn new(lsystem: LSystem, config: TurtleConfig) -> Self {
        let interpreter = TurtleInterpreter::new(lsystem.grammar.angle_divisor, config);
        Self {
            lsystem,
            interpreter,
        }
    }

    pub fn lsystem(&self) -> &LSystem {
        &self.lsystem
    }

    /// Replaces the displayed system, returning the previous one.
    pub fn set_lsystem(&mut self, lsystem: LSystem) -> LSystem {
        self.interpreter
            .set_angle_divisor(lsystem.grammar.angle_divisor);
        std::mem::replace(&mut self.lsystem, lsystem)
    }

    pub fn interpreter(&self) -> &TurtleInterpreter {
        &self.interpreter
    }

    pub fn order(&self) -> usize {
        self.lsystem.order
    }

    /// Sets the order, clamped to zero.
    pub fn set_order(&mut self, order: i64) {
        self.lsystem.order = usize::try_from(order.max(0)).unwrap_or(usize::MAX);
    }

    pub fn angle(&self) -> i64 {
        self.interpreter.angle_divisor()
    }

    /// Sets the angle divisor, clamped to at least 3.
    pub fn set_angle(&mut self, angle: i64) {
        self.interpreter.set_angle_divisor(angle);
    }

    fn order_key(&self) -> i64 {
        i64::try_from(self.lsystem.order).unwrap_or(i64::MAX)
    }

    /// Length of the expanded string at the current order.
    pub fn num_chars(&mut self) -> Result<usize> {
        let order = self.order_key();
        Ok(self.lsystem.expander.get_str(order)?.len())
    }

    /// Length of the operation stream at the current order.
    pub fn num_ops(&mut self) -> Result<usize> {
        let order = self.order_key();
        Ok(self.lsystem.expander.get_draw_ops(order)?.len())
    }

    /// Redraws the current system onto `sink`, fitted to `surface`.
    pub fn render<S: LineSink + ?Sized>(&mut self, surface: Vec2, sink: &mut S) -> Result<Frame> {
        let order = self.order_key();
        let ops = self.lsystem.expander.get_draw_ops(order)?;
        Ok(self.interpreter.render(ops, surface, sink))
    }

    /// Window caption describing the current view.
    pub fn caption(&mut self) -> Result<String> {
        let chars = self.num_chars()?;
        let ops = self.num_ops()?;
        Ok(format!(
            "{}: Order {}, Angle {}, ({} chars, {} ops)",
            self.lsystem.title,
            self.order(),
            self.angle(),
            chars,
            ops
        ))
    }
}
