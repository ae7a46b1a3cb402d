//! # lsystem-turtle
//!
//! Renders fractal curves described by Lindenmayer-system grammars.
//!
//! A [`Grammar`] (axiom, rewriting rules and angle divisor) is expanded by an
//! [`Expander`], which memoizes every order it computes. The expanded string is
//! [`tokenize`]d into a stream of [`DrawOp`]s, and a [`TurtleInterpreter`] traces
//! that stream twice: once to measure the figure, once to paint it scaled and
//! centered onto a surface through a [`LineSink`].
//!
//! Windowing is left to the caller: implement [`LineSink`] for your surface, or
//! record the result into a [`Drawing`].

pub mod canvas;
pub mod drawing;
pub mod error;
pub mod expander;
pub mod grammar;
pub mod interpreter;
pub mod loader;
pub mod palette;
pub mod tokenizer;
pub mod turtle;

pub use canvas::*;
pub use drawing::*;
pub use error::*;
pub use expander::*;
pub use grammar::*;
pub use interpreter::*;
pub use palette::*;
pub use tokenizer::*;
pub use turtle::*;
