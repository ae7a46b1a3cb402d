//! Turtle state and the closed set of drawing operations.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The kind of a drawing operation, one per operator character.
///
/// This is the stable vocabulary shared by the tokenizer and the interpreter.
/// Matching against operator characters is case-insensitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpKind {
    DrawRel,
    MoveRel,
    TurnLeftRel,
    TurnRightRel,
    DrawAbs,
    MoveAbs,
    TurnLeftAbs,
    TurnRightAbs,
    InvertTurns,
    Turn180,
    Scale,
    DecrementColour,
    IncrementColour,
    SetColour,
    Push,
    Pop,
}

impl OpKind {
    /// Every operation kind, in operator-table order.
    pub const ALL: [OpKind; 16] = [
        OpKind::DrawRel,
        OpKind::MoveRel,
        OpKind::TurnLeftRel,
        OpKind::TurnRightRel,
        OpKind::DrawAbs,
        OpKind::MoveAbs,
        OpKind::TurnLeftAbs,
        OpKind::TurnRightAbs,
        OpKind::InvertTurns,
        OpKind::Turn180,
        OpKind::Scale,
        OpKind::DecrementColour,
        OpKind::IncrementColour,
        OpKind::SetColour,
        OpKind::Push,
        OpKind::Pop,
    ];

    /// Looks up the operation for `c`, ignoring case.
    /// Returns `None` for grammar-only symbols with no drawing meaning.
    pub fn from_char(c: char) -> Option<Self> {
        let kind = match c.to_ascii_uppercase() {
            'F' => OpKind::DrawRel,
            'G' => OpKind::MoveRel,
            '-' => OpKind::TurnLeftRel,
            '+' => OpKind::TurnRightRel,
            'D' => OpKind::DrawAbs,
            'M' => OpKind::MoveAbs,
            '\\' => OpKind::TurnLeftAbs,
            '/' => OpKind::TurnRightAbs,
            '!' => OpKind::InvertTurns,
            '|' => OpKind::Turn180,
            '@' => OpKind::Scale,
            '<' => OpKind::DecrementColour,
            '>' => OpKind::IncrementColour,
            'C' => OpKind::SetColour,
            '[' => OpKind::Push,
            ']' => OpKind::Pop,
            _ => return None,
        };
        Some(kind)
    }

    /// The canonical (uppercase) operator character.
    pub fn symbol(self) -> char {
        match self {
            OpKind::DrawRel => 'F',
            OpKind::MoveRel => 'G',
            OpKind::TurnLeftRel => '-',
            OpKind::TurnRightRel => '+',
            OpKind::DrawAbs => 'D',
            OpKind::MoveAbs => 'M',
            OpKind::TurnLeftAbs => '\\',
            OpKind::TurnRightAbs => '/',
            OpKind::InvertTurns => '!',
            OpKind::Turn180 => '|',
            OpKind::Scale => '@',
            OpKind::DecrementColour => '<',
            OpKind::IncrementColour => '>',
            OpKind::SetColour => 'C',
            OpKind::Push => '[',
            OpKind::Pop => ']',
        }
    }

    /// Whether the operator is followed by a numeric literal.
    pub fn takes_value(self) -> bool {
        matches!(
            self,
            OpKind::TurnLeftAbs
                | OpKind::TurnRightAbs
                | OpKind::Scale
                | OpKind::DecrementColour
                | OpKind::IncrementColour
                | OpKind::SetColour
        )
    }

    /// Builds the operation for this kind. `value` is discarded for kinds
    /// that do not carry one.
    pub fn with_value(self, value: f32) -> DrawOp {
        match self {
            OpKind::DrawRel => DrawOp::DrawRel,
            OpKind::MoveRel => DrawOp::MoveRel,
            OpKind::TurnLeftRel => DrawOp::TurnLeftRel,
            OpKind::TurnRightRel => DrawOp::TurnRightRel,
            OpKind::DrawAbs => DrawOp::DrawAbs,
            OpKind::MoveAbs => DrawOp::MoveAbs,
            OpKind::TurnLeftAbs => DrawOp::TurnLeftAbs(value),
            OpKind::TurnRightAbs => DrawOp::TurnRightAbs(value),
            OpKind::InvertTurns => DrawOp::InvertTurns,
            OpKind::Turn180 => DrawOp::Turn180,
            OpKind::Scale => DrawOp::Scale(value),
            OpKind::DecrementColour => DrawOp::DecrementColour(value),
            OpKind::IncrementColour => DrawOp::IncrementColour(value),
            OpKind::SetColour => DrawOp::SetColour(value),
            OpKind::Push => DrawOp::Push,
            OpKind::Pop => DrawOp::Pop,
        }
    }
}

/// A single turtle command produced by the tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    // --- Movement ---
    /// Move along the relative heading, drawing a line (`F`).
    DrawRel,
    /// Move along the relative heading without drawing (`G`).
    MoveRel,
    /// Move along the absolute heading, drawing a line (`D`).
    DrawAbs,
    /// Move along the absolute heading without drawing (`M`).
    MoveAbs,

    // --- Turning ---
    /// Turn the relative heading left by one angle step (`-`).
    TurnLeftRel,
    /// Turn the relative heading right by one angle step (`+`).
    TurnRightRel,
    /// Turn the absolute heading left by the given degrees (`\`).
    TurnLeftAbs(f32),
    /// Turn the absolute heading right by the given degrees (`/`).
    TurnRightAbs(f32),
    /// Swap the meaning of left and right for all later turns (`!`).
    InvertTurns,
    /// Turn half a circle in angle steps (`|`).
    Turn180,

    // --- Style ---
    /// Multiply the step length (`@`).
    Scale(f32),
    /// Subtract from the colour index (`<`).
    DecrementColour(f32),
    /// Add to the colour index (`>`).
    IncrementColour(f32),
    /// Replace the colour index (`C`).
    SetColour(f32),

    // --- Flow Control ---
    /// Save the full turtle state onto the stack (`[`).
    Push,
    /// Restore the most recently pushed turtle state (`]`).
    Pop,
}

impl DrawOp {
    pub fn kind(&self) -> OpKind {
        match self {
            DrawOp::DrawRel => OpKind::DrawRel,
            DrawOp::MoveRel => OpKind::MoveRel,
            DrawOp::DrawAbs => OpKind::DrawAbs,
            DrawOp::MoveAbs => OpKind::MoveAbs,
            DrawOp::TurnLeftRel => OpKind::TurnLeftRel,
            DrawOp::TurnRightRel => OpKind::TurnRightRel,
            DrawOp::TurnLeftAbs(_) => OpKind::TurnLeftAbs,
            DrawOp::TurnRightAbs(_) => OpKind::TurnRightAbs,
            DrawOp::InvertTurns => OpKind::InvertTurns,
            DrawOp::Turn180 => OpKind::Turn180,
            DrawOp::Scale(_) => OpKind::Scale,
            DrawOp::DecrementColour(_) => OpKind::DecrementColour,
            DrawOp::IncrementColour(_) => OpKind::IncrementColour,
            DrawOp::SetColour(_) => OpKind::SetColour,
            DrawOp::Push => OpKind::Push,
            DrawOp::Pop => OpKind::Pop,
        }
    }

    /// The numeric payload, present only for the six value-carrying kinds.
    pub fn value(&self) -> Option<f32> {
        match *self {
            DrawOp::TurnLeftAbs(v)
            | DrawOp::TurnRightAbs(v)
            | DrawOp::Scale(v)
            | DrawOp::DecrementColour(v)
            | DrawOp::IncrementColour(v)
            | DrawOp::SetColour(v) => Some(v),
            _ => None,
        }
    }
}

/// The state of the drawing turtle.
///
/// This is a plain value: pushing it onto the graphics stack stores an
/// independent copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphicsState {
    /// Current position of the pen.
    pub position: Vec2,

    /// Heading in degrees used by `F`/`G`, changed by `+`/`-`/`|`.
    pub heading_rel: f32,

    /// Heading in degrees used by `D`/`M`, changed by `\`/`/`.
    pub heading_abs: f32,

    /// Distance covered by a single move.
    pub step: f32,

    /// When set, every turn goes the other way (`!`).
    pub reverse: bool,

    /// Unbounded colour index, resolved against the palette when drawing.
    pub colour: i32,
}

impl Default for GraphicsState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading_rel: 90.0,
            heading_abs: 90.0,
            step: 50.0,
            reverse: false,
            colour: 0,
        }
    }
}

impl GraphicsState {
    /// `-1.0` while turns are reversed, `1.0` otherwise.
    pub fn turn_sense(&self) -> f32 {
        if self.reverse { -1.0 } else { 1.0 }
    }

    /// Returns the unit vector for a heading given in degrees.
    pub fn direction(heading: f32) -> Vec2 {
        Vec2::from_angle(heading.to_radians())
    }

    /// Moves one step along `heading` and returns the position before the move.
    pub fn advance(&mut self, heading: f32) -> Vec2 {
        let before = self.position;
        self.position += Self::direction(heading) * self.step;
        before
    }
}
