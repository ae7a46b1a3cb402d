//! Converts an expanded L-System string into a stream of [`DrawOp`]s.
//!
//! Characters that are not operators are skipped. The six value-carrying
//! operators (`\`, `/`, `@`, `<`, `>`, `C`) are followed by a numeric literal:
//!
//! ```text
//! literal   := modifier* digits? "."? digits?
//! modifier  := "q" | "i"        (case-insensitive)
//! ```
//!
//! `q` takes the square root of the number, then `i` takes its reciprocal,
//! so `@qi4` scales by `0.5`. The reciprocal of zero is a malformed number.

use crate::error::{LSystemError, Result};
use crate::turtle::{DrawOp, OpKind};
use nom::{
    IResult,
    bytes::complete::take_while,
    character::complete::{char, digit0},
    combinator::{map, opt, recognize},
    sequence::{pair, tuple},
};

/// Breaks `input` up into drawing operations.
///
/// The characters of a numeric literal are not rescanned as operators;
/// none of them (digits, `.`, `q`, `i`) appear in the operator table.
///
/// # Errors
///
/// Returns [`LSystemError::MalformedNumber`] if a value-carrying operator is
/// not followed by a parsable number. Tokenization stops at the first such error.
pub fn tokenize(input: &str) -> Result<Vec<DrawOp>> {
    let mut ops = Vec::new();

    for (pos, c) in input.char_indices() {
        let Some(kind) = OpKind::from_char(c) else {
            continue;
        };

        let value = if kind.takes_value() {
            parse_value(input, pos, c)?
        } else {
            0.0
        };
        ops.push(kind.with_value(value));
    }

    Ok(ops)
}

/// The parts of a numeric literal matched after an operator.
#[derive(Debug, PartialEq)]
struct Literal<'a> {
    modifiers: &'a str,
    number: &'a str,
}

fn literal(s: &str) -> IResult<&str, Literal<'_>> {
    let modifiers = take_while(|c: char| matches!(c, 'q' | 'Q' | 'i' | 'I'));
    let number = recognize(tuple((digit0, opt(char('.')), digit0)));
    map(pair(modifiers, number), |(modifiers, number)| Literal {
        modifiers,
        number,
    })(s)
}

/// Matches the longest literal at the start of `s`, possibly with both parts empty.
fn scan_literal(s: &str) -> Literal<'_> {
    match literal(s) {
        Ok((_, lit)) => lit,
        Err(_) => Literal {
            modifiers: "",
            number: "",
        },
    }
}

fn parse_value(input: &str, pos: usize, op: char) -> Result<f32> {
    let rest = &input[pos + op.len_utf8()..];
    let literal = scan_literal(rest);

    let malformed = || LSystemError::MalformedNumber {
        op,
        text: literal.number.to_string(),
        position: pos,
        remaining: rest.to_string(),
    };

    let mut value: f32 = literal.number.parse().map_err(|_| malformed())?;

    let modifiers = literal.modifiers.to_ascii_lowercase();
    if modifiers.contains('q') {
        value = value.sqrt();
    }
    if modifiers.contains('i') {
        if value == 0.0 {
            return Err(malformed());
        }
        value = value.recip();
    }

    Ok(value)
}
