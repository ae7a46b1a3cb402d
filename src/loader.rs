//! Reader for grammar definition files.
//!
//! ```text
//! Dragon {        ; Heighway dragon
//!   Angle 4
//!   Axiom FX
//!   X=X+YF+
//!   Y=-FX-Y
//! }
//! ```
//!
//! Anything after a `;` is a comment. A rule that appears on several lines is
//! the concatenation of those lines. A file may hold any number of blocks.

use crate::error::LoadError;
use crate::grammar::{Grammar, LSystem};
use std::fs;
use std::path::Path;

/// Loads every block from every file in `paths`, in order.
pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<LSystem>, LoadError> {
    let mut systems = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = parse(&source)?;
        log::info!("loaded {} l-systems from {}", parsed.len(), path.display());
        systems.extend(parsed);
    }
    Ok(systems)
}

/// A block that has been opened but not yet closed.
struct OpenBlock {
    title: String,
    comments: Vec<String>,
    grammar: Grammar,
}

impl OpenBlock {
    fn finish(self) -> LSystem {
        let mut system = LSystem::new(self.title, self.grammar);
        system.comments = self.comments;
        system
    }
}

/// Parses all blocks in `source`.
pub fn parse(source: &str) -> Result<Vec<LSystem>, LoadError> {
    let mut systems = Vec::new();
    let mut current: Option<OpenBlock> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let (data, comment) = match raw.split_once(';') {
            Some((data, comment)) => (data.trim(), comment.trim()),
            None => (raw.trim(), ""),
        };

        let Some(block) = current.as_mut() else {
            if let Some(title) = data.strip_suffix('{') {
                current = Some(OpenBlock {
                    title: title.trim().to_string(),
                    comments: comment_list(comment),
                    grammar: Grammar::default(),
                });
            } else if !data.is_empty() {
                return Err(LoadError::OutsideBlock { line });
            }
            continue;
        };

        if let Some(value) = keyword_value(data, "ANGLE") {
            block.grammar.angle_divisor = value.parse().map_err(|_| LoadError::BadAngle {
                line,
                text: value.to_string(),
            })?;
        } else if let Some(value) = keyword_value(data, "AXIOM") {
            block.grammar.axiom = value.to_uppercase();
        } else if let Some((symbol, commands)) = rule_line(data) {
            block
                .grammar
                .rules
                .entry(symbol)
                .or_default()
                .push_str(&commands);
        }

        if !comment.is_empty() {
            block.comments.push(comment.to_string());
        }

        if data == "}"
            && let Some(block) = current.take()
        {
            systems.push(block.finish());
        }
    }

    match current {
        Some(block) => Err(LoadError::Unterminated { title: block.title }),
        None => Ok(systems),
    }
}

fn comment_list(comment: &str) -> Vec<String> {
    if comment.is_empty() {
        Vec::new()
    } else {
        vec![comment.to_string()]
    }
}

/// Returns the text after `keyword` if `data` starts with it, ignoring case.
fn keyword_value<'a>(data: &'a str, keyword: &str) -> Option<&'a str> {
    let head = data.get(..keyword.len())?;
    head.eq_ignore_ascii_case(keyword)
        .then(|| data[keyword.len()..].trim())
}

/// Splits `X=commands` into the uppercased symbol and replacement.
fn rule_line(data: &str) -> Option<(char, String)> {
    let upper = data.to_uppercase();
    let mut chars = upper.chars();
    let symbol = chars.next()?;
    (chars.next()? == '=').then(|| (symbol, chars.collect()))
}
