//! Grammar definitions and the loaded L-System record.

use crate::expander::Expander;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Per-character replacement rules. Characters without a rule rewrite to themselves.
pub type Rules = HashMap<char, String>;

/// The immutable definition of one fractal figure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Grammar {
    /// The starting string (order 0).
    pub axiom: String,

    /// Replacement rules applied at every rewriting step.
    pub rules: Rules,

    /// Number of discrete turn steps in a full circle.
    pub angle_divisor: i64,
}

impl Grammar {
    pub fn new(axiom: impl Into<String>, rules: Rules, angle_divisor: i64) -> Self {
        Self {
            axiom: axiom.into(),
            rules,
            angle_divisor,
        }
    }

    /// Returns the replacement for `c`, or `None` if `c` rewrites to itself.
    pub fn rule(&self, c: char) -> Option<&str> {
        self.rules.get(&c).map(String::as_str)
    }
}

/// A named grammar together with its expansion caches and current order.
#[derive(Debug)]
pub struct LSystem {
    pub title: String,

    /// Trailing `;` comments collected from the definition block.
    pub comments: Vec<String>,

    pub grammar: Arc<Grammar>,

    pub expander: Expander,

    /// Number of rewriting steps to display. Never negative.
    pub order: usize,
}

impl LSystem {
    /// Order a freshly loaded system is displayed at.
    pub const DEFAULT_ORDER: usize = 2;

    pub fn new(title: impl Into<String>, grammar: Grammar) -> Self {
        let grammar = Arc::new(grammar);
        Self {
            title: title.into(),
            comments: Vec::new(),
            expander: Expander::new(Arc::clone(&grammar)),
            grammar,
            order: Self::DEFAULT_ORDER,
        }
    }
}
