//! Memoized rewriting of a [`Grammar`].

use crate::error::{LSystemError, Result};
use crate::grammar::Grammar;
use crate::tokenizer::tokenize;
use crate::turtle::DrawOp;
use std::collections::HashMap;
use std::sync::Arc;

/// Expands a grammar step by step, caching every string and operation stream.
///
/// Caches only ever grow: the grammar is immutable, so a computed order never
/// becomes stale. Expanding order `n` reuses the cached order `n - 1`.
#[derive(Debug)]
pub struct Expander {
    grammar: Arc<Grammar>,
    /// `expansions[n]` is the string after `n` steps; entry 0 is the axiom.
    expansions: Vec<String>,
    draw_ops: HashMap<usize, Vec<DrawOp>>,
}

impl Expander {
    pub fn new(grammar: Arc<Grammar>) -> Self {
        let axiom = grammar.axiom.clone();
        Self {
            grammar,
            expansions: vec![axiom],
            draw_ops: HashMap::new(),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Number of orders whose strings are currently cached.
    pub fn cached_orders(&self) -> usize {
        self.expansions.len()
    }

    /// Returns the string after `n` rewriting steps.
    ///
    /// # Errors
    ///
    /// [`LSystemError::InvalidOrder`] if `n` is negative.
    pub fn get_str(&mut self, n: i64) -> Result<&str> {
        let n = check_order(n)?;

        while self.expansions.len() <= n {
            let next = {
                let prev = self.expansions.last().map(String::as_str).unwrap_or_default();
                rewrite(&self.grammar, prev)
            };
            log::debug!(
                "expanded order {} ({} chars)",
                self.expansions.len(),
                next.len()
            );
            self.expansions.push(next);
        }

        Ok(&self.expansions[n])
    }

    /// Returns the tokenized operation stream for order `n`.
    ///
    /// # Errors
    ///
    /// [`LSystemError::InvalidOrder`] if `n` is negative, or
    /// [`LSystemError::MalformedNumber`] if the expanded string does not tokenize.
    /// A failed tokenization is not cached.
    pub fn get_draw_ops(&mut self, n: i64) -> Result<&[DrawOp]> {
        let order = check_order(n)?;

        if !self.draw_ops.contains_key(&order) {
            let ops = tokenize(self.get_str(n)?)?;
            log::debug!("tokenized order {} ({} ops)", order, ops.len());
            self.draw_ops.insert(order, ops);
        }

        Ok(self.draw_ops.get(&order).map(Vec::as_slice).unwrap_or_default())
    }
}

fn check_order(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| LSystemError::InvalidOrder { order: n })
}

/// Applies one rewriting step to `input`.
fn rewrite(grammar: &Grammar, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match grammar.rule(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}
