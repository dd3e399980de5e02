//! Earley-style chart recognition.

use crate::grammar::{Grammar, Symbol};
use crate::parser::chart::{Chart, Item};
use crate::tokenize::tokenize;

/// Decide whether `tokens` can be derived from the grammar's start symbol.
///
/// Pure function of its arguments: no state survives the call, identical
/// inputs always yield identical verdicts, and no input can make it panic
/// or fail. The empty sequence is accepted exactly when the start symbol is
/// nullable.
///
/// Runtime is polynomial in token count and grammar size for any grammar
/// the builder accepts, including ambiguous, epsilon-heavy, and recursive
/// ones.
#[must_use]
pub fn recognize<S: AsRef<str>>(grammar: &Grammar, tokens: &[S]) -> bool {
    let n = tokens.len();
    let start = grammar.start_spur();
    if n == 0 {
        return grammar.spur_nullable(start);
    }

    let mut chart = Chart::new(n);
    for alt in 0..grammar.alternatives(start).len() {
        chart.add(0, Item::new(start, alt, 0, 0));
    }

    for i in 0..=n {
        // Iterate the item set at this position to a fixed point: epsilon
        // completions and nullable predictions land at the position they
        // were produced at, so one pass is not enough.
        let mut changed = true;
        while changed {
            changed = false;
            let items: Vec<Item> = chart.get(i).iter().copied().collect();
            for item in items {
                let rhs = &grammar.alternatives(item.lhs)[item.alt].rhs;
                match rhs.get(item.dot) {
                    Some(Symbol::Terminal(literal)) => {
                        // Scanner: a terminal consumes exactly one token.
                        if i < n && tokens[i].as_ref() == literal.as_str() {
                            chart.add(i + 1, item.advanced());
                        }
                    }
                    Some(Symbol::Nonterminal(name)) => {
                        if let Some(next) = grammar.nonterminal_spur(name) {
                            // Predictor: seed every alternative of the
                            // expected nonterminal at this position.
                            for alt in 0..grammar.alternatives(next).len() {
                                if chart.add(i, Item::new(next, alt, 0, i)) {
                                    changed = true;
                                }
                            }
                            // A nullable nonterminal may also derive nothing
                            // here, so the waiting item advances in place.
                            if grammar.spur_nullable(next) && chart.add(i, item.advanced()) {
                                changed = true;
                            }
                        }
                    }
                    None => {
                        // Completer: this item spans item.start..i, so every
                        // state at item.start waiting on its nonterminal
                        // advances to the current position.
                        let waiting: Vec<Item> = chart.get(item.start).iter().copied().collect();
                        for parent in waiting {
                            let parent_rhs = &grammar.alternatives(parent.lhs)[parent.alt].rhs;
                            if let Some(Symbol::Nonterminal(name)) = parent_rhs.get(parent.dot)
                                && grammar.nonterminal_spur(name) == Some(item.lhs)
                                && chart.add(i, parent.advanced())
                            {
                                changed = true;
                            }
                        }
                    }
                }
            }
        }
    }

    chart.get(n).iter().any(|item| {
        item.lhs == start
            && item.start == 0
            && item.dot == grammar.alternatives(start)[item.alt].rhs.len()
    })
}

/// Whitespace-splitting convenience wrapper over [`recognize`].
#[must_use]
pub fn recognize_str(grammar: &Grammar, input: &str) -> bool {
    let tokens = tokenize(input);
    recognize(grammar, &tokens)
}
