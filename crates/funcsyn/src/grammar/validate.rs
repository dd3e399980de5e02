//! Construction-time grammar validation.

use crate::error::MalformedGrammarError;
use crate::grammar::{Production, Symbol};
use hashbrown::HashSet;

/// Validate a production set before a grammar is built from it.
///
/// # Errors
///
/// Returns an error if the production list is empty, the start symbol has no
/// defining production, or any right-hand side references a nonterminal that
/// is never defined as a left-hand side.
pub(crate) fn validate_productions(
    start: &str,
    productions: &[Production],
) -> Result<(), MalformedGrammarError> {
    if productions.is_empty() {
        return Err(MalformedGrammarError::EmptyGrammar);
    }

    let defined: HashSet<&str> = productions
        .iter()
        .map(|production| production.lhs.as_str())
        .collect();

    if !defined.contains(start) {
        return Err(MalformedGrammarError::UndefinedStartSymbol {
            start: start.into(),
        });
    }

    for production in productions {
        for symbol in &production.rhs {
            if let Symbol::Nonterminal(name) = symbol
                && !defined.contains(name.as_str())
            {
                return Err(MalformedGrammarError::UndefinedNonterminal {
                    referenced: name.clone(),
                    lhs: production.lhs.clone(),
                });
            }
        }
    }

    Ok(())
}
