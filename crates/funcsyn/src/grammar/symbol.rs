//! Grammar symbols.

use compact_str::CompactString;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbol on the right-hand side of a production.
///
/// Terminals match exactly one input token by literal string equality.
/// Nonterminals refer to the left-hand side of one or more productions in
/// the same grammar. Symbols are immutable values; equality is by tag plus
/// payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Symbol {
    /// A literal token.
    Terminal(CompactString),
    /// A reference to a nonterminal.
    Nonterminal(CompactString),
}

impl Symbol {
    /// Create a terminal symbol.
    #[must_use]
    pub fn terminal(literal: impl Into<CompactString>) -> Self {
        Self::Terminal(literal.into())
    }

    /// Create a nonterminal symbol.
    #[must_use]
    pub fn nonterminal(name: impl Into<CompactString>) -> Self {
        Self::Nonterminal(name.into())
    }

    /// The symbol's payload: the literal for terminals, the name for
    /// nonterminals.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Terminal(literal) => literal,
            Self::Nonterminal(name) => name,
        }
    }

    /// Whether this is a [`Symbol::Terminal`].
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal(_))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Terminal(literal) => write!(f, "'{literal}'"),
            Self::Nonterminal(name) => f.write_str(name),
        }
    }
}
