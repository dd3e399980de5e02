//! Error types.
//!
//! Grammar construction is the only fallible operation in the public
//! contract. Recognition is total over its input domain: any finite token
//! sequence yields a `true`/`false` verdict, never an error.

use compact_str::CompactString;
use thiserror::Error;

/// A production set that does not describe a usable grammar.
///
/// Returned by [`GrammarBuilder::build`](crate::GrammarBuilder::build). A
/// [`Grammar`](crate::Grammar) value can only exist for a well-formed
/// production set, so the recognizer never re-checks these conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedGrammarError {
    /// A right-hand side references a nonterminal that is never defined as a
    /// left-hand side.
    #[error(
        "nonterminal `{referenced}` is used in a production of `{lhs}` but has no defining production"
    )]
    UndefinedNonterminal {
        /// The dangling nonterminal name.
        referenced: CompactString,
        /// The left-hand side of the production that references it.
        lhs: CompactString,
    },

    /// The start symbol has no defining production.
    #[error("start symbol `{start}` has no defining production")]
    UndefinedStartSymbol {
        /// The undefined start symbol name.
        start: CompactString,
    },

    /// No start symbol was set on the builder.
    #[error("no start symbol was set")]
    MissingStartSymbol,

    /// The production list is empty.
    #[error("grammar has no productions")]
    EmptyGrammar,
}
