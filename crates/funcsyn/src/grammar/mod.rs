//! # Grammar Module
//!
//! Grammar definition and validation for context-free grammars.
//!
//! ## Overview
//!
//! A grammar is a start symbol plus a set of productions, each mapping a
//! nonterminal to an ordered sequence of [`Symbol`]s. An empty right-hand
//! side denotes an epsilon production.
//!
//! Grammars are built through [`GrammarBuilder`] and validated on
//! [`build`](GrammarBuilder::build): every nonterminal referenced on a
//! right-hand side must be defined as a left-hand side, and the start symbol
//! must be defined. A [`Grammar`] value is therefore always internally
//! consistent, and it is immutable after construction, which is what lets
//! the recognizer reuse its precomputed epsilon-closure across calls.
//!
//! ## Usage
//!
//! ```rust
//! use funcsyn::grammar::{GrammarBuilder, Symbol};
//!
//! let grammar = GrammarBuilder::new()
//!     .start_symbol("Pair")
//!     .production("Pair", [
//!         Symbol::terminal("("),
//!         Symbol::nonterminal("Inner"),
//!         Symbol::terminal(")"),
//!     ])
//!     .production("Inner", [Symbol::terminal("x")])
//!     .production("Inner", [])
//!     .build()?;
//!
//! assert_eq!(grammar.start_symbol(), "Pair");
//! assert_eq!(grammar.productions_for("Inner").len(), 2);
//! assert!(grammar.is_nullable("Inner"));
//! assert!(!grammar.is_nullable("Pair"));
//! # Ok::<(), funcsyn::MalformedGrammarError>(())
//! ```

mod analysis;
pub mod builder;
pub mod symbol;
mod validate;

pub use builder::{Grammar, GrammarBuilder, Production};
pub use symbol::Symbol;

pub(crate) use analysis::NullableSet;
