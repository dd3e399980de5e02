//! # funcsyn
//!
//! A chart-based recognizer for context-free grammars, bundled with a fixed
//! grammar for simplified function declarations.
//!
//! ## Overview
//!
//! The library has two layers:
//!
//! - **Grammar model**: an immutable, declarative representation of a
//!   context-free grammar (a start symbol plus productions over terminal and
//!   nonterminal symbols, including epsilon productions), validated at
//!   construction time.
//! - **Recognizer**: a pure membership test deciding whether a token
//!   sequence can be derived from the grammar's start symbol, using an
//!   Earley-style chart so that ambiguous, epsilon-heavy, and recursive
//!   grammars terminate in polynomial time.
//!
//! Recognition never fails: an unparseable token sequence is an ordinary
//! `false`, and the only error in the public contract is
//! [`MalformedGrammarError`] at grammar construction time.
//!
//! ## Quick Start
//!
//! ```rust
//! use funcsyn::{GrammarBuilder, Symbol, recognize_str};
//!
//! let grammar = GrammarBuilder::new()
//!     .start_symbol("List")
//!     .production("List", [Symbol::terminal("item"), Symbol::nonterminal("List")])
//!     .production("List", [])
//!     .build()?;
//!
//! assert!(recognize_str(&grammar, "item item item"));
//! assert!(recognize_str(&grammar, ""));
//! assert!(!recognize_str(&grammar, "item other"));
//! # Ok::<(), funcsyn::MalformedGrammarError>(())
//! ```
//!
//! The bundled function-declaration grammar lives in [`fndecl`]:
//!
//! ```rust
//! assert!(funcsyn::fndecl::is_syntactically_correct(
//!     "int name ( int name ) { return value }"
//! ));
//! ```
//!
//! ## Modules
//!
//! - [`grammar`] - Grammar definition and validation
//! - [`parser`] - Chart-based recognition
//! - [`tokenize`] - Whitespace tokenization
//! - [`fndecl`] - The fixed function-declaration grammar
//! - [`error`] - Error types

pub mod error;
pub mod fndecl;
pub mod grammar;
pub mod parser;
pub mod tokenize;

// Re-export commonly used types
pub use error::MalformedGrammarError;
pub use grammar::{Grammar, GrammarBuilder, Production, Symbol};
pub use parser::{recognize, recognize_str};
pub use tokenize::tokenize;
