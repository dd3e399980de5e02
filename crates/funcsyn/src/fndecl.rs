//! The fixed function-declaration grammar.
//!
//! Encodes the simplified declaration syntax this crate exists to check:
//!
//! ```text
//! F            -> Identifier '(' ParamsList ')' Body
//! Identifier   -> DataType 'name' | 'name'
//! ParamsList   -> Params | ε
//! Params       -> Identifier ParamsTail
//! ParamsTail   -> ',' Identifier ParamsTail | ε
//! Body         -> '{' BodyContent '}'
//! BodyContent  -> 'content' ReturnTail | ReturnStatement | ε
//! ReturnTail   -> ReturnStatement | ε
//! ReturnStatement -> 'return' 'value'
//! DataType     -> 'int' | 'double' | 'String' | 'bool'
//! ```
//!
//! The placeholder terminals `name`, `content`, and `value` stand for an
//! identifier, a body-content marker, and a return value. `ReturnTail` is
//! deliberately nullable: a body of `{ content }` is accepted.

use crate::grammar::{Grammar, GrammarBuilder, Symbol};
use crate::parser;
use once_cell::sync::Lazy;

/// Declarations the grammar accepts, from the conformance suite.
pub const VALID_DECLARATIONS: &[&str] = &[
    "int name ( int name ) { return value }",
    "int name ( ) { content return value }",
    "double name ( ) { content return value }",
    "String name ( int name , double name ) { return value }",
    "bool name ( String name ) { return value }",
];

/// Declarations the grammar rejects, from the conformance suite.
pub const INVALID_DECLARATIONS: &[&str] = &[
    "( int name ) { }",
    "name { content return value }",
    "int name ( int name ) { int name ( String char ) { } }",
    "name ( int name ) { return }{}",
    "int name ( int name ) content return value",
    "double name ( String name , int name )",
];

static GRAMMAR: Lazy<Grammar> = Lazy::new(grammar);

fn t(literal: &str) -> Symbol {
    Symbol::terminal(literal)
}

fn nt(name: &str) -> Symbol {
    Symbol::nonterminal(name)
}

/// Build the function-declaration grammar.
///
/// The production table is fixed; construction cannot fail.
#[must_use]
pub fn grammar() -> Grammar {
    GrammarBuilder::new()
        .start_symbol("F")
        .production("F", [nt("Identifier"), t("("), nt("ParamsList"), t(")"), nt("Body")])
        .production("Identifier", [nt("DataType"), t("name")])
        .production("Identifier", [t("name")])
        .production("ParamsList", [nt("Params")])
        .production("ParamsList", [])
        .production("Params", [nt("Identifier"), nt("ParamsTail")])
        .production("ParamsTail", [t(","), nt("Identifier"), nt("ParamsTail")])
        .production("ParamsTail", [])
        .production("Body", [t("{"), nt("BodyContent"), t("}")])
        .production("BodyContent", [t("content"), nt("ReturnTail")])
        .production("BodyContent", [nt("ReturnStatement")])
        .production("BodyContent", [])
        .production("ReturnTail", [nt("ReturnStatement")])
        .production("ReturnTail", [])
        .production("ReturnStatement", [t("return"), t("value")])
        .production("DataType", [t("int")])
        .production("DataType", [t("double")])
        .production("DataType", [t("String")])
        .production("DataType", [t("bool")])
        .build()
        .expect("function-declaration grammar is well-formed")
}

/// Whether `input`, tokenized on whitespace, is a well-formed function
/// declaration.
///
/// Uses a process-wide grammar built once on first use and shared read-only
/// by every call.
#[must_use]
pub fn is_syntactically_correct(input: &str) -> bool {
    parser::recognize_str(&GRAMMAR, input)
}
