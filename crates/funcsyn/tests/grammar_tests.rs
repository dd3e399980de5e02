//! Tests for grammar construction and validation.

use funcsyn::{GrammarBuilder, MalformedGrammarError, Symbol, fndecl};

fn t(literal: &str) -> Symbol {
    Symbol::terminal(literal)
}

fn nt(name: &str) -> Symbol {
    Symbol::nonterminal(name)
}

#[test]
fn function_declaration_grammar_builds() {
    let grammar = fndecl::grammar();
    assert_eq!(grammar.start_symbol(), "F");
    assert!(grammar.is_defined("Body"));
    assert!(!grammar.is_defined("name"));
}

#[test]
fn productions_for_returns_alternatives_in_order() {
    let grammar = fndecl::grammar();

    assert_eq!(grammar.productions_for("Identifier").len(), 2);
    assert_eq!(grammar.productions_for("DataType").len(), 4);
    assert!(grammar.productions_for("NoSuchRule").is_empty());

    let identifier = grammar.productions_for("Identifier");
    assert_eq!(identifier[0].rhs.len(), 2);
    assert_eq!(identifier[1].rhs.len(), 1);
}

#[test]
fn dangling_nonterminal_fails_construction() {
    let result = GrammarBuilder::new()
        .start_symbol("F")
        .production("F", [nt("Identifier"), t("("), t(")")])
        .build();

    assert_eq!(
        result.err(),
        Some(MalformedGrammarError::UndefinedNonterminal {
            referenced: "Identifier".into(),
            lhs: "F".into(),
        })
    );
}

#[test]
fn undefined_start_symbol_fails_construction() {
    let result = GrammarBuilder::new()
        .start_symbol("Program")
        .production("F", [t("name")])
        .build();

    assert_eq!(
        result.err(),
        Some(MalformedGrammarError::UndefinedStartSymbol {
            start: "Program".into(),
        })
    );
}

#[test]
fn empty_production_list_fails_construction() {
    let result = GrammarBuilder::new().start_symbol("F").build();
    assert_eq!(result.err(), Some(MalformedGrammarError::EmptyGrammar));
}

#[test]
fn construction_errors_have_descriptive_messages() {
    let error = GrammarBuilder::new()
        .start_symbol("S")
        .production("S", [nt("Ghost")])
        .build()
        .unwrap_err();

    let message = error.to_string();
    assert!(message.contains("Ghost"));
    assert!(message.contains("no defining production"));
}

#[test]
fn nullable_set_matches_the_declaration_grammar() {
    let grammar = fndecl::grammar();

    for nullable in ["ParamsList", "ParamsTail", "BodyContent", "ReturnTail"] {
        assert!(grammar.is_nullable(nullable), "{nullable} should be nullable");
    }
    for solid in ["F", "Identifier", "Params", "Body", "ReturnStatement", "DataType"] {
        assert!(!grammar.is_nullable(solid), "{solid} should not be nullable");
    }
}

#[test]
fn nullability_reaches_through_chains() {
    // A -> B C; B -> ε; C -> B  makes all three nullable.
    let grammar = GrammarBuilder::new()
        .start_symbol("A")
        .production("A", [nt("B"), nt("C")])
        .production("B", [])
        .production("C", [nt("B")])
        .build()
        .unwrap();

    assert!(grammar.is_nullable("A"));
    assert!(grammar.is_nullable("B"));
    assert!(grammar.is_nullable("C"));
}

#[test]
fn is_terminal_query() {
    let grammar = fndecl::grammar();
    assert!(grammar.is_terminal(&t("return")));
    assert!(!grammar.is_terminal(&nt("ReturnStatement")));
}
