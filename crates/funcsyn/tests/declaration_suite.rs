//! The fixed conformance suite: every declaration in the two built-in
//! lists must keep its expected verdict.

use funcsyn::fndecl::{self, INVALID_DECLARATIONS, VALID_DECLARATIONS};

#[test]
fn valid_declarations_are_accepted() {
    for declaration in VALID_DECLARATIONS {
        assert!(
            fndecl::is_syntactically_correct(declaration),
            "expected valid: {declaration}"
        );
    }
}

#[test]
fn invalid_declarations_are_rejected() {
    for declaration in INVALID_DECLARATIONS {
        assert!(
            !fndecl::is_syntactically_correct(declaration),
            "expected invalid: {declaration}"
        );
    }
}

#[test]
fn suite_verdicts_are_stable_across_repeated_runs() {
    for _ in 0..3 {
        for declaration in VALID_DECLARATIONS {
            assert!(fndecl::is_syntactically_correct(declaration));
        }
        for declaration in INVALID_DECLARATIONS {
            assert!(!fndecl::is_syntactically_correct(declaration));
        }
    }
}

#[test]
fn the_two_lists_do_not_overlap() {
    for declaration in VALID_DECLARATIONS {
        assert!(!INVALID_DECLARATIONS.contains(declaration));
    }
}
