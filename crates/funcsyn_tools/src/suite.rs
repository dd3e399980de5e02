//! Built-in conformance suite runner.

use funcsyn::fndecl::{self, INVALID_DECLARATIONS, VALID_DECLARATIONS};
use std::thread;
use std::time::Duration;

/// Outcome of one suite run.
pub struct SuiteReport {
    pub cases: usize,
    pub mismatches: usize,
}

impl SuiteReport {
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.mismatches == 0
    }
}

/// Run both fixed declaration lists, printing a labelled verdict per case.
///
/// `delay` pauses between cases when nonzero, for paced demo output.
#[must_use]
pub fn run(delay: Duration) -> SuiteReport {
    let mut report = SuiteReport {
        cases: 0,
        mismatches: 0,
    };

    println!("Tests with valid input");
    run_cases(VALID_DECLARATIONS, true, delay, &mut report);
    println!();
    println!("Tests with invalid input");
    run_cases(INVALID_DECLARATIONS, false, delay, &mut report);

    report
}

fn run_cases(cases: &[&str], expected: bool, delay: Duration, report: &mut SuiteReport) {
    for (index, declaration) in cases.iter().enumerate() {
        let verdict = fndecl::is_syntactically_correct(declaration);
        let label = if verdict == expected { "ok" } else { "MISMATCH" };
        println!("  case {:>2}: {label:<8} {declaration}", index + 1);

        report.cases += 1;
        if verdict != expected {
            report.mismatches += 1;
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}
