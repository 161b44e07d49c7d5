//! Conformance test execution and reporting.
//!
//! Runs the built-in case table against a target executable, one blocking
//! subprocess per case, and compares exit code and stdout exactly. Mismatches
//! are data, not errors: they never abort the run.

use std::fmt::Write as _;
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::cases::{TestCase, CASES};
use crate::error::{Error, Result};

/// Outcome of running one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Index of the case in the table.
    pub index: usize,
    /// Exit code of the target, reinterpreted as signed 32-bit.
    pub actual_exit_code: i32,
    /// Captured stdout of the target.
    pub actual_stdout: String,
    /// Whether both exit code and stdout matched exactly.
    pub passed: bool,
}

/// Aggregated pass/fail statistics for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RunStats {
    /// Computes statistics from a list of outcomes.
    pub fn from_outcomes(outcomes: &[CaseOutcome]) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed).count();
        Self {
            total: outcomes.len(),
            passed,
            failed: outcomes.len() - passed,
        }
    }

    /// Pass percentage over the whole run.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.passed as f64 / self.total as f64
    }
}

/// Reinterprets a raw process exit status as a signed 32-bit value.
///
/// Windows surfaces the full 32-bit exit value as unsigned, so a C program
/// returning -1 arrives as 0xFFFFFFFF; the standard library already folds
/// that back into `i32` space. Unix truncates the exit value to 8 bits, so
/// the same program arrives as 255; sign-extend the byte so -1 round-trips.
pub fn signed_exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        match status.code() {
            Some(code) => code as u8 as i8 as i32,
            // Terminated by a signal; negated signal number, as wait(2)
            // consumers conventionally report it.
            None => status.signal().map(|s| -s).unwrap_or(-1),
        }
    }
    #[cfg(not(unix))]
    {
        status.code().unwrap_or(-1)
    }
}

/// Runs one case against the target, blocking until it exits.
pub fn run_case(target: &Path, index: usize, case: &TestCase) -> Result<CaseOutcome> {
    let output = Command::new(target)
        .arg(case.input)
        .output()
        .map_err(|e| Error::Launch {
            program: target.display().to_string(),
            source: e,
        })?;

    let actual_stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let actual_exit_code = signed_exit_code(output.status);
    let passed = actual_exit_code == case.expected_exit_code
        && actual_stdout == case.expected_stdout;

    tracing::debug!(
        index,
        input = %case.input,
        exit_code = actual_exit_code,
        passed,
        "ran case"
    );

    Ok(CaseOutcome {
        index,
        actual_exit_code,
        actual_stdout,
        passed,
    })
}

/// Runs the full built-in case table against the target, in table order.
pub fn run_cases(target: &Path) -> Result<Vec<CaseOutcome>> {
    let mut outcomes = Vec::with_capacity(CASES.len());

    for (index, case) in CASES.iter().enumerate() {
        outcomes.push(run_case(target, index, case)?);
    }

    Ok(outcomes)
}

/// Renders the post-run summary and per-failure details.
///
/// Expected and actual stdout are rendered in escaped form so whitespace and
/// non-printable differences are visible.
pub fn render_report(outcomes: &[CaseOutcome]) -> String {
    let stats = RunStats::from_outcomes(outcomes);

    let mut report = String::new();
    let _ = writeln!(report, "Stats:");
    let _ = writeln!(report, "Tests Passed: {}", stats.passed);
    let _ = writeln!(report, "Tests Failed: {}", stats.failed);
    let _ = writeln!(report, "Passed Tests Percentage {:.3}%", stats.percentage());

    for outcome in outcomes.iter().filter(|o| !o.passed) {
        let case = &CASES[outcome.index];
        let _ = writeln!(report);
        let _ = writeln!(report, "TestCase #{} failed:", outcome.index);
        let _ = writeln!(
            report,
            "Ret Code - Expected: {}, Received: {}",
            case.expected_exit_code, outcome.actual_exit_code
        );
        let _ = writeln!(
            report,
            "Stdout - Expected: {:?}, Received: {:?}",
            case.expected_stdout, outcome.actual_stdout
        );
    }

    report
}
