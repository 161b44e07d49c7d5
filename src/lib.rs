//! Printer harness - build-and-test orchestration for the NumberPrinter
//! endianness formatter.
//!
//! This library fetches the program's source tree, builds it with an external
//! build tool, runs discovered test scripts against the produced executable,
//! and persists their output to dated suite logs. It also ships the
//! conformance runner itself: a fixed table of black-box cases covering the
//! formatter's input-validation and output contract.

pub mod build;
pub mod cases;
pub mod config;
pub mod conformance;
pub mod error;
pub mod logbook;
pub mod orchestrator;
pub mod repo;

pub use error::{Error, Result};

pub use cases::{expected_success_stdout, TestCase, CASES};
pub use config::{HarnessConfig, Validate, ValidationResult};
pub use conformance::{
    render_report, run_case, run_cases, signed_exit_code, CaseOutcome, RunStats,
};
pub use orchestrator::{Orchestrator, RunReport, SuiteOutcome};
pub use repo::SourceRepo;
