//! Conformance runner CLI
//!
//! Runs the built-in case table against a target executable. Takes exactly
//! one argument: the path of the program under test. Case mismatches are
//! reported in the summary and never affect this process's exit status;
//! only a failure to launch the target is fatal.

use std::path::Path;

use printer_harness::cases::CASES;
use printer_harness::conformance::{render_report, run_cases};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Error: Expected single argument containing path of the program under test");
        std::process::exit(1);
    }

    let target = Path::new(&args[1]);

    println!(
        "conformance is going to run a total of {} TestCases...",
        CASES.len()
    );

    match run_cases(target) {
        Ok(outcomes) => {
            print!("{}", render_report(&outcomes));
        }
        Err(e) => {
            eprintln!("Failed to run target: {}", e);
            std::process::exit(1);
        }
    }
}
