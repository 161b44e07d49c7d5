//! Printer harness CLI
//!
//! Fetches, builds, and tests the program under test. Takes no arguments:
//! behavior is controlled by `harness.toml` in the invocation directory,
//! falling back to built-in defaults.

use printer_harness::config::{HarnessConfig, Validate};
use printer_harness::orchestrator::Orchestrator;

const CONFIG_FILE: &str = "harness.toml";

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match HarnessConfig::load_or_default(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {}: {}", CONFIG_FILE, e);
            std::process::exit(1);
        }
    };

    match config.validate().into_result() {
        Ok(warnings) => {
            for warning in warnings {
                tracing::warn!("{}", warning);
            }
        }
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    }

    match Orchestrator::new(config).run() {
        Ok(report) => {
            println!();
            println!("Run {} complete: {} suite(s) logged", report.run_id, report.suites.len());
            for suite in &report.suites {
                println!("  {} -> {}", suite.suite, suite.log_path.display());
            }
        }
        Err(e) => {
            eprintln!("Harness run failed: {}", e);
            std::process::exit(1);
        }
    }
}
