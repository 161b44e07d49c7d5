//! Harness orchestration.
//!
//! Sequential pipeline: acquire the working copy, build the program, discover
//! test scripts, run each one against the built executable, and persist the
//! captured output to dated suite logs.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Serialize;

use crate::build::build_program;
use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::logbook;
use crate::repo::SourceRepo;

/// Outcome of one discovered test suite.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteOutcome {
    /// Suite identifier, the script name with the suffix stripped.
    pub suite: String,
    /// Log file the captured output was appended to.
    pub log_path: PathBuf,
    /// Size of the captured stdout, in bytes.
    pub bytes_captured: usize,
}

/// Summary of a full harness run.
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Unique identifier for this run.
    pub run_id: String,
    /// Per-suite outcomes, in discovery order.
    pub suites: Vec<SuiteOutcome>,
    /// Path of the persisted run manifest.
    pub manifest_path: PathBuf,
}

/// Manifest persisted beside the suite logs at the end of a run.
#[derive(Serialize)]
struct RunManifest<'a> {
    run_id: &'a str,
    config: &'a HarnessConfig,
    suites: &'a [SuiteOutcome],
}

/// Drives a full fetch-build-test cycle.
pub struct Orchestrator {
    config: HarnessConfig,
}

impl Orchestrator {
    /// Creates an orchestrator for the given configuration.
    pub fn new(config: HarnessConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs the full pipeline.
    pub fn run(&self) -> Result<RunReport> {
        let run_id = uuid::Uuid::new_v4().to_string();
        tracing::info!(run_id = %run_id, url = %self.config.remote_url, "starting harness run");

        let repo = SourceRepo::acquire(&self.config)?;
        repo.checkout_mainline(&self.config.mainline_branch)?;
        build_program(&self.config, &repo)?;

        let scripts = self.discover_scripts()?;
        println!("Found #{} Test scripts. Launching them...", scripts.len());

        let executable = self.config.executable_path();
        let mut suites = Vec::with_capacity(scripts.len());
        for script in &scripts {
            suites.push(self.run_suite(script, &executable)?);
        }

        let manifest_path = self.write_manifest(&run_id, &suites)?;

        tracing::info!(run_id = %run_id, suites = suites.len(), "harness run complete");
        Ok(RunReport {
            run_id,
            suites,
            manifest_path,
        })
    }

    /// Lists the tests directory and selects entries carrying the configured
    /// script suffix, sorted by name for a stable run order.
    fn discover_scripts(&self) -> Result<Vec<PathBuf>> {
        let tests_path = self.config.tests_path();
        let mut scripts = Vec::new();

        for entry in std::fs::read_dir(&tests_path)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(&self.config.script_suffix))
            {
                scripts.push(path);
            }
        }

        scripts.sort();
        tracing::info!(dir = ?tests_path, count = scripts.len(), "discovered test scripts");
        Ok(scripts)
    }

    /// Suite identifier for a script: its file name with the suffix stripped.
    fn suite_name(&self, script: &Path) -> String {
        let name = script
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        name.strip_suffix(&self.config.script_suffix)
            .unwrap_or(name)
            .to_string()
    }

    /// Runs one test script against the executable, capturing its stdout,
    /// echoing it, and appending it to the suite's dated log.
    fn run_suite(&self, script: &Path, executable: &Path) -> Result<SuiteOutcome> {
        let suite = self.suite_name(script);
        tracing::info!(suite = %suite, script = ?script, "launching test script");

        let mut command = match &self.config.interpreter {
            Some(interpreter) => {
                let mut cmd = Command::new(interpreter);
                cmd.arg(script);
                cmd
            }
            None => Command::new(script),
        };

        // Stdout is captured for the log; stderr stays on the terminal.
        let child = command
            .arg(executable)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| Error::Launch {
                program: script.display().to_string(),
                source: e,
            })?;

        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        print!("{}", stdout);

        let log_path = logbook::append_entry(&self.config.log_path(), &suite, &stdout)?;

        Ok(SuiteOutcome {
            suite,
            log_path,
            bytes_captured: stdout.len(),
        })
    }

    /// Persists the resolved config and per-suite outcomes as pretty JSON.
    fn write_manifest(&self, run_id: &str, suites: &[SuiteOutcome]) -> Result<PathBuf> {
        let manifest = RunManifest {
            run_id,
            config: &self.config,
            suites,
        };

        let json = serde_json::to_string_pretty(&manifest)
            .map_err(|e| Error::Config(format!("failed to serialize run manifest: {}", e)))?;

        let log_dir = self.config.log_path();
        std::fs::create_dir_all(&log_dir)?;
        let path = log_dir.join(format!("run_{}.json", &run_id[..8]));
        std::fs::write(&path, json)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_with_checkout(base: &TempDir) -> HarnessConfig {
        let config = HarnessConfig {
            local_dir: "program".to_string(),
            ..Default::default()
        }
        .with_base_dir(base.path());

        std::fs::create_dir_all(config.tests_path()).unwrap();
        config
    }

    #[test]
    fn discovery_selects_suffix_matches_sorted() {
        let base = TempDir::new().unwrap();
        let config = config_with_checkout(&base);
        let tests = config.tests_path();

        std::fs::write(tests.join("beta_test.py"), "").unwrap();
        std::fs::write(tests.join("alpha_test.py"), "").unwrap();
        std::fs::write(tests.join("notes.txt"), "").unwrap();

        let orchestrator = Orchestrator::new(config);
        let scripts = orchestrator.discover_scripts().unwrap();

        let names: Vec<_> = scripts
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["alpha_test.py", "beta_test.py"]);
    }

    #[test]
    fn discovery_ignores_directories_with_matching_names() {
        let base = TempDir::new().unwrap();
        let config = config_with_checkout(&base);

        std::fs::create_dir(config.tests_path().join("helpers.py")).unwrap();

        let orchestrator = Orchestrator::new(config);
        assert!(orchestrator.discover_scripts().unwrap().is_empty());
    }

    #[test]
    fn discovery_fails_on_missing_tests_dir() {
        let base = TempDir::new().unwrap();
        let config = HarnessConfig::default().with_base_dir(base.path());

        let orchestrator = Orchestrator::new(config);
        assert!(matches!(
            orchestrator.discover_scripts(),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn suite_name_strips_configured_suffix() {
        let base = TempDir::new().unwrap();
        let orchestrator = Orchestrator::new(config_with_checkout(&base));

        let name = orchestrator.suite_name(Path::new("/x/tests/NumberPrinter_test.py"));
        assert_eq!(name, "NumberPrinter_test");
    }

    #[cfg(unix)]
    #[test]
    fn run_suite_captures_and_logs_stdout() {
        let base = TempDir::new().unwrap();
        let mut config = config_with_checkout(&base);
        config.interpreter = Some("sh".to_string());
        config.script_suffix = ".sh".to_string();

        let script = config.tests_path().join("echo_test.sh");
        std::fs::write(&script, "echo \"target: $1\"\n").unwrap();

        let orchestrator = Orchestrator::new(config);
        let outcome = orchestrator
            .run_suite(&script, Path::new("program/program"))
            .unwrap();

        assert_eq!(outcome.suite, "echo_test");
        let logged = std::fs::read_to_string(&outcome.log_path).unwrap();
        assert!(logged.contains("target: program/program"));
        assert!(logged.contains("Test executed at "));
    }

    #[test]
    fn manifest_records_config_and_suites() {
        let base = TempDir::new().unwrap();
        let orchestrator = Orchestrator::new(config_with_checkout(&base));

        let suites = vec![SuiteOutcome {
            suite: "demo".to_string(),
            log_path: base.path().join("demo_07082026.txt"),
            bytes_captured: 42,
        }];

        let path = orchestrator
            .write_manifest("0123456789abcdef", &suites)
            .unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"run_id\": \"0123456789abcdef\""));
        assert!(json.contains("\"suite\": \"demo\""));
        assert!(json.contains("\"local_dir\": \"program\""));
    }
}
