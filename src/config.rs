//! Harness configuration.
//!
//! Every knob has a default so the orchestrator runs with no arguments and
//! no config file. All paths are carried explicitly through this struct;
//! nothing in the harness mutates the process working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for a harness run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Git URL of the program under test.
    #[serde(default = "default_remote_url")]
    pub remote_url: String,

    /// Checkout directory name. This is also the name of the executable the
    /// build produces in the checkout root.
    #[serde(default = "default_local_dir")]
    pub local_dir: String,

    /// Branch checked out (discarding local changes) before building.
    #[serde(default = "default_mainline_branch")]
    pub mainline_branch: String,

    /// External build command, invoked as `<build_tool> <local_dir>`.
    #[serde(default = "default_build_tool")]
    pub build_tool: String,

    /// Program used to launch discovered test scripts. When `None`, scripts
    /// are spawned directly.
    #[serde(default = "default_interpreter")]
    pub interpreter: Option<String>,

    /// Directory inside the checkout searched for test scripts.
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    /// Filename suffix selecting test scripts.
    #[serde(default = "default_script_suffix")]
    pub script_suffix: String,

    /// Directory the checkout lives in.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Directory log files are written to. Defaults to `base_dir`, one level
    /// above the working tree.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_remote_url() -> String {
    "https://github.com/mithrandir89/NumberPrinter.git".to_string()
}

fn default_local_dir() -> String {
    "NumberPrinter".to_string()
}

fn default_mainline_branch() -> String {
    "master".to_string()
}

fn default_build_tool() -> String {
    "make".to_string()
}

fn default_interpreter() -> Option<String> {
    Some("python3".to_string())
}

fn default_tests_dir() -> String {
    "tests".to_string()
}

fn default_script_suffix() -> String {
    ".py".to_string()
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            remote_url: default_remote_url(),
            local_dir: default_local_dir(),
            mainline_branch: default_mainline_branch(),
            build_tool: default_build_tool(),
            interpreter: default_interpreter(),
            tests_dir: default_tests_dir(),
            script_suffix: default_script_suffix(),
            base_dir: default_base_dir(),
            log_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Loads a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;

        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, falling back to defaults otherwise.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Sets the base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets the log directory.
    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    /// Path of the local checkout.
    pub fn checkout_path(&self) -> PathBuf {
        self.base_dir.join(&self.local_dir)
    }

    /// Path of the executable produced by the build, in the checkout root.
    pub fn executable_path(&self) -> PathBuf {
        self.checkout_path().join(&self.local_dir)
    }

    /// Directory searched for test scripts.
    pub fn tests_path(&self) -> PathBuf {
        self.checkout_path().join(&self.tests_dir)
    }

    /// Directory log files are written to.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| self.base_dir.clone())
    }
}

/// Validation result containing all found issues.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// List of validation errors (fatal).
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal).
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    /// Converts to a Result, failing if there are errors.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.is_valid() {
            Ok(self.warnings)
        } else {
            Err(Error::Config(self.errors.join("; ")))
        }
    }
}

/// Trait for validatable configuration types.
pub trait Validate {
    /// Validates the configuration and returns any issues found.
    fn validate(&self) -> ValidationResult;
}

impl Validate for HarnessConfig {
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.remote_url.trim().is_empty() {
            result.add_error("remote_url cannot be empty");
        }

        if self.local_dir.trim().is_empty()
            || self.local_dir.contains('/')
            || self.local_dir.contains('\\')
        {
            result.add_error("local_dir must be a plain directory name");
        }

        if self.mainline_branch.trim().is_empty() {
            result.add_error("mainline_branch cannot be empty");
        }

        if self.build_tool.trim().is_empty() {
            result.add_error("build_tool cannot be empty");
        }

        if !self.script_suffix.starts_with('.') {
            result.add_warning(format!(
                "script_suffix '{}' does not start with '.', matching on raw suffix",
                self.script_suffix
            ));
        }

        if let Some(interpreter) = &self.interpreter {
            if interpreter.trim().is_empty() {
                result.add_error("interpreter, when set, cannot be empty");
            }
        }

        result
    }
}
