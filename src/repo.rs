//! Working-copy acquisition for the program under test.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};

/// A local working copy of the program under test.
pub struct SourceRepo {
    /// Path to the checkout.
    path: PathBuf,
}

impl SourceRepo {
    /// Clones the configured remote into the base directory, or opens the
    /// checkout that is already there.
    ///
    /// A clone that fails because the destination already exists is treated
    /// as "already cloned" and resolved by opening the existing copy. Every
    /// other git failure propagates.
    pub fn acquire(config: &HarnessConfig) -> Result<Self> {
        let checkout = config.checkout_path();

        if checkout.is_dir() {
            tracing::info!(path = ?checkout, "using existing checkout");
            return Self::open(checkout);
        }

        std::fs::create_dir_all(&config.base_dir)?;

        tracing::info!(
            url = %config.remote_url,
            path = ?checkout,
            "cloning program repository"
        );

        let output = Command::new("git")
            .current_dir(&config.base_dir)
            .args(["clone", &config.remote_url, &config.local_dir])
            .output()
            .map_err(|e| Error::Launch {
                program: "git".to_string(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            // git reports a non-empty destination with an "already exists"
            // message; any other clone failure is fatal.
            if stderr.contains("already exists") {
                tracing::info!(path = ?checkout, "destination already present, opening it");
                return Self::open(checkout);
            }
            return Err(Error::Git(format!("clone failed: {}", stderr)));
        }

        Self::open(checkout)
    }

    /// Opens an existing checkout, verifying it is a git repository.
    pub fn open(path: PathBuf) -> Result<Self> {
        if !path.is_dir() {
            return Err(Error::InvalidPath(path));
        }

        let output = Command::new("git")
            .current_dir(&path)
            .args(["rev-parse", "--git-dir"])
            .output()
            .map_err(|e| Error::Launch {
                program: "git".to_string(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "{} is not a git repository: {}",
                path.display(),
                stderr
            )));
        }

        Ok(Self { path })
    }

    /// Returns the path of the checkout.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks out the mainline branch, discarding local modifications, then
    /// pulls the latest changes.
    pub fn checkout_mainline(&self, branch: &str) -> Result<()> {
        self.run_git(&["checkout", "--force", branch])?;
        self.run_git(&["pull"])?;

        tracing::info!(branch = %branch, "checked out mainline");
        Ok(())
    }

    /// Runs a git subcommand in the checkout, failing on non-zero exit.
    fn run_git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .current_dir(&self.path)
            .args(args)
            .output()
            .map_err(|e| Error::Launch {
                program: "git".to_string(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr
            )));
        }

        Ok(())
    }
}
