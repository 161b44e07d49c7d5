//! Build invocation for the program under test.

use std::process::Command;

use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::repo::SourceRepo;

/// Invokes the configured build tool in the checkout, passing the source
/// directory name as its single argument.
///
/// Stdio is inherited so build output is visible live. The exit status is
/// not inspected: a broken build leaves a missing or stale executable and
/// surfaces later as failing test cases.
pub fn build_program(config: &HarnessConfig, repo: &SourceRepo) -> Result<()> {
    tracing::info!(
        tool = %config.build_tool,
        dir = ?repo.path(),
        "invoking build tool"
    );

    let status = Command::new(&config.build_tool)
        .current_dir(repo.path())
        .arg(&config.local_dir)
        .status()
        .map_err(|e| Error::Launch {
            program: config.build_tool.clone(),
            source: e,
        })?;

    tracing::debug!(code = ?status.code(), "build tool exited");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_repo(dir: &TempDir) {
        Command::new("git")
            .args(["init"])
            .current_dir(dir.path())
            .output()
            .expect("failed to init git repo");
    }

    #[cfg(unix)]
    #[test]
    fn build_ignores_tool_exit_status() {
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        let repo = SourceRepo::open(dir.path().to_path_buf()).unwrap();

        // `false` exits non-zero; the harness must not treat that as fatal.
        let config = HarnessConfig {
            build_tool: "false".to_string(),
            ..Default::default()
        };

        build_program(&config, &repo).expect("build invocation should not fail");
    }

    #[test]
    fn build_fails_when_tool_is_missing() {
        let dir = TempDir::new().unwrap();
        init_repo(&dir);
        let repo = SourceRepo::open(dir.path().to_path_buf()).unwrap();

        let config = HarnessConfig {
            build_tool: "definitely-not-a-real-build-tool".to_string(),
            ..Default::default()
        };

        let result = build_program(&config, &repo);

        assert!(matches!(result, Err(Error::Launch { .. })));
    }
}
