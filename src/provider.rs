use std::process::Command;

use crate::error::{Result, VersionGenError};
use crate::version_info::VersionInfo;

/// Invokes the external version-computation tool and parses its JSON output.
///
/// The tool is executed with no arguments; its stdout is expected to carry a
/// single JSON object of version fields. Each `fetch` is an independent
/// invocation with no caching.
pub struct VersionInfoProvider {
    command: String,
}

impl VersionInfoProvider {
    pub fn new(command: impl Into<String>) -> Self {
        VersionInfoProvider {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Runs the version tool and parses its output.
    ///
    /// # Returns
    /// * `Ok(VersionInfo)` - parsed version fields
    /// * `Err(Shell)` - tool could not be spawned or exited non-zero
    /// * `Err(Parse)` - tool succeeded but emitted malformed JSON
    pub fn fetch(&self) -> Result<VersionInfo> {
        let output = Command::new(&self.command).output().map_err(|e| {
            VersionGenError::shell(format!("failed to execute '{}': {}", self.command, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersionGenError::shell(format!(
                "'{}' exited with code {}\nStderr: {}",
                self.command,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        VersionInfo::from_json(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_shell_error() {
        let provider = VersionInfoProvider::new("/nonexistent/path/to/gitversion");
        let result = provider.fetch();
        assert!(matches!(result, Err(VersionGenError::Shell(_))));
    }

    #[test]
    fn test_failing_tool_is_shell_error() {
        // `false` exits 1 with no output
        let provider = VersionInfoProvider::new("false");
        let result = provider.fetch();
        assert!(matches!(result, Err(VersionGenError::Shell(_))));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("exited with code 1"));
    }

    #[test]
    fn test_non_json_output_is_parse_error() {
        // `pwd` succeeds but prints a path, not JSON
        let provider = VersionInfoProvider::new("pwd");
        let result = provider.fetch();
        assert!(matches!(result, Err(VersionGenError::Parse(_))));
    }

    #[test]
    fn test_command_accessor() {
        let provider = VersionInfoProvider::new("gitversion");
        assert_eq!(provider.command(), "gitversion");
    }
}
