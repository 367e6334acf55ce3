//! Post-generation formatting.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::error::{IacError, IacResult};

/// Reformats a generated tree in place.
#[cfg_attr(test, mockall::automock)]
pub trait OutputFormatter {
    /// Format everything under `root`.
    fn format(&self, root: &Path) -> IacResult<()>;
}

/// Runs `terraform fmt -recursive` over the output root.
#[derive(Debug, Clone)]
pub struct TerraformFormatter {
    program: String,
}

impl Default for TerraformFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerraformFormatter {
    pub fn new() -> Self {
        Self {
            program: "terraform".to_string(),
        }
    }

    /// Use a different terraform binary.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl OutputFormatter for TerraformFormatter {
    fn format(&self, root: &Path) -> IacResult<()> {
        info!("Running {} fmt in {:?}", self.program, root);

        let output = Command::new(&self.program)
            .args(["fmt", "-recursive"])
            .arg(root)
            .output()
            .map_err(|e| IacError::FormatterFailed(format!("{}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(IacError::FormatterFailed(format!(
                "{} fmt exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        debug!("Formatted: {}", String::from_utf8_lossy(&output.stdout).trim());
        Ok(())
    }
}
