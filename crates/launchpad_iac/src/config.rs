//! Generation options.

/// How a generation run treats existing output and formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Move existing group directories aside instead of overwriting into them.
    pub backup_existing: bool,
    /// Run the formatter after generation, for flavors that need it.
    pub format: bool,
    /// Formatter executable.
    pub formatter_program: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            backup_existing: false,
            format: true,
            formatter_program: "terraform".to_string(),
        }
    }
}

impl GenerateOptions {
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup_existing = backup;
        self
    }

    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    pub fn with_formatter_program(mut self, program: impl Into<String>) -> Self {
        self.formatter_program = program.into();
        self
    }
}
