//! Generation driver.

use std::collections::HashSet;
use std::path::PathBuf;

use launchpad_spec::EvaluatedState;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GenerateOptions;
use crate::error::IacResult;
use crate::file::RenderedFile;
use crate::flavor;
use crate::formatter::{OutputFormatter, TerraformFormatter};
use crate::registry::ComponentRegistry;

/// What a generation run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Directories realized, in processing order.
    pub directories: Vec<PathBuf>,
    /// Files written, in write order.
    pub files: Vec<PathBuf>,
    /// Previous directories moved aside.
    pub backups: Vec<PathBuf>,
    /// Whether the formatter ran and succeeded.
    pub formatted: bool,
    /// Formatter failure, if any. Generation still succeeded.
    pub formatter_error: Option<String>,
}

/// Turns an evaluated state into files on disk.
pub struct Generator {
    options: GenerateOptions,
    formatter: Box<dyn OutputFormatter>,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        let formatter = TerraformFormatter::new().with_program(options.formatter_program.clone());
        Self {
            options,
            formatter: Box::new(formatter),
        }
    }

    /// Replace the formatter run after generation.
    pub fn with_formatter(mut self, formatter: impl OutputFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Generate the full output tree for `state`.
    ///
    /// Components are processed strictly in registry order, each directory
    /// before its files. An unimplemented flavor is rejected before anything
    /// touches the filesystem. Any other error aborts the run and leaves what
    /// was already written in place.
    pub fn generate(&self, state: &EvaluatedState) -> IacResult<GenerationReport> {
        info!(
            "Generating {} output at {:?}",
            state.flavor, state.output_directory
        );
        flavor::ensure_implemented(state.flavor)?;

        let registry = ComponentRegistry::from_state(state, self.options.backup_existing)?;
        let mut report = GenerationReport::default();
        let mut realized = HashSet::new();

        for component in registry.iter() {
            let name = component.name();

            if let Some(mut desc) = component.directory() {
                // A directory written earlier in this run is never moved aside.
                if realized.contains(&desc.path()) {
                    desc = desc.with_backup(false);
                }
                let placed = desc.ensure()?;
                realized.insert(placed.path.clone());
                report.directories.push(placed.path);
                report.backups.extend(placed.backup);
            }

            if let Some(files) = component.files()? {
                // All files of a group are rendered before any is written.
                let rendered = files
                    .iter()
                    .map(|f| RenderedFile::from_file(f, state.flavor))
                    .collect::<IacResult<Vec<_>>>()?;

                for file in rendered {
                    file.write()?;
                    report.files.push(file.path);
                }
                info!("Generated {} ({} files)", name, files.len());
            } else {
                debug!("Nothing to generate for {}", name);
            }
        }

        if self.options.format && flavor::requires_formatting(state.flavor) {
            match self.formatter.format(&state.output_directory) {
                Ok(()) => report.formatted = true,
                Err(e) => {
                    warn!("Failed to format {} output: {}", state.flavor, e);
                    report.formatter_error = Some(e.to_string());
                }
            }
        }

        info!(
            "Generation complete: {} directories, {} files",
            report.directories.len(),
            report.files.len()
        );
        Ok(report)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("options", &self.options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IacError;
    use crate::formatter::MockOutputFormatter;
    use launchpad_spec::{FolderSpec, ParentRef, ProjectSpec};
    use std::path::Path;
    use tempfile::tempdir;

    fn state(root: &Path) -> EvaluatedState {
        EvaluatedState::new(root.join("out"), "123")
            .with_folder(FolderSpec::new("f1", "Team A", ParentRef::organization("123")))
    }

    #[test]
    fn test_formatter_runs_over_output_root() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());
        let root = state.output_directory.clone();

        let mut formatter = MockOutputFormatter::new();
        formatter
            .expect_format()
            .withf(move |p: &Path| p == root.as_path())
            .times(1)
            .returning(|_| Ok(()));

        let report = Generator::new(GenerateOptions::default())
            .with_formatter(formatter)
            .generate(&state)
            .unwrap();

        assert!(report.formatted);
        assert_eq!(report.formatter_error, None);
    }

    #[test]
    fn test_formatter_failure_is_not_fatal() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        let mut formatter = MockOutputFormatter::new();
        formatter
            .expect_format()
            .times(1)
            .returning(|_| Err(IacError::FormatterFailed("terraform: not found".to_string())));

        let report = Generator::new(GenerateOptions::default())
            .with_formatter(formatter)
            .generate(&state)
            .unwrap();

        assert!(!report.formatted);
        assert!(report.formatter_error.unwrap().contains("not found"));
        assert_eq!(report.files.len(), 3);
    }

    #[test]
    fn test_formatting_disabled() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        let mut formatter = MockOutputFormatter::new();
        formatter.expect_format().times(0);

        let report = Generator::new(GenerateOptions::default().with_format(false))
            .with_formatter(formatter)
            .generate(&state)
            .unwrap();

        assert!(!report.formatted);
    }

    #[test]
    fn test_directories_precede_their_files() {
        let dir = tempdir().unwrap();
        let state = state(dir.path());

        let report = Generator::new(GenerateOptions::default().with_format(false))
            .generate(&state)
            .unwrap();

        let root = &state.output_directory;
        assert_eq!(report.directories, vec![root.clone(), root.join("folders")]);
        assert_eq!(
            report.files,
            vec![
                root.join("folders/main.tf"),
                root.join("folders/output.tf"),
                root.join("folders/variables.tf"),
            ]
        );
    }

    #[test]
    fn test_directory_failure_stops_the_run() {
        let dir = tempdir().unwrap();
        let state = state(dir.path())
            .with_project(ProjectSpec::new("p1", "Project One", ParentRef::organization("123")));
        let root = state.output_directory.clone();
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("folders"), "not a directory").unwrap();

        let mut formatter = MockOutputFormatter::new();
        formatter.expect_format().times(0);

        let err = Generator::new(GenerateOptions::default())
            .with_formatter(formatter)
            .generate(&state)
            .unwrap_err();

        match err {
            IacError::DirectoryCreation { path, .. } => assert_eq!(path, root.join("folders")),
            other => panic!("expected DirectoryCreation, got {:?}", other),
        }
        assert!(!root.join("projects").exists());
    }
}
