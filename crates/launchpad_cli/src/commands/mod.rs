//! CLI command definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use launchpad_spec::{EvaluatedState, Flavor, StateReader};

pub mod components;
pub mod generate;

/// Launchpad - generate cloud resource hierarchies as infrastructure code
#[derive(Parser)]
#[command(name = "launchpad")]
#[command(version, about = "Launchpad - generate cloud resource hierarchies as infrastructure code")]
#[command(long_about = r#"
Launchpad turns an evaluated description of GCP folders, projects and project
templates into infrastructure-definition files.

COMMANDS:
  generate    → Write the output tree for a state document
  components  → Show the components a state would generate, in order

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or state
  5 - Generation error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate infrastructure files from a state document
    Generate(generate::GenerateArgs),

    /// List components in processing order
    Components(components::ComponentsArgs),
}

/// State source shared by every command.
#[derive(clap::Args, Debug)]
pub struct StateArgs {
    /// Evaluated state document (YAML)
    #[arg(short, long, env = "LAUNCHPAD_STATE")]
    pub state: PathBuf,

    /// Output root, overriding the state document
    #[arg(short, long, env = "LAUNCHPAD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output flavor (terraform, deployment-manager), overriding the state document
    #[arg(short, long, env = "LAUNCHPAD_FLAVOR")]
    pub flavor: Option<Flavor>,
}

impl StateArgs {
    /// Load the state and apply command-line overrides.
    pub fn load(&self) -> Result<EvaluatedState> {
        let mut state = StateReader::read_file(&self.state)
            .with_context(|| format!("Failed to load state from {:?}", self.state))?;

        if let Some(output) = &self.output {
            state = state.with_output_directory(output);
        }
        if let Some(flavor) = self.flavor {
            state = state.with_flavor(flavor);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::parse_from([
            "launchpad",
            "generate",
            "--state",
            "state.yaml",
            "--flavor",
            "terraform",
            "--backup",
            "--no-format",
        ]);

        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.source.state, PathBuf::from("state.yaml"));
                assert_eq!(args.source.flavor, Some(Flavor::Terraform));
                assert!(args.backup);
                assert!(args.no_format);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_state_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.yaml");
        fs::write(&path, "output_directory: from-file\norg_id: \"1\"\n").unwrap();

        let args = StateArgs {
            state: path,
            output: Some(dir.path().join("override")),
            flavor: Some(Flavor::DeploymentManager),
        };

        let state = args.load().unwrap();
        assert_eq!(state.output_directory, dir.path().join("override"));
        assert_eq!(state.flavor, Flavor::DeploymentManager);
    }
}
