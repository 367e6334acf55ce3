//! Generate command - Write the output tree for a state document.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use launchpad_iac::{GenerateOptions, Generator};

use super::StateArgs;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: StateArgs,

    /// Move existing group directories aside before regenerating them
    #[arg(short, long)]
    pub backup: bool,

    /// Skip the formatting pass
    #[arg(long)]
    pub no_format: bool,

    /// Formatter executable
    #[arg(long, default_value = "terraform", env = "LAUNCHPAD_FORMATTER")]
    pub formatter: String,

    /// Print the generation report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    fn options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_backup(self.backup)
            .with_format(!self.no_format)
            .with_formatter_program(&self.formatter)
    }
}

pub fn execute(args: GenerateArgs, quiet: bool) -> Result<()> {
    let state = args.source.load()?;
    info!(
        "Generating {} resources for organization {}",
        state.resource_count(),
        state.org_id
    );

    let report = Generator::new(args.options())
        .generate(&state)
        .context("Infrastructure generation failed")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if quiet {
        return Ok(());
    }

    println!("📁 Output written to {}", state.output_directory.display());
    for file in &report.files {
        let relative = file.strip_prefix(&state.output_directory).unwrap_or(file);
        println!("   ✅ {}", relative.display());
    }
    for backup in &report.backups {
        println!("   💾 Previous output kept at {}", backup.display());
    }
    if let Some(err) = &report.formatter_error {
        println!("   ⚠️  Output left unformatted: {}", err);
    }

    println!();
    println!(
        "✅ Generated {} files in {} directories",
        report.files.len(),
        report.directories.len()
    );
    Ok(())
}
