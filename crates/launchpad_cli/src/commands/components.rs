//! Components command - Show what a state would generate.

use anyhow::Result;
use clap::Args;

use launchpad_iac::{flavor, ComponentRegistry};

use super::StateArgs;

#[derive(Args)]
pub struct ComponentsArgs {
    #[command(flatten)]
    pub source: StateArgs,
}

pub fn execute(args: ComponentsArgs) -> Result<()> {
    let state = args.source.load()?;
    let registry = ComponentRegistry::from_state(&state, false)?;

    let support = if flavor::is_implemented(state.flavor) {
        "implemented"
    } else {
        "not implemented"
    };
    println!("🧩 {} components ({} flavor, {})", registry.len(), state.flavor, support);

    for (i, component) in registry.iter().enumerate() {
        match component.directory() {
            Some(dir) => println!("   {}. {} → {}", i + 1, component.name(), dir.path().display()),
            None => println!("   {}. {} (nothing to generate)", i + 1, component.name()),
        }
    }
    Ok(())
}
