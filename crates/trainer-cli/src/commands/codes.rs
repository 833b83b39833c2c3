//! Codes command implementation.

use anyhow::Result;
use clap::Subcommand;
use owo_colors::OwoColorize;

use trainer_core::{CodeInjector, load_codes, set_enabled, sync_enabled};

use crate::Args;

#[derive(Subcommand)]
pub enum Action {
    /// List the code file with enabled flags
    List,
    /// Enable one named code (persisted, not yet injected)
    Enable { name: String },
    /// Disable one named code (persisted, not yet injected)
    Disable { name: String },
    /// Inject all enabled codes into the code handler
    Apply,
}

pub fn run(args: &Args, action: &Action) -> Result<()> {
    let mut codes = load_codes(&args.codes)?;

    match action {
        Action::List => {
            for code in &codes {
                let words = code.block.split_whitespace().count();
                let state = if code.enabled {
                    "on ".green().to_string()
                } else {
                    "off".red().to_string()
                };
                println!("[{state}] {} ({words} words)", code.name);
            }
        }
        Action::Enable { name } => {
            set_enabled(&mut codes, name, true)?;
            sync_enabled(&args.codes, &codes)?;
            println!("Enabled '{name}'");
        }
        Action::Disable { name } => {
            set_enabled(&mut codes, name, false)?;
            sync_enabled(&args.codes, &codes)?;
            println!("Disabled '{name}'");
        }
        Action::Apply => {
            let table = crate::load_table(args)?;
            // Persist flags before touching the console, as the list file is
            // the source of truth across reloads.
            sync_enabled(&args.codes, &codes)?;

            let mut client = crate::connect(args)?;
            let injector = CodeInjector::new(table.code_handler);
            let sent = injector.apply(&mut client, &codes)?;
            client.close()?;
            println!("{sent} codes sent");
        }
    }
    Ok(())
}
