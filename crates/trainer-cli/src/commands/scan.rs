//! Scan command implementation.

use std::io::Write;

use anyhow::Result;
use owo_colors::OwoColorize;

use trainer_core::{EditSession, NoNames};

use crate::Args;

/// Scan the inventory table and print every decoded item.
pub fn run(args: &Args, json: bool) -> Result<()> {
    let table = crate::load_table(args)?;
    let offsets = crate::resolve_offsets(args, &table)?;
    let client = crate::connect(args)?;
    let cancel = crate::cancel_flag()?;

    let mut session = EditSession::new(client, offsets);
    session.scan(&NoNames, &cancel, |accepted, total| {
        eprint!("\rScanning {accepted}/{total}");
        std::io::stderr().flush().ok();
    })?;
    eprintln!();

    if json {
        println!("{}", serde_json::to_string_pretty(session.items())?);
    } else {
        println!(
            "{:<4} {:<10} {:<9} {:<38} {:>10} {:>4}",
            "#", "address", "category", "id", "value", "eq"
        );
        for (index, item) in session.items().iter().enumerate() {
            println!(
                "{:<4} {:<#10x} {:<9} {:<38} {:>10} {:>4}",
                index,
                item.base_address,
                item.category.to_string(),
                item.name.as_deref().unwrap_or(&item.id),
                item.value,
                if item.equipped { "*" } else { "" }
            );
        }
        println!("{} items", session.items().len().to_string().bold());
    }

    session.into_memory().close()?;
    Ok(())
}
