//! Status command implementation.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::Args;

/// Connect, print server and OS versions, and list known offset versions.
pub fn run(args: &Args) -> Result<()> {
    let table = crate::load_table(args)?;
    let mut client = crate::connect(args)?;

    let server = client.server_version()?;
    let os = client.os_version()?;
    client.close()?;

    println!("{} {}:{}", "Connected".green(), args.ip, args.port);
    println!("Server version: {server}");
    println!("OS version:     {os}");
    println!();
    println!("Known game versions (newest first):");
    let active = crate::resolve_offsets(args, &table)?;
    for version in table.versions() {
        if version == active.version {
            println!("  {} {}", version.bold(), "(active)".cyan());
        } else {
            println!("  {version}");
        }
    }
    Ok(())
}
