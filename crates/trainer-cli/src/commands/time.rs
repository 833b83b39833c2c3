//! Time command implementation.

use anyhow::{Result, bail};
use clap::Subcommand;

use trainer_core::{read_time, write_time};

use crate::Args;

#[derive(Subcommand)]
pub enum Action {
    /// Print the current in-game hour
    Show,
    /// Set the in-game hour (0.0..24.0)
    Set { hour: f32 },
}

pub fn run(args: &Args, action: &Action) -> Result<()> {
    let mut client = crate::connect(args)?;

    match action {
        Action::Show => {
            let hour = read_time(&mut client)?;
            println!("In-game hour: {hour:.2}");
        }
        Action::Set { hour } => {
            if !(0.0..24.0).contains(hour) {
                bail!("hour must be in 0.0..24.0");
            }
            write_time(&mut client, *hour)?;
            println!("In-game hour set to {hour:.2}");
        }
    }

    client.close()?;
    Ok(())
}
