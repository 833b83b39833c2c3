//! Position command implementation.

use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;

use trainer_core::{read_position, write_position};

use crate::Args;

#[derive(Subcommand)]
pub enum Action {
    /// Print the current player position once
    Show,
    /// Poll and print the position until interrupted
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
    },
    /// Teleport the player
    Set { x: f32, y: f32, z: f32 },
}

pub fn run(args: &Args, action: &Action) -> Result<()> {
    let mut client = crate::connect(args)?;

    match action {
        Action::Show => {
            let [x, y, z] = read_position(&mut client)?;
            println!("x={x:.2} y={y:.2} z={z:.2}");
        }
        Action::Watch { interval_ms } => {
            let cancel = crate::cancel_flag()?;
            // Checked once per poll tick; an interrupt stops further round
            // trips without tearing the connection down mid-read.
            while !cancel.load(Ordering::SeqCst) {
                let [x, y, z] = read_position(&mut client)?;
                println!("x={x:.2} y={y:.2} z={z:.2}");
                thread::sleep(Duration::from_millis(*interval_ms));
            }
        }
        Action::Set { x, y, z } => {
            write_position(&mut client, [*x, *y, *z])?;
            println!("Teleported to x={x:.2} y={y:.2} z={z:.2}");
        }
    }

    client.close()?;
    Ok(())
}
