mod commands;

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trainer_core::gecko::wire;
use trainer_core::{DEFAULT_PORT, GeckoClient, OffsetTable, TcpTransport, VersionOffsets};

#[derive(Parser)]
#[command(name = "botw-trainer")]
#[command(about = "Live inventory trainer over the console TCP debug link")]
struct Args {
    /// Console IPv4 address
    #[arg(short, long, env = "TRAINER_IP")]
    ip: String,

    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Game version; the newest known build is used when omitted
    #[arg(short, long)]
    game_version: Option<String>,

    #[arg(long, default_value = "offsets.json")]
    offsets: PathBuf,

    #[arg(long, default_value = "codes.json")]
    codes: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Query server status and version strings
    Status,
    /// Scan the inventory table and list every item
    Scan {
        /// Emit the item list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Edit one field of one item (scan, write, done)
    Set {
        /// Item index as printed by `scan`
        index: usize,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        value: Option<u32>,
        #[arg(long)]
        page: Option<i32>,
        /// Modifier edit as slot:word, e.g. 0:a00f0001
        #[arg(long)]
        modifier: Option<String>,
    },
    /// Manage and inject cheat codes
    Codes {
        #[command(subcommand)]
        action: commands::codes::Action,
    },
    /// Read, watch or set the live player position
    Position {
        #[command(subcommand)]
        action: commands::position::Action,
    },
    /// Read or set the in-game hour
    Time {
        #[command(subcommand)]
        action: commands::time::Action,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("trainer_core=info".parse()?))
        .init();

    let args = Args::parse();

    match &args.command {
        Command::Status => commands::status::run(&args),
        Command::Scan { json } => commands::scan::run(&args, *json),
        Command::Set {
            index,
            id,
            value,
            page,
            modifier,
        } => commands::set::run(&args, *index, id.clone(), *value, *page, modifier.clone()),
        Command::Codes { action } => commands::codes::run(&args, action),
        Command::Position { action } => commands::position::run(&args, action),
        Command::Time { action } => commands::time::run(&args, action),
    }
}

/// Connect and refuse to continue unless the debug server reports the
/// running state; memory pokes against a paused or faulted console corrupt
/// state.
fn connect(args: &Args) -> Result<GeckoClient<TcpTransport>> {
    let transport = TcpTransport::connect(&args.ip, args.port)?;
    let mut client = GeckoClient::new(transport);
    let status = client.server_status()?;
    if status != wire::STATUS_RUNNING {
        bail!("debug server is not running (status {status:#04x})");
    }
    info!("Console ready at {}:{}", args.ip, args.port);
    Ok(client)
}

fn load_table(args: &Args) -> Result<OffsetTable> {
    Ok(trainer_core::load_or_builtin(&args.offsets)?)
}

/// Offsets for the configured version, or the newest known build.
fn resolve_offsets(args: &Args, table: &OffsetTable) -> Result<VersionOffsets> {
    let entry = match &args.game_version {
        Some(version) => table.get(version)?,
        None => table.newest()?,
    };
    Ok(entry.clone())
}

/// Ctrl-C flag shared with long-running loops.
fn cancel_flag() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(true, std::sync::atomic::Ordering::SeqCst);
    })?;
    Ok(flag)
}
