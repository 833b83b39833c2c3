//! # trainer-core
//!
//! Engine for a live inventory trainer that edits a running game over the
//! console's TCP debug link.
//!
//! This crate provides:
//! - Blocking TCP transport to the console debug server (port 7331)
//! - Typed big-endian remote memory operations (`GeckoClient`)
//! - Per-game-version offset tables and pointer-chase resolution
//! - The inventory record codec and backward scan with skip/resync
//! - Cheat-code list handling and code handler injection
//!
//! The GUI/CLI layer owns rendering, name tables and user input; it drives
//! this crate through [`EditSession`], [`CodeInjector`] and the pointer
//! chase helpers.

pub mod codes;
pub mod error;
pub mod gecko;
pub mod inventory;
pub mod memory;
pub mod offset;
pub mod transport;

pub use codes::{Code, CodeInjector, load_codes, save_codes, set_enabled, sync_enabled, tokenize_block};
pub use error::{Error, Result};
pub use gecko::GeckoClient;
pub use inventory::{
    Category, Decoded, EditSession, FieldEdit, Item, NameLookup, NoNames, SessionState, WriteOp,
    decode_record, encode_field, scan_inventory,
};
pub use memory::RemoteMemory;
pub use offset::{
    CodeHandler, GameVersion, OffsetTable, PLAYER_POSITION, PointerChain, TIME_OF_DAY,
    VersionOffsets, builtin_offsets, load_offsets, load_or_builtin, read_position, read_time,
    save_offsets, write_position, write_time,
};
pub use transport::{DEFAULT_PORT, TcpTransport, Transport};
