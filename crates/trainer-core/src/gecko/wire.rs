//! Command bytes and framing constants for the console debug server.
//!
//! The byte grammar is owned by the external server; these constants mirror
//! the de-facto tcpgecko command set and live in one place so an integrator
//! can line them up against a different server build without touching the
//! client. All multi-byte values on the wire are big-endian.

/// Write one 32-bit word.
pub const CMD_POKE_32: u8 = 0x03;

/// Read a memory range `[start, end)`.
pub const CMD_READ_MEMORY: u8 = 0x04;

/// Upload a byte block to `[start, end)`.
pub const CMD_UPLOAD_MEMORY: u8 = 0x41;

/// Query the server run status.
pub const CMD_SERVER_STATUS: u8 = 0x50;

/// Query the debug server version string.
pub const CMD_SERVER_VERSION: u8 = 0x99;

/// Query the console OS version string.
pub const CMD_OS_VERSION: u8 = 0x9A;

/// Read response marker: payload bytes follow.
pub const REPLY_MEMORY_DATA: u8 = 0xBC;

/// Read response marker: the whole range is zero, no payload follows.
pub const REPLY_MEMORY_ZERO: u8 = 0xBD;

/// Acknowledgement byte for write commands.
pub const REPLY_ACK: u8 = 0xAA;

/// Server status code meaning the console is running and accepting pokes.
pub const STATUS_RUNNING: u8 = 0x01;
