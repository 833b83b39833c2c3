//! Memory layout constants for console-side data structures
//!
//! This module centralizes all fixed byte offsets and sizes used when
//! decoding and patching console memory. Constants are organized by
//! structure type.

/// Memory layout constants for a single inventory item record
pub mod item {
    /// Word size (4 bytes / 32-bit integer)
    pub const WORD: usize = 4;

    /// Size of one item record in bytes
    pub const RECORD_SIZE: usize = 0x70;

    /// Byte distance between consecutive inventory slots
    pub const SLOT_STRIDE: u32 = 0x220;

    // Fixed-position scalar fields
    pub const PAGE: usize = 0;
    pub const UNKNOWN: usize = WORD;
    pub const VALUE: usize = WORD * 2;
    pub const EQUIPPED: usize = WORD * 3;
    pub const CURRENT: usize = WORD * 3 + 1;

    /// Offset of the ASCII item id within the record
    pub const ID: usize = 0x1C;

    /// Maximum id length; the id is NUL-terminated unless it fills the window
    pub const ID_LEN: usize = 36;

    /// Offsets of the five opaque modifier words
    pub const MODIFIERS: [usize; 5] = [WORD * 23, WORD * 24, WORD * 25, WORD * 26, WORD * 27];
}

/// Memory layout constants for the injected code handler
pub mod code_handler {
    /// Fixed capacity of the opcode buffer in bytes
    pub const CAPACITY: usize = 4864;
}


/// Layout of the dynamic player structure reached via pointer chase
pub mod player {
    /// Size of the XYZ position triple (3 x f32)
    pub const POSITION_SIZE: usize = 0xC;

    /// Offset of the time-of-day float within the resolved block; the value
    /// is a sun angle in degrees (15 per hour)
    pub const TIME_HOUR: u32 = 0x8;
}
