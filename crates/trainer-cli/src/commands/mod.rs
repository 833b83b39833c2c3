//! CLI command implementations.

pub mod codes;
pub mod position;
pub mod scan;
pub mod set;
pub mod status;
pub mod time;
