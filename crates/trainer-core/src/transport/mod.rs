mod tcp;

#[cfg(test)]
pub mod mock;

pub use tcp::{DEFAULT_PORT, TcpTransport};

#[cfg(test)]
pub use mock::MockTransport;

use crate::error::Result;

/// Byte-level link to the console debug server.
///
/// Strictly one outstanding request: callers send a full request frame, then
/// read the exact response bytes before issuing anything else.
pub trait Transport {
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Block until exactly `len` bytes have been received.
    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>>;

    fn close(&mut self) -> Result<()>;
}
