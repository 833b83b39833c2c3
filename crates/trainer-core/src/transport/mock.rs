//! Scripted transport for protocol client tests.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::transport::Transport;

#[derive(Debug, Default)]
pub struct MockTransport {
    sent: Vec<Vec<u8>>,
    rx: VecDeque<u8>,
    closed: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes the "server" will answer with.
    pub fn push_response(&mut self, data: &[u8]) {
        self.rx.extend(data);
    }

    pub fn sent_frames(&self) -> &[Vec<u8>] {
        &self.sent
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive_exact(&mut self, len: usize) -> Result<Vec<u8>> {
        if self.rx.len() < len {
            return Err(Error::Connection(format!(
                "mock underrun: wanted {len} bytes, have {}",
                self.rx.len()
            )));
        }
        Ok(self.rx.drain(..len).collect())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
