use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::gecko::wire;
use crate::memory::RemoteMemory;
use crate::transport::Transport;

/// Typed command layer over the raw console link.
///
/// One request/response round trip per call, strictly serialized; the console
/// is big-endian, so every numeric value is converted at this boundary in
/// both directions. Transport failures surface unchanged and are never
/// retried here.
pub struct GeckoClient<T: Transport> {
    transport: T,
}

impl<T: Transport> GeckoClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn close(&mut self) -> Result<()> {
        self.transport.close()
    }

    fn expect_ack(&mut self) -> Result<()> {
        let reply = self.transport.receive_exact(1)?;
        if reply[0] != wire::REPLY_ACK {
            return Err(Error::Protocol(format!(
                "expected ack, got {:#04x}",
                reply[0]
            )));
        }
        Ok(())
    }

    /// Read a length-prefixed ASCII reply (u32 BE length, then bytes).
    fn receive_string(&mut self) -> Result<String> {
        let len_bytes = self.transport.receive_exact(4)?;
        let len = u32::from_be_bytes([len_bytes[0], len_bytes[1], len_bytes[2], len_bytes[3]]);
        let raw = self.transport.receive_exact(len as usize)?;
        String::from_utf8(raw).map_err(|e| Error::Protocol(format!("non-ASCII version reply: {e}")))
    }

    /// Run status of the debug server; `wire::STATUS_RUNNING` is the only
    /// state in which memory operations are safe.
    pub fn server_status(&mut self) -> Result<u8> {
        self.transport.send(&[wire::CMD_SERVER_STATUS])?;
        let reply = self.transport.receive_exact(1)?;
        debug!("Server status: {:#04x}", reply[0]);
        Ok(reply[0])
    }

    pub fn server_version(&mut self) -> Result<String> {
        self.transport.send(&[wire::CMD_SERVER_VERSION])?;
        self.receive_string()
    }

    pub fn os_version(&mut self) -> Result<String> {
        self.transport.send(&[wire::CMD_OS_VERSION])?;
        self.receive_string()
    }
}

impl<T: Transport> RemoteMemory for GeckoClient<T> {
    fn read_bytes(&mut self, address: u32, len: usize) -> Result<Vec<u8>> {
        let end = address
            .checked_add(len as u32)
            .ok_or_else(|| Error::Validation(format!("read range overflows at {address:#x}")))?;

        let mut request = Vec::with_capacity(9);
        request.push(wire::CMD_READ_MEMORY);
        request.extend_from_slice(&address.to_be_bytes());
        request.extend_from_slice(&end.to_be_bytes());
        self.transport.send(&request)?;

        let marker = self.transport.receive_exact(1)?[0];
        match marker {
            wire::REPLY_MEMORY_ZERO => Ok(vec![0u8; len]),
            wire::REPLY_MEMORY_DATA => {
                let data = self.transport.receive_exact(len)?;
                trace!("Read {len} bytes at {address:#010x}");
                Ok(data)
            }
            other => Err(Error::Protocol(format!(
                "unexpected read reply marker {other:#04x}"
            ))),
        }
    }

    fn write_bytes(&mut self, address: u32, data: &[u8]) -> Result<()> {
        let end = address
            .checked_add(data.len() as u32)
            .ok_or_else(|| Error::Validation(format!("write range overflows at {address:#x}")))?;

        let mut request = Vec::with_capacity(9 + data.len());
        request.push(wire::CMD_UPLOAD_MEMORY);
        request.extend_from_slice(&address.to_be_bytes());
        request.extend_from_slice(&end.to_be_bytes());
        request.extend_from_slice(data);
        self.transport.send(&request)?;

        trace!("Wrote {} bytes at {address:#010x}", data.len());
        self.expect_ack()
    }

    fn read_u32(&mut self, address: u32) -> Result<u32> {
        let raw = self.read_bytes(address, 4)?;
        Ok(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    fn write_u32(&mut self, address: u32, value: u32) -> Result<()> {
        let mut request = Vec::with_capacity(9);
        request.push(wire::CMD_POKE_32);
        request.extend_from_slice(&address.to_be_bytes());
        request.extend_from_slice(&value.to_be_bytes());
        self.transport.send(&request)?;
        self.expect_ack()
    }

    fn read_f32(&mut self, address: u32) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32(address)?))
    }

    fn write_f32(&mut self, address: u32, value: f32) -> Result<()> {
        self.write_u32(address, value.to_bits())
    }
}
