use crate::error::Result;

/// Typed access to console memory.
///
/// Implemented by the live protocol client and by the in-memory mock used in
/// tests. Every method is one remote round trip; callers must assume a failed
/// call left no useful state behind and surface the error unchanged.
pub trait RemoteMemory {
    fn read_bytes(&mut self, address: u32, len: usize) -> Result<Vec<u8>>;

    fn write_bytes(&mut self, address: u32, data: &[u8]) -> Result<()>;

    fn read_u32(&mut self, address: u32) -> Result<u32>;

    fn write_u32(&mut self, address: u32, value: u32) -> Result<()>;

    fn read_f32(&mut self, address: u32) -> Result<f32>;

    fn write_f32(&mut self, address: u32, value: f32) -> Result<()>;

    fn read_i32(&mut self, address: u32) -> Result<i32> {
        Ok(self.read_u32(address)? as i32)
    }
}
