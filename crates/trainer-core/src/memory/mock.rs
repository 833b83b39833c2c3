//! Sparse in-memory console image for tests.

use std::collections::HashMap;

use crate::error::Result;
use crate::memory::RemoteMemory;

/// One recorded mutation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRecord {
    pub address: u32,
    pub data: Vec<u8>,
}

/// Sparse byte-addressed memory; unwritten bytes read as zero.
#[derive(Debug, Default)]
pub struct MockMemory {
    bytes: HashMap<u32, u8>,
    writes: Vec<WriteRecord>,
}

impl MockMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MockMemoryBuilder {
        MockMemoryBuilder::default()
    }

    pub fn load(&mut self, address: u32, data: &[u8]) {
        for (i, b) in data.iter().enumerate() {
            self.bytes.insert(address.wrapping_add(i as u32), *b);
        }
    }

    pub fn load_u32(&mut self, address: u32, value: u32) {
        self.load(address, &value.to_be_bytes());
    }

    /// All writes performed so far, in call order.
    pub fn writes(&self) -> &[WriteRecord] {
        &self.writes
    }

    pub fn byte_at(&self, address: u32) -> u8 {
        self.bytes.get(&address).copied().unwrap_or(0)
    }

    pub fn u32_at(&self, address: u32) -> u32 {
        let mut word = [0u8; 4];
        for (i, b) in word.iter_mut().enumerate() {
            *b = self.byte_at(address.wrapping_add(i as u32));
        }
        u32::from_be_bytes(word)
    }
}

impl RemoteMemory for MockMemory {
    fn read_bytes(&mut self, address: u32, len: usize) -> Result<Vec<u8>> {
        Ok((0..len)
            .map(|i| self.byte_at(address.wrapping_add(i as u32)))
            .collect())
    }

    fn write_bytes(&mut self, address: u32, data: &[u8]) -> Result<()> {
        self.load(address, data);
        self.writes.push(WriteRecord {
            address,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read_u32(&mut self, address: u32) -> Result<u32> {
        Ok(self.u32_at(address))
    }

    fn write_u32(&mut self, address: u32, value: u32) -> Result<()> {
        self.write_bytes(address, &value.to_be_bytes())
    }

    fn read_f32(&mut self, address: u32) -> Result<f32> {
        Ok(f32::from_bits(self.u32_at(address)))
    }

    fn write_f32(&mut self, address: u32, value: f32) -> Result<()> {
        self.write_bytes(address, &value.to_bits().to_be_bytes())
    }
}

/// Builder that preloads regions before handing out the mock.
#[derive(Debug, Default)]
pub struct MockMemoryBuilder {
    memory: MockMemory,
}

impl MockMemoryBuilder {
    pub fn with_bytes(mut self, address: u32, data: &[u8]) -> Self {
        self.memory.load(address, data);
        self
    }

    pub fn with_u32(mut self, address: u32, value: u32) -> Self {
        self.memory.load_u32(address, value);
        self
    }

    pub fn build(self) -> MockMemory {
        self.memory
    }
}
