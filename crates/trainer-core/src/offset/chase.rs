use tracing::trace;

use crate::error::Result;
use crate::memory::{RemoteMemory, layout};

/// Fixed pointer-dereference chain locating a dynamic singleton structure.
///
/// Each hop is one remote `read_u32` followed by a wrapping displacement (the
/// `0xFFFF_….` hops are negative offsets). Hops run in strict sequence; the
/// first failed read aborts the resolution.
#[derive(Debug, Clone, Copy)]
pub struct PointerChain {
    pub base: u32,
    pub hops: &'static [u32],
}

/// Live player position (XYZ float triple).
pub const PLAYER_POSITION: PointerChain = PointerChain {
    base: 0x1096_596C,
    hops: &[0xFFFF_F4E4, 0x53C, 0xFFFF_EA24, 0x338, 0x140],
};

/// Time-of-day block; the hour float sits at `layout::player::TIME_HOUR`.
pub const TIME_OF_DAY: PointerChain = PointerChain {
    base: 0x1097_E088,
    hops: &[0x664, 0x98],
};

impl PointerChain {
    /// Walk the chain and return the final address.
    pub fn resolve<M: RemoteMemory>(&self, memory: &mut M) -> Result<u32> {
        let mut address = self.base;
        for &hop in self.hops {
            address = memory.read_u32(address)?.wrapping_add(hop);
        }
        trace!("Pointer chain {:#010x} resolved to {address:#010x}", self.base);
        Ok(address)
    }
}

/// Read the live player position as (x, y, z).
pub fn read_position<M: RemoteMemory>(memory: &mut M) -> Result<[f32; 3]> {
    let address = PLAYER_POSITION.resolve(memory)?;
    let raw = memory.read_bytes(address, layout::player::POSITION_SIZE)?;
    let word = |i: usize| f32::from_bits(u32::from_be_bytes([raw[i], raw[i + 1], raw[i + 2], raw[i + 3]]));
    Ok([word(0), word(4), word(8)])
}

/// Teleport: overwrite the position triple in one bulk write.
pub fn write_position<M: RemoteMemory>(memory: &mut M, position: [f32; 3]) -> Result<()> {
    let address = PLAYER_POSITION.resolve(memory)?;
    let mut raw = Vec::with_capacity(layout::player::POSITION_SIZE);
    for component in position {
        raw.extend_from_slice(&component.to_bits().to_be_bytes());
    }
    memory.write_bytes(address, &raw)
}

/// The game stores time-of-day as a sun angle in degrees, 15 per hour.
const DEGREES_PER_HOUR: f32 = 15.0;

/// Current in-game hour, converted from the stored sun angle.
pub fn read_time<M: RemoteMemory>(memory: &mut M) -> Result<f32> {
    let address = TIME_OF_DAY.resolve(memory)?;
    let degrees = memory.read_f32(address.wrapping_add(layout::player::TIME_HOUR))?;
    Ok(degrees / DEGREES_PER_HOUR)
}

/// Set the in-game hour (0.0..24.0), stored as degrees.
pub fn write_time<M: RemoteMemory>(memory: &mut M, hour: f32) -> Result<()> {
    let address = TIME_OF_DAY.resolve(memory)?;
    memory.write_f32(
        address.wrapping_add(layout::player::TIME_HOUR),
        hour * DEGREES_PER_HOUR,
    )
}
