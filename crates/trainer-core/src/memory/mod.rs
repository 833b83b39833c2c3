pub mod layout;
mod remote;

#[cfg(test)]
pub mod mock;

pub use remote::RemoteMemory;

#[cfg(test)]
pub use mock::{MockMemory, MockMemoryBuilder};
