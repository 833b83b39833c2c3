mod chase;
mod collection;
mod loader;
mod version;

pub use chase::*;
pub use collection::*;
pub use loader::*;
pub use version::*;
