mod codec;
mod item;
mod names;
mod scanner;
mod session;

pub use codec::*;
pub use item::*;
pub use names::*;
pub use scanner::*;
pub use session::*;
