mod code;
mod injector;
mod list;

pub use code::*;
pub use injector::*;
pub use list::*;
