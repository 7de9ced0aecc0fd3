pub mod spawn;
pub mod items;

pub use spawn::*;
pub use items::*;
