pub mod cli;
pub mod memory;

pub use cli::*;
pub use memory::*;
