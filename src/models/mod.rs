pub mod config;
pub mod program;

pub use config::*;
pub use program::*;
