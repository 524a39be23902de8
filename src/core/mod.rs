pub mod config;
pub mod converter;
pub mod estimate;
pub mod parser;
pub mod writer;

pub use config::*;
pub use converter::*;
pub use estimate::*;
pub use parser::*;
pub use writer::*;
