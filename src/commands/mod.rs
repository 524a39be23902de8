pub mod convert;
pub mod estimate;
pub mod group;
pub mod init;

pub use convert::*;
pub use estimate::*;
pub use group::*;
pub use init::*;
