pub mod claim;
pub mod init;

pub use claim::*;
pub use init::*;
