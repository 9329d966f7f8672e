pub mod claim;
pub mod init;
pub mod init_receipt;

pub use claim::*;
pub use init::*;
pub use init_receipt::*;
