pub mod claim;
pub mod close;
pub mod configure;

pub use claim::*;
pub use close::*;
pub use configure::*;
