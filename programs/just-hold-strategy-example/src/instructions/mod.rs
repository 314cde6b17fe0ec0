pub mod deploy_funds;
pub mod free_funds;
pub mod initialize;
pub mod report;

pub use deploy_funds::*;
pub use free_funds::*;
pub use initialize::*;
pub use report::*;
