pub mod process_report;
pub mod update_debt;

pub use process_report::*;
pub use update_debt::*;
