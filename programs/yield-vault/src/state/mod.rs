pub mod accountant;
pub mod config;
pub mod external;
pub mod strategy_data;
pub mod user_data;
pub mod vault;
pub mod withdraw_request;

pub use accountant::*;
pub use config::*;
pub use strategy_data::*;
pub use user_data::*;
pub use vault::*;
pub use withdraw_request::*;
