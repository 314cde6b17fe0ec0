pub mod add_strategy;
pub mod close_vault;
pub mod init_accountant;
pub mod init_vault;
pub mod initialize;
pub mod remove_strategy;
pub mod shutdown_vault;
pub mod vault_setters;
pub mod whitelist;

pub use add_strategy::*;
pub use close_vault::*;
pub use init_accountant::*;
pub use init_vault::*;
pub use initialize::*;
pub use remove_strategy::*;
pub use shutdown_vault::*;
pub use vault_setters::*;
pub use whitelist::*;
