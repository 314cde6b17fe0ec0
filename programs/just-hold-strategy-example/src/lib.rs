use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("3TcPBJParS3bER2t5dnATkmvvxXPLihi6ANiHZEHy68H");

// Smallest possible strategy: keeps whatever the vault sends in its own token
// account and yields nothing (except donations). Useful as a parking slot for
// debt and as the reference implementation of the strategy interface.
#[program]
pub mod just_hold_strategy_example {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize::handle_initialize(ctx)
    }

    /// register `amount` the vault already transferred into the strategy's
    /// token account
    pub fn deploy_funds(ctx: Context<DeployFunds>, amount: u64) -> Result<()> {
        deploy_funds::handle_deploy_funds(ctx, amount)
    }

    /// send up to `amount` underlying back to the vault's token account
    pub fn free_funds(ctx: Context<FreeFunds>, amount: u64) -> Result<()> {
        free_funds::handle_free_funds(ctx, amount)
    }

    /// sync total_assets with the token account balance, catching donations
    pub fn report(ctx: Context<Report>) -> Result<()> {
        report::handle_report(ctx)
    }
}
