use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::ErrorCode;
use crate::state::common_strategy_state::CommonStrategyState;

// account order matches what the vault program forwards on deploy/free CPIs:
// state, auth, strategy token account, vault token account, token program
#[derive(Accounts)]
pub struct DeployFunds<'info> {
    #[account(mut)]
    pub strat_state: Account<'info, CommonStrategyState>,

    /// CHECK: Auth PDA
    #[account(
        seeds = [
            &strat_state.key().to_bytes(),
            crate::AUTH_SEED
        ],
        bump
    )]
    pub strat_pda_auth: UncheckedAccount<'info>,

    #[account(mut, address = strat_state.underlying_account)]
    pub strat_underlying_account: Account<'info, TokenAccount>,

    /// CHECK: only needed by strategies that bounce part of the deploy back
    #[account(mut)]
    pub vault_underlying_account: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

/// the vault transfers first and calls second, so the tokens must already be
/// sitting in the strategy account; a just-hold strategy accepts everything
pub fn handle_deploy_funds(ctx: Context<DeployFunds>, amount: u64) -> Result<()> {
    let strat_state = &mut ctx.accounts.strat_state;
    require_gte!(
        ctx.accounts.strat_underlying_account.amount,
        strat_state.idle_underlying + amount,
        ErrorCode::DeployedFundsNotReceived
    );
    strat_state.total_assets += amount;
    strat_state.idle_underlying += amount;
    Ok(())
}
