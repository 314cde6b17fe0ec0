use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::state::common_strategy_state::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(init, payer = admin, space = 8 + CommonStrategyState::INIT_SPACE)]
    pub strat_state: Account<'info, CommonStrategyState>,

    pub underlying_mint: Account<'info, Mint>,

    /// CHECK: Auth PDA
    #[account(
        seeds = [
            &strat_state.key().to_bytes(),
            AUTH_SEED
        ],
        bump
    )]
    pub strat_pda_auth: UncheckedAccount<'info>,

    /// ATA where the strategy stores its underlying, auth is strat_pda_auth
    #[account(init, payer = admin,
        associated_token::mint = underlying_mint,
        associated_token::authority = strat_pda_auth
    )]
    pub strat_underlying_account: Account<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn handle_initialize(ctx: Context<Initialize>) -> Result<()> {
    ctx.accounts.strat_state.set_inner(CommonStrategyState {
        underlying_mint: ctx.accounts.underlying_mint.key(),
        total_assets: 0,
        idle_underlying: 0,
        underlying_account: ctx.accounts.strat_underlying_account.key(),
    });
    Ok(())
}
