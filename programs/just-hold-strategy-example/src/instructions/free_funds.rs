use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::state::common_strategy_state::CommonStrategyState;

#[derive(Accounts)]
pub struct FreeFunds<'info> {
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

    #[account(mut)]
    pub vault_underlying_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

/// send back whatever we can cover, up to `amount`; the vault measures the
/// actual transfer and never trusts the requested figure
pub fn handle_free_funds(ctx: Context<FreeFunds>, amount: u64) -> Result<()> {
    let to_send = std::cmp::min(amount, ctx.accounts.strat_underlying_account.amount);
    if to_send == 0 {
        return Ok(());
    }

    let strat_state_key = ctx.accounts.strat_state.key();
    let signer_seeds: &[&[&[u8]]] = &[&[
        &strat_state_key.to_bytes(),
        crate::AUTH_SEED,
        &[ctx.bumps.strat_pda_auth],
    ]];
    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.strat_underlying_account.to_account_info(),
                to: ctx.accounts.vault_underlying_account.to_account_info(),
                authority: ctx.accounts.strat_pda_auth.to_account_info(),
            },
            signer_seeds,
        ),
        to_send,
    )?;

    let strat_state = &mut ctx.accounts.strat_state;
    strat_state.total_assets -= to_send;
    strat_state.idle_underlying -= to_send;
    Ok(())
}
