use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::WITHDRAW_SHARES_SEED;
use crate::state::Vault;

/// escrow token account holding shares locked behind pending withdraw requests,
/// one per vault, owned by the vault itself
#[derive(Accounts)]
pub struct InitWithdrawSharesAccount<'info> {
    #[account(has_one = shares_mint)]
    pub vault: Account<'info, Vault>,

    pub shares_mint: Account<'info, Mint>,

    #[account(
        init,
        seeds = [WITHDRAW_SHARES_SEED, vault.key().as_ref()],
        bump,
        payer = signer,
        token::mint = shares_mint,
        token::authority = vault,
    )]
    pub withdraw_shares_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn handle_init_withdraw_shares_account(
    _ctx: Context<InitWithdrawSharesAccount>,
) -> Result<()> {
    Ok(())
}
