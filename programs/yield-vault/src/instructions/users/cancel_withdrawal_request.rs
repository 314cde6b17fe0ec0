use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, WITHDRAW_SHARES_SEED};
use crate::events::WithdrawalRequestCanceledEvent;
use crate::state::{Vault, WithdrawRequest};
use crate::util::now_ts;

#[derive(Accounts)]
pub struct CancelWithdrawalRequest<'info> {
    #[account()]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        close = user,
        has_one = vault,
        has_one = user,
    )]
    pub withdraw_request: Account<'info, WithdrawRequest>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        address = withdraw_request.shares_account,
    )]
    pub user_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [WITHDRAW_SHARES_SEED, vault.key().as_ref()],
        bump,
    )]
    pub withdraw_shares_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

/// return the escrowed shares and drop the request from the queue
pub fn handle_cancel_withdrawal_request(ctx: Context<CancelWithdrawalRequest>) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let request = &ctx.accounts.withdraw_request;

    let index_bytes = vault.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];
    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.withdraw_shares_account.to_account_info(),
                to: ctx.accounts.user_shares_account.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        request.locked_shares,
    )?;

    emit!(WithdrawalRequestCanceledEvent {
        vault: vault.key(),
        user: request.user,
        index: request.index,
        timestamp: now_ts()? as i64,
    });

    Ok(())
}
