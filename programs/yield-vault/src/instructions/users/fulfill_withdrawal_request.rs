use anchor_lang::prelude::*;
use anchor_spl::token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::{USER_DATA_SEED, VAULT_SEED, WITHDRAW_SHARES_SEED};
use crate::error::ErrorCode;
use crate::events::WithdrawalRequestFulfilledEvent;
use crate::state::{UserData, Vault, WithdrawRequest};
use crate::util::{check_max_loss, now_ts};

/// permissionless second phase: anyone may complete a queued request once the
/// vault has enough idle underlying to pay it
#[derive(Accounts)]
pub struct FulfillWithdrawalRequest<'info> {
    #[account(
        mut,
        has_one = underlying_token_account,
        has_one = shares_mint,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        close = user,
        has_one = vault,
        has_one = user,
    )]
    pub withdraw_request: Box<Account<'info, WithdrawRequest>>,

    /// CHECK: gets the escrow rent back, address enforced by the has_one
    #[account(mut)]
    pub user: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = vault.underlying_mint,
        constraint = recipient_underlying_account.owner == withdraw_request.recipient
            @ErrorCode::InvalidRecipient,
    )]
    pub recipient_underlying_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub underlying_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub shares_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [WITHDRAW_SHARES_SEED, vault.key().as_ref()],
        bump,
    )]
    pub withdraw_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = shares_mint,
        token::authority = vault.accountant,
    )]
    pub accountant_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [USER_DATA_SEED, vault.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_data: Option<Box<Account<'info, UserData>>>,

    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_fulfill_withdrawal_request(ctx: Context<FulfillWithdrawalRequest>) -> Result<()> {
    let now = now_ts()?;
    let vault = &mut ctx.accounts.vault;
    let request = &ctx.accounts.withdraw_request;

    let payout_shares = request.locked_shares - request.fee_shares;
    // the request never pays more than quoted, price drops since the request
    // are passed on and checked against the accepted max_loss
    let value_now = vault.convert_to_underlying(payout_shares, now);
    let assets = std::cmp::min(value_now, request.requested_amount);
    check_max_loss(request.requested_amount, assets, request.max_loss)?;
    require_gte!(vault.total_idle, assets, ErrorCode::InsufficientFunds);

    let index_bytes = vault.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];

    burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.shares_mint.to_account_info(),
                from: ctx.accounts.withdraw_shares_account.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        payout_shares,
    )?;
    if request.fee_shares > 0 {
        transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.withdraw_shares_account.to_account_info(),
                    to: ctx.accounts.accountant_shares_account.to_account_info(),
                    authority: vault.to_account_info(),
                },
                signer_seeds,
            ),
            request.fee_shares,
        )?;
    }
    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.underlying_token_account.to_account_info(),
                to: ctx.accounts.recipient_underlying_account.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        assets,
    )?;

    vault.handle_withdraw(assets, payout_shares);
    if let Some(user_data) = ctx.accounts.user_data.as_mut() {
        user_data.handle_withdraw(assets);
    }

    emit!(WithdrawalRequestFulfilledEvent {
        vault: vault.key(),
        user: request.user,
        amount: assets,
        index: request.index,
        timestamp: now as i64,
    });

    Ok(())
}
