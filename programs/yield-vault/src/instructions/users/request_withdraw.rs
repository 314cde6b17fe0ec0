use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::constants::{CONFIG_SEED, WITHDRAW_REQUEST_SEED, WITHDRAW_SHARES_SEED};
use crate::error::ErrorCode;
use crate::events::WithdrawalRequestedEvent;
use crate::state::{Accountant, Config, Vault, WithdrawRequest};
use crate::util::{check_shares_balance, now_ts};

#[derive(Accounts)]
pub struct RequestWithdraw<'info> {
    #[account(has_one = accountant)]
    pub vault: Account<'info, Vault>,

    pub accountant: Box<Account<'info, Accountant>>,

    #[account(mut, seeds = [CONFIG_SEED], bump)]
    pub config: Box<Account<'info, Config>>,

    #[account(
        init,
        seeds = [
            WITHDRAW_REQUEST_SEED,
            vault.key().as_ref(),
            user.key().as_ref(),
            config.next_withdraw_request_index.to_le_bytes().as_ref()
        ],
        bump,
        payer = user,
        space = WithdrawRequest::LEN,
    )]
    pub withdraw_request: Box<Account<'info, WithdrawRequest>>,

    #[account(mut)]
    pub user: Signer<'info>,

    /// CHECK: destination for the eventual underlying payout, any account the
    /// user designates; ownership is checked at fulfillment time against the
    /// token account passed there
    pub recipient: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = vault.shares_mint,
        token::authority = user,
    )]
    pub user_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [WITHDRAW_SHARES_SEED, vault.key().as_ref()],
        bump,
    )]
    pub withdraw_shares_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

/// queue a withdrawal for an exact underlying amount at today's share price
pub fn handle_request_withdraw(
    ctx: Context<RequestWithdraw>,
    amount: u64,
    max_loss: u64,
) -> Result<()> {
    let now = now_ts()?;
    require_neq!(amount, 0, ErrorCode::ZeroValue);
    let locked_shares = ctx.accounts.vault.convert_to_shares(amount, now);
    process_request(ctx, amount, locked_shares, max_loss, now)
}

/// queue a withdrawal for an exact share amount
pub fn handle_request_redeem(
    ctx: Context<RequestWithdraw>,
    shares: u64,
    max_loss: u64,
) -> Result<()> {
    let now = now_ts()?;
    require_neq!(shares, 0, ErrorCode::ZeroValue);
    let amount = ctx.accounts.vault.convert_to_underlying(shares, now);
    require_neq!(amount, 0, ErrorCode::ZeroValue);
    process_request(ctx, amount, shares, max_loss, now)
}

fn process_request(
    ctx: Context<RequestWithdraw>,
    amount: u64,
    locked_shares: u64,
    max_loss: u64,
    now: u64,
) -> Result<()> {
    let vault = &ctx.accounts.vault;
    vault.check_withdraw_request_policy()?;
    check_shares_balance(ctx.accounts.user_shares_account.amount, locked_shares)?;

    // fee is fixed at request time; the escrowed shares cover both the payout
    // and the fee transfer done at fulfillment
    let fee_amount = ctx.accounts.accountant.redemption_fee(amount);
    let fee_shares = vault.convert_to_shares(fee_amount, now);
    let requested_amount = amount - fee_amount;

    transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user_shares_account.to_account_info(),
                to: ctx.accounts.withdraw_shares_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        locked_shares,
    )?;

    let index = ctx.accounts.config.next_withdraw_request_index;
    ctx.accounts.withdraw_request.init(
        requested_amount,
        vault.key(),
        ctx.accounts.user.key(),
        ctx.accounts.recipient.key(),
        ctx.accounts.user_shares_account.key(),
        locked_shares,
        max_loss,
        fee_shares,
        index,
    )?;
    ctx.accounts.config.next_withdraw_request_index += 1;

    emit!(WithdrawalRequestedEvent {
        vault: vault.key(),
        user: ctx.accounts.user.key(),
        recipient: ctx.accounts.recipient.key(),
        amount: requested_amount,
        locked_shares,
        fee_shares,
        max_loss,
        index,
        timestamp: now as i64,
    });

    Ok(())
}
