use anchor_lang::prelude::*;
use anchor_spl::token::{burn, transfer, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::ErrorCode;
use crate::events::VaultWithdrawEvent;
use crate::state::external::call_free_funds;
use crate::state::{Accountant, StrategyData, UserData, Vault};
use crate::util::{check_max_loss, check_shares_balance, now_ts};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        has_one = underlying_token_account,
        has_one = shares_mint,
        has_one = accountant,
    )]
    pub vault: Account<'info, Vault>,

    pub accountant: Box<Account<'info, Accountant>>,

    #[account(mut)]
    pub underlying_token_account: Box<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub shares_mint: Box<Account<'info, Mint>>,

    pub withdrawer: Signer<'info>,

    #[account(
        mut,
        token::mint = shares_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = vault.underlying_mint,
    )]
    pub withdrawer_underlying_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = shares_mint,
        token::authority = vault.accountant,
    )]
    pub accountant_shares_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [crate::constants::USER_DATA_SEED, vault.key().as_ref(), withdrawer.key().as_ref()],
        bump
    )]
    pub user_data: Option<Box<Account<'info, UserData>>>,

    pub token_program: Program<'info, Token>,
}

/// withdraw an exact underlying amount, burning as many shares as needed
pub fn handle_withdraw<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    amount: u64,
    max_loss: u64,
) -> Result<()> {
    let now = now_ts()?;
    require_neq!(amount, 0, ErrorCode::ZeroValue);
    let shares_needed = ctx.accounts.vault.convert_to_shares(amount, now);
    process_withdrawal(ctx, amount, shares_needed, max_loss, now)
}

/// burn an exact amount of shares for whatever underlying they are worth
pub fn handle_redeem<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    shares: u64,
    max_loss: u64,
) -> Result<()> {
    let now = now_ts()?;
    require_neq!(shares, 0, ErrorCode::ZeroValue);
    let amount = ctx.accounts.vault.convert_to_underlying(shares, now);
    require_neq!(amount, 0, ErrorCode::ZeroValue);
    process_withdrawal(ctx, amount, shares, max_loss, now)
}

fn process_withdrawal<'info>(
    ctx: Context<'_, '_, 'info, 'info, Withdraw<'info>>,
    amount: u64,
    shares_needed: u64,
    max_loss: u64,
    now: u64,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    if !vault.direct_withdraw_enabled {
        return Err(ErrorCode::DirectWithdrawDisabled.into());
    }
    check_shares_balance(ctx.accounts.withdrawer_shares_account.amount, shares_needed)?;

    // the redemption fee is paid in shares moved to the accountant, only the
    // remainder gets burned
    let fee_amount = ctx.accounts.accountant.redemption_fee(amount);
    let fee_shares = vault.convert_to_shares(fee_amount, now);
    let assets_out = amount - fee_amount;
    let shares_burned = shares_needed - fee_shares;

    // pull what idle cannot cover out of the strategies passed alongside
    let mut total_loss: u64 = 0;
    if vault.total_idle < assets_out {
        let mut to_free = assets_out - vault.total_idle;
        // five accounts per strategy: data, state, authority, token account, program
        for chunk in ctx.remaining_accounts.chunks_exact(5) {
            if to_free == 0 {
                break;
            }
            let strategy_data_info = &chunk[0];
            let strategy_state = &chunk[1];
            let strategy_auth = &chunk[2];
            let strategy_underlying_account = &chunk[3];
            let strategy_program = &chunk[4];

            let mut strategy_data: Account<StrategyData> = Account::try_from(strategy_data_info)?;
            require_keys_eq!(
                strategy_data.vault,
                vault.key(),
                ErrorCode::InvalidStrategyData
            );
            require_keys_eq!(
                strategy_data.strategy,
                strategy_state.key(),
                ErrorCode::InvalidStrategyData
            );
            require_keys_eq!(
                strategy_data.strategy_program,
                strategy_program.key(),
                ErrorCode::InvalidStrategyData
            );

            let requested = std::cmp::min(to_free, strategy_data.current_debt);
            if requested == 0 {
                continue;
            }

            let balance_before = ctx.accounts.underlying_token_account.amount;
            call_free_funds(
                strategy_program,
                &[
                    strategy_state.clone(),
                    strategy_auth.clone(),
                    strategy_underlying_account.clone(),
                    ctx.accounts.underlying_token_account.to_account_info(),
                    ctx.accounts.token_program.to_account_info(),
                ],
                requested,
            )?;
            ctx.accounts.underlying_token_account.reload()?;
            // never trust the requested amount, measure what actually arrived
            let freed = ctx.accounts.underlying_token_account.amount - balance_before;

            // the full requested slice leaves the debt books, any shortfall is
            // a realized loss charged against this withdrawal
            strategy_data.current_debt -= requested;
            strategy_data.exit(&crate::ID)?;
            vault.total_debt -= requested;
            vault.total_idle += freed;
            total_loss += requested - freed;
            to_free -= requested;
        }
        require_gte!(
            vault.total_idle + total_loss,
            assets_out,
            ErrorCode::InsufficientFunds
        );
    }

    let assets_paid = assets_out - total_loss;
    check_max_loss(assets_out, assets_paid, max_loss)?;

    burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.shares_mint.to_account_info(),
                from: ctx.accounts.withdrawer_shares_account.to_account_info(),
                authority: ctx.accounts.withdrawer.to_account_info(),
            },
        ),
        shares_burned,
    )?;
    if fee_shares > 0 {
        transfer(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.withdrawer_shares_account.to_account_info(),
                    to: ctx.accounts.accountant_shares_account.to_account_info(),
                    authority: ctx.accounts.withdrawer.to_account_info(),
                },
            ),
            fee_shares,
        )?;
    }

    let index_bytes = vault.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];
    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.underlying_token_account.to_account_info(),
                to: ctx.accounts.withdrawer_underlying_account.to_account_info(),
                authority: vault.to_account_info(),
            },
            signer_seeds,
        ),
        assets_paid,
    )?;

    vault.handle_withdraw(assets_paid, shares_burned);
    if let Some(user_data) = ctx.accounts.user_data.as_mut() {
        user_data.handle_withdraw(assets_paid);
    }

    emit!(VaultWithdrawEvent {
        vault_key: vault.key(),
        authority: ctx.accounts.withdrawer.key(),
        assets_transferred: assets_paid,
        shares_burned,
        fee_shares,
        token_account: ctx.accounts.withdrawer_underlying_account.key(),
        total_idle: vault.total_idle,
        total_debt: vault.total_debt,
        total_shares: vault.total_shares,
        share_price: vault.get_share_price(now),
        timestamp: now as i64,
    });

    Ok(())
}
