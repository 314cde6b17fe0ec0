use anchor_lang::prelude::*;
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};
use shared_lib::apply_bp;

use crate::constants::VAULT_SEED;
use crate::error::ErrorCode;
use crate::events::StrategyReportedEvent;
use crate::state::external::{call_report, common_strategy_state};
use crate::state::{StrategyData, Vault};
use crate::util::now_ts;

/// rebalancer crank folding a strategy's self-reported value into the ledger
#[derive(Accounts)]
pub struct ProcessReport<'info> {
    #[account(
        mut,
        has_one = shares_mint,
        has_one = rebalancer_auth,
    )]
    pub vault: Account<'info, Vault>,

    pub rebalancer_auth: Signer<'info>,

    #[account(
        mut,
        has_one = vault,
        has_one = strategy_program,
        constraint = strategy_data.strategy == strategy_state.key() @ErrorCode::InvalidStrategyData,
    )]
    pub strategy_data: Box<Account<'info, StrategyData>>,

    /// CHECK: checked against strategy_data.strategy
    #[account(mut)]
    pub strategy_state: UncheckedAccount<'info>,

    #[account(
        token::mint = vault.underlying_mint,
    )]
    pub strategy_underlying_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: checked against strategy_data.strategy_program
    #[account(executable)]
    pub strategy_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub shares_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = shares_mint,
        token::authority = vault.accountant,
    )]
    pub accountant_shares_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_process_report(ctx: Context<ProcessReport>) -> Result<()> {
    let now = now_ts()?;
    let vault = &mut ctx.accounts.vault;
    let strategy_data = &mut ctx.accounts.strategy_data;

    // make the strategy refresh its books before reading them
    call_report(
        &ctx.accounts.strategy_program.to_account_info(),
        &[
            ctx.accounts.strategy_state.to_account_info(),
            ctx.accounts.strategy_underlying_account.to_account_info(),
        ],
    )?;
    let strategy_state =
        common_strategy_state::deserialize(&ctx.accounts.strategy_state.to_account_info())?;

    let reported = strategy_state.total_assets;
    let current = strategy_data.current_debt;

    let mut gain: u64 = 0;
    let mut loss: u64 = 0;
    let mut fee_shares: u64 = 0;
    if reported > current {
        gain = reported - current;
        let fee_amount = apply_bp(gain, strategy_data.performance_fee_bp);
        // fee shares are priced before the gain moves the price
        fee_shares = vault.process_profit(gain, fee_amount, now);
        if fee_shares > 0 {
            let index_bytes = vault.index.to_le_bytes();
            let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];
            mint_to(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    MintTo {
                        mint: ctx.accounts.shares_mint.to_account_info(),
                        to: ctx.accounts.accountant_shares_account.to_account_info(),
                        authority: vault.to_account_info(),
                    },
                    signer_seeds,
                ),
                fee_shares,
            )?;
        }
    } else if current > reported {
        loss = current - reported;
        vault.process_loss(loss, now);
    }

    strategy_data.current_debt = reported;
    strategy_data.last_update = now;

    emit!(StrategyReportedEvent {
        vault_key: vault.key(),
        strategy_key: strategy_data.strategy,
        gain,
        loss,
        current_debt: strategy_data.current_debt,
        fee_shares,
        locked_profit: vault.locked_profit(now),
        total_shares: vault.total_shares,
        share_price: vault.get_share_price(now),
        timestamp: now as i64,
    });

    Ok(())
}
