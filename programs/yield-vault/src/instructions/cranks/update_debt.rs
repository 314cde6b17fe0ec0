use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::ErrorCode;
use crate::events::UpdatedCurrentDebtForStrategyEvent;
use crate::state::external::{call_deploy_funds, call_free_funds};
use crate::state::{StrategyData, Vault};
use crate::util::{debt_decrease_amount, debt_increase_amount, now_ts};

/// rebalancer crank moving underlying between the idle reserve and a strategy
/// until the strategy's debt matches `target_debt`
#[derive(Accounts)]
pub struct UpdateDebt<'info> {
    #[account(
        mut,
        has_one = underlying_token_account,
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

    /// CHECK: forwarded to the strategy program, which validates its own PDA
    pub strategy_auth: UncheckedAccount<'info>,

    #[account(
        mut,
        token::mint = vault.underlying_mint,
    )]
    pub strategy_underlying_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: checked against strategy_data.strategy_program
    #[account(executable)]
    pub strategy_program: UncheckedAccount<'info>,

    #[account(mut)]
    pub underlying_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

pub fn handle_update_debt(ctx: Context<UpdateDebt>, target_debt: u64) -> Result<()> {
    let now = now_ts()?;
    let vault = &mut ctx.accounts.vault;
    let strategy_data = &mut ctx.accounts.strategy_data;

    require_neq!(target_debt, strategy_data.current_debt, ErrorCode::SameDebt);

    let index_bytes = vault.index.to_le_bytes();
    let signer_seeds: &[&[&[u8]]] = &[&[VAULT_SEED, index_bytes.as_ref(), &[vault.bump]]];
    let strategy_accounts = [
        ctx.accounts.strategy_state.to_account_info(),
        ctx.accounts.strategy_auth.to_account_info(),
        ctx.accounts.strategy_underlying_account.to_account_info(),
        ctx.accounts.underlying_token_account.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
    ];

    if target_debt > strategy_data.current_debt {
        let to_deploy = debt_increase_amount(
            strategy_data.current_debt,
            target_debt,
            strategy_data.max_debt,
            vault.total_idle,
            vault.minimum_total_idle,
        );
        if to_deploy > 0 {
            transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.underlying_token_account.to_account_info(),
                        to: ctx.accounts.strategy_underlying_account.to_account_info(),
                        authority: vault.to_account_info(),
                    },
                    signer_seeds,
                ),
                to_deploy,
            )?;
            ctx.accounts.underlying_token_account.reload()?;
            let balance_before = ctx.accounts.underlying_token_account.amount;
            call_deploy_funds(
                &ctx.accounts.strategy_program.to_account_info(),
                &strategy_accounts,
                to_deploy,
            )?;
            ctx.accounts.underlying_token_account.reload()?;
            // the strategy sends back in-instruction whatever it refuses, only
            // what stayed behind is booked as debt
            let returned = ctx.accounts.underlying_token_account.amount - balance_before;
            let realized = to_deploy - returned;
            strategy_data.current_debt += realized;
            vault.handle_debt_increase(realized);
        }
    } else {
        let to_free = debt_decrease_amount(strategy_data.current_debt, target_debt);
        let balance_before = ctx.accounts.underlying_token_account.amount;
        call_free_funds(
            &ctx.accounts.strategy_program.to_account_info(),
            &strategy_accounts,
            to_free,
        )?;
        ctx.accounts.underlying_token_account.reload()?;
        // debt only drops by what actually came back; shortfalls stay booked
        // until the next report realizes them as a loss
        let freed = ctx.accounts.underlying_token_account.amount - balance_before;
        strategy_data.current_debt -= freed;
        vault.handle_debt_decrease(freed);
    }

    strategy_data.last_update = now;

    emit!(UpdatedCurrentDebtForStrategyEvent {
        vault_key: vault.key(),
        strategy_key: strategy_data.strategy,
        requested_debt: target_debt,
        new_debt: strategy_data.current_debt,
        total_idle: vault.total_idle,
        total_debt: vault.total_debt,
    });

    Ok(())
}
