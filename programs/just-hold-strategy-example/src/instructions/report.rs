use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::events::StrategyReportEvent;
use crate::state::common_strategy_state::CommonStrategyState;

// permissionless, account order matches the vault's report CPI:
// state, strategy token account
#[derive(Accounts)]
pub struct Report<'info> {
    #[account(mut)]
    pub strat_state: Account<'info, CommonStrategyState>,

    #[account(address = strat_state.underlying_account)]
    pub strat_underlying_account: Account<'info, TokenAccount>,
}

pub fn handle_report(ctx: Context<Report>) -> Result<()> {
    // see if some nice soul donated to our token account
    let actual = ctx.accounts.strat_underlying_account.amount;
    let strat_state = &mut ctx.accounts.strat_state;
    let old_total_assets = strat_state.total_assets;

    let (profit, loss) = if actual >= strat_state.idle_underlying {
        (actual - strat_state.idle_underlying, 0)
    } else {
        (0, strat_state.idle_underlying - actual)
    };

    strat_state.total_assets = strat_state.total_assets + profit - loss;
    strat_state.idle_underlying = actual;

    emit!(StrategyReportEvent {
        strat_state: strat_state.key(),
        underlying_mint: strat_state.underlying_mint,
        old_total_assets,
        profit,
        loss,
    });

    Ok(())
}
