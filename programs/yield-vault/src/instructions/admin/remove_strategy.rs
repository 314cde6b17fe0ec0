use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::events::VaultRemoveStrategyEvent;
use crate::state::{StrategyData, Vault};
use crate::util::now_ts;

#[derive(Accounts)]
pub struct RemoveStrategy<'info> {
    #[account(mut, has_one = admin)]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        close = admin,
        constraint = strategy_data.vault == vault.key() @ErrorCode::InvalidStrategyData
    )]
    pub strategy_data: Account<'info, StrategyData>,

    #[account(mut)]
    pub admin: Signer<'info>,
}

pub fn handle_remove_strategy(ctx: Context<RemoveStrategy>, force: bool) -> Result<()> {
    let strategy_data = &ctx.accounts.strategy_data;
    let vault = &mut ctx.accounts.vault;

    let mut loss: u64 = 0;
    if strategy_data.current_debt > 0 {
        if !force {
            return Err(ErrorCode::StrategyHasDebt.into());
        }
        // forced removal writes the unrecovered debt off as a loss
        loss = strategy_data.current_debt;
    }

    let now = now_ts()?;
    if loss > 0 {
        vault.process_loss(loss, now);
    }
    vault.strategies_amount -= 1;

    emit!(VaultRemoveStrategyEvent {
        vault_key: vault.key(),
        strategy_key: strategy_data.strategy,
        loss,
        removed_at: now as i64,
    });

    Ok(())
}
