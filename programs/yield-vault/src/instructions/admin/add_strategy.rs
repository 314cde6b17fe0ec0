use anchor_lang::prelude::*;

use crate::constants::{DISCRIMINATOR_LEN, MAX_PERFORMANCE_FEE_BP, STRATEGY_DATA_SEED};
use crate::error::ErrorCode;
use crate::events::VaultAddStrategyEvent;
use crate::state::{external::common_strategy_state, StrategyData, Vault};
use crate::util::{check_fee_bp, now_ts};

#[derive(Accounts)]
pub struct AddStrategy<'info> {
    #[account(mut, has_one = admin)]
    pub vault: Account<'info, Vault>,

    /// external strategy state, owned by strategy_program
    /// CHECK: manually deserialized, leading fields are the common strategy state
    #[account(owner = strategy_program.key())]
    pub strategy: UncheckedAccount<'info>,

    /// CHECK: program code implementing the deploy/free/report interface
    #[account(executable)]
    pub strategy_program: UncheckedAccount<'info>,

    #[account(
        init,
        seeds = [
            STRATEGY_DATA_SEED,
            vault.key().as_ref(),
            strategy.key().as_ref()
        ],
        bump,
        payer = admin,
        space = DISCRIMINATOR_LEN + StrategyData::INIT_SPACE,
    )]
    pub strategy_data: Account<'info, StrategyData>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handle_add_strategy(
    ctx: Context<AddStrategy>,
    max_debt: u64,
    performance_fee_bp: u16,
) -> Result<()> {
    check_fee_bp(performance_fee_bp, MAX_PERFORMANCE_FEE_BP)?;

    // the strategy must operate the same underlying as the vault
    let strategy_state = common_strategy_state::deserialize(&ctx.accounts.strategy)?;
    require_keys_eq!(
        strategy_state.underlying_mint,
        ctx.accounts.vault.underlying_mint,
        ErrorCode::InvalidStrategyData
    );

    let now = now_ts()?;
    ctx.accounts.strategy_data.set_inner(StrategyData {
        vault: ctx.accounts.vault.key(),
        strategy: ctx.accounts.strategy.key(),
        strategy_program: ctx.accounts.strategy_program.key(),
        current_debt: 0,
        max_debt,
        performance_fee_bp,
        last_update: now,
    });

    ctx.accounts.vault.strategies_amount += 1;

    emit!(VaultAddStrategyEvent {
        vault_key: ctx.accounts.vault.key(),
        strategy_key: ctx.accounts.strategy.key(),
        max_debt,
        performance_fee_bp,
        timestamp: now as i64,
    });

    Ok(())
}
