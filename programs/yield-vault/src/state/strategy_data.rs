use anchor_lang::prelude::*;

/// per vault<->strategy pairing, PDA("strategy_data", vault, strategy)
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct StrategyData {
    pub vault: Pubkey,

    /// the external strategy state account (owned by strategy_program)
    pub strategy: Pubkey,

    /// program code implementing the deploy/free/report interface for `strategy`
    pub strategy_program: Pubkey,

    /// underlying units the vault believes are deployed in this strategy
    /// invariant: sum(current_debt) over the vault's strategies == vault.total_debt
    pub current_debt: u64,

    /// ceiling for current_debt, set when the strategy is added
    pub max_debt: u64,

    /// performance fee taken from reported profit, scoped to this strategy
    pub performance_fee_bp: u16,

    /// timestamp of the last report or debt change
    pub last_update: u64,
}
