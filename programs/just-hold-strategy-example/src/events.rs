use anchor_lang::prelude::*;

#[event]
pub struct StrategyReportEvent {
    pub strat_state: Pubkey,
    pub underlying_mint: Pubkey,
    /// total_assets before this event
    pub old_total_assets: u64,
    /// underlying profit discovered
    pub profit: u64,
    /// underlying loss discovered
    pub loss: u64,
}
