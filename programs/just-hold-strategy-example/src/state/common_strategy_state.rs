use anchor_lang::prelude::*;

// The leading fields up to idle_underlying are the common strategy state the
// vault program reads directly. Fields after that are private to this program
// and may differ between strategy implementations.
#[derive(InitSpace)]
#[account]
pub struct CommonStrategyState {
    pub underlying_mint: Pubkey,

    /// self-reported value of everything this strategy holds, in underlying units
    /// incremented when receiving tokens from the vault
    /// incremented when yield is acquired
    /// decremented on losses and when sending tokens back to the vault
    pub total_assets: u64,

    /// underlying sitting in the strategy's token account, not yet deployed
    /// anywhere (for this just-hold strategy, always equal to total_assets)
    pub idle_underlying: u64,

    /// token account where this strategy keeps its underlying
    pub underlying_account: Pubkey,
}
