use anchor_lang::prelude::*;

/// per vault<->user policy record, PDA("user_data", vault, user)
/// created on first deposit, or by the admin when attesting whitelist/KYC status
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct UserData {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub whitelisted: bool,
    pub kyc_verified: bool,
    /// net underlying deposited, checked against vault.user_deposit_limit
    pub total_deposited: u64,
}

impl UserData {
    pub fn handle_deposit(&mut self, amount: u64) {
        self.total_deposited += amount;
    }

    pub fn handle_withdraw(&mut self, amount: u64) {
        self.total_deposited = self.total_deposited.saturating_sub(amount);
    }
}
