use anchor_lang::prelude::*;
use shared_lib::apply_bp;

/// fee policy record, PDA("accountant", authority)
/// fee shares accrue to this account's shares ATA; distribution of the
/// accrued fees is handled off-program by the authority
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Accountant {
    pub key: Pubkey,
    pub bump: u8,
    pub authority: Pubkey,
    pub entry_fee_bp: u16,
    pub redemption_fee_bp: u16,
}

impl Accountant {
    pub fn entry_fee(&self, amount: u64) -> u64 {
        apply_bp(amount, self.entry_fee_bp)
    }

    pub fn redemption_fee(&self, amount: u64) -> u64 {
        apply_bp(amount, self.redemption_fee_bp)
    }
}
