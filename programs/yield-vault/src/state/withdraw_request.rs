use anchor_lang::prelude::*;

use crate::constants::DISCRIMINATOR_LEN;

/// escrow record for a pending withdrawal,
/// PDA("withdraw_request", vault, user, index)
/// created by request_withdraw, consumed exactly once by
/// fulfill_withdrawal_request or returned by cancel_withdrawal_request
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct WithdrawRequest {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub recipient: Pubkey,
    pub shares_account: Pubkey,
    /// underlying units desired, at request-time share price, net of fees
    pub requested_amount: u64,
    /// shares escrowed to cover requested_amount plus fee_shares
    pub locked_shares: u64,
    /// basis points of acceptable shortfall at fulfillment time
    pub max_loss: u64,
    pub fee_shares: u64,
    pub index: u64,
}

impl WithdrawRequest {
    pub const LEN: usize = DISCRIMINATOR_LEN + WithdrawRequest::INIT_SPACE;

    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        requested_amount: u64,
        vault: Pubkey,
        user: Pubkey,
        recipient: Pubkey,
        shares_account: Pubkey,
        locked_shares: u64,
        max_loss: u64,
        fee_shares: u64,
        index: u64,
    ) -> Result<()> {
        self.vault = vault;
        self.user = user;
        self.recipient = recipient;
        self.shares_account = shares_account;
        self.requested_amount = requested_amount;
        self.locked_shares = locked_shares;
        self.max_loss = max_loss;
        self.fee_shares = fee_shares;
        self.index = index;
        Ok(())
    }
}
