use anchor_lang::prelude::*;

#[event]
pub struct VaultInitEvent {
    pub vault_key: Pubkey,
    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub underlying_decimals: u8,
    pub shares_mint: Pubkey,
    pub accountant: Pubkey,
    pub deposit_limit: u64,
    pub user_deposit_limit: u64,
    pub min_user_deposit: u64,
    pub minimum_total_idle: u64,
    pub profit_max_unlock_time: u64,
    pub kyc_verified_only: bool,
    pub whitelisted_only: bool,
    pub direct_deposit_enabled: bool,
    pub direct_withdraw_enabled: bool,
}

#[event]
pub struct VaultDepositEvent {
    pub vault_key: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub shares_minted: u64,
    pub fee_shares: u64,
    pub token_account: Pubkey,
    pub share_account: Pubkey,
    //--- share price components after the deposit
    pub total_idle: u64,
    pub total_debt: u64,
    pub total_shares: u64,
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultWithdrawEvent {
    pub vault_key: Pubkey,
    pub authority: Pubkey,
    pub assets_transferred: u64,
    pub shares_burned: u64,
    pub fee_shares: u64,
    pub token_account: Pubkey,
    //--- share price components after the withdraw
    pub total_idle: u64,
    pub total_debt: u64,
    pub total_shares: u64,
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct VaultAddStrategyEvent {
    pub vault_key: Pubkey,
    pub strategy_key: Pubkey,
    pub max_debt: u64,
    pub performance_fee_bp: u16,
    pub timestamp: i64,
}

#[event]
pub struct VaultRemoveStrategyEvent {
    pub vault_key: Pubkey,
    pub strategy_key: Pubkey,
    pub loss: u64,
    pub removed_at: i64,
}

#[event]
pub struct UpdatedCurrentDebtForStrategyEvent {
    pub vault_key: Pubkey,
    pub strategy_key: Pubkey,
    pub requested_debt: u64,
    pub new_debt: u64,
    pub total_idle: u64,
    pub total_debt: u64,
}

#[event]
pub struct StrategyReportedEvent {
    pub vault_key: Pubkey,
    pub strategy_key: Pubkey,
    pub gain: u64,
    pub loss: u64,
    pub current_debt: u64,
    pub fee_shares: u64,
    pub locked_profit: u64,
    pub total_shares: u64,
    pub share_price: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRequestedEvent {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub locked_shares: u64,
    pub fee_shares: u64,
    pub max_loss: u64,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRequestCanceledEvent {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawalRequestFulfilledEvent {
    pub vault: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub index: u64,
    pub timestamp: i64,
}

#[event]
pub struct WhitelistUpdatedEvent {
    pub vault_key: Pubkey,
    pub user: Pubkey,
    pub whitelisted: bool,
}

#[event]
pub struct KycUpdatedEvent {
    pub vault_key: Pubkey,
    pub user: Pubkey,
    pub kyc_verified: bool,
}

#[event]
pub struct VaultShutDownEvent {
    pub vault_key: Pubkey,
    pub shutdown: bool,
}

#[event]
pub struct VaultPropertyUpdatedEvent {
    pub vault_key: Pubkey,
    pub property: VaultProperty,
    pub value: u64,
    pub timestamp: i64,
}

#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize)]
pub enum VaultProperty {
    DepositLimit,
    UserDepositLimit,
    MinUserDeposit,
    MinimumTotalIdle,
    ProfitMaxUnlockTime,
    WhitelistedOnly,
    KycVerifiedOnly,
    DirectDepositEnabled,
    DirectWithdrawEnabled,
    Accountant,
}

#[event]
pub struct VaultAccountantUpdatedEvent {
    pub vault_key: Pubkey,
    pub new_accountant: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct AccountantFeesUpdatedEvent {
    pub accountant_key: Pubkey,
    pub entry_fee_bp: u16,
    pub redemption_fee_bp: u16,
    pub timestamp: i64,
}
