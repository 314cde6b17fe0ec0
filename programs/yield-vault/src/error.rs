use anchor_lang::prelude::*;

// NOTE: Anchor adds 6000 to user error codes
#[error_code]
pub enum ErrorCode {
    #[msg("Vault was shutdown")]
    VaultShutdown, // 6000 0x1770

    #[msg("Zero value")]
    ZeroValue,

    #[msg("Min deposit not reached")]
    MinDepositNotReached,

    #[msg("Exceed deposit limit")]
    ExceedDepositLimit,

    #[msg("Only KYC verified users can deposit")]
    KycRequired,

    #[msg("Only whitelisted users can deposit")]
    NotWhitelisted,

    #[msg("Direct deposits are disabled")]
    DirectDepositDisabled,

    #[msg("Direct withdraws are disabled")]
    DirectWithdrawDisabled,

    #[msg("Withdraw requests are disabled while direct withdraws are enabled")]
    WithdrawRequestsDisabled,

    #[msg("Insufficient shares")]
    InsufficientShares,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Loss exceeds the accepted max_loss")]
    MaxLossExceeded,

    #[msg("Debt is the same")]
    SameDebt,

    #[msg("Invalid strategy data")]
    InvalidStrategyData,

    #[msg("Token account owner does not match the request recipient")]
    InvalidRecipient,

    #[msg("Strategy has debt")]
    StrategyHasDebt,

    #[msg("Vault has debt")]
    VaultHasDebt,

    #[msg("Vault is active")]
    VaultActive,

    #[msg("Vault still has shares outstanding")]
    VaultHasShares,

    #[msg("Fee is above the allowed maximum")]
    FeeTooHigh,

    #[msg("Can not deserialize external strategy state")]
    ErrDeserializingStrategyState,
}
