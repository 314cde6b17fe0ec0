use crate::error::ErrorCode;
use anchor_lang::prelude::*;
use anchor_lang::solana_program::clock::Clock;
use shared_lib::BASIS_POINTS_100_PERCENT;

pub fn now_ts() -> Result<u64> {
    Ok(Clock::get()?.unix_timestamp as u64)
}

/// the realized shortfall versus the ideal amount must stay within `max_loss` basis points
pub fn check_max_loss(ideal_amount: u64, realized_amount: u64, max_loss_bp: u64) -> Result<()> {
    if realized_amount >= ideal_amount {
        return Ok(());
    }
    let loss = ideal_amount - realized_amount;
    require_gte!(
        max_loss_bp as u128 * ideal_amount as u128,
        loss as u128 * BASIS_POINTS_100_PERCENT as u128,
        ErrorCode::MaxLossExceeded
    );
    Ok(())
}

pub fn check_fee_bp(bp: u16, max_bp: u16) -> Result<()> {
    require_gte!(max_bp, bp, ErrorCode::FeeTooHigh);
    Ok(())
}

/// the caller's share balance must cover the shares about to be burned or escrowed
pub fn check_shares_balance(available: u64, needed: u64) -> Result<()> {
    require_gte!(available, needed, ErrorCode::InsufficientShares);
    Ok(())
}

/// underlying to move into a strategy: the target is capped by the strategy's
/// max_debt and by the idle reserve the vault is allowed to spend
pub fn debt_increase_amount(
    current_debt: u64,
    target_debt: u64,
    max_debt: u64,
    total_idle: u64,
    minimum_total_idle: u64,
) -> u64 {
    let capped_target = std::cmp::min(target_debt, max_debt);
    let wanted = capped_target.saturating_sub(current_debt);
    let spendable_idle = total_idle.saturating_sub(minimum_total_idle);
    std::cmp::min(wanted, spendable_idle)
}

/// underlying to request back from a strategy
pub fn debt_decrease_amount(current_debt: u64, target_debt: u64) -> u64 {
    current_debt.saturating_sub(target_debt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_loss_guard() {
        // no shortfall, always fine
        assert!(check_max_loss(1_000, 1_000, 0).is_ok());
        assert!(check_max_loss(1_000, 2_000, 0).is_ok());
        // 1% shortfall accepted at 100bp, rejected at 99bp
        assert!(check_max_loss(10_000, 9_900, 100).is_ok());
        assert!(check_max_loss(10_000, 9_900, 99).is_err());
        // zero tolerance
        assert!(check_max_loss(10_000, 9_999, 0).is_err());
    }

    #[test]
    fn insufficient_shares_rejected_before_any_mutation() {
        // guards run before the ledger is touched, so a short balance only errors
        assert!(check_shares_balance(999, 1_000).is_err());
        assert!(check_shares_balance(1_000, 1_000).is_ok());
        assert!(check_shares_balance(1_000, 0).is_ok());
    }

    #[test]
    fn debt_increase_capped_by_max_debt() {
        // requesting above max_debt realizes only up to max_debt
        assert_eq!(debt_increase_amount(0, 50_000, 30_000, 100_000, 0), 30_000);
        assert_eq!(debt_increase_amount(10_000, 50_000, 30_000, 100_000, 0), 20_000);
    }

    #[test]
    fn debt_increase_capped_by_idle() {
        assert_eq!(debt_increase_amount(0, 50_000, 50_000, 10_000, 0), 10_000);
        // the minimum idle reserve is never spent
        assert_eq!(debt_increase_amount(0, 50_000, 50_000, 10_000, 4_000), 6_000);
        assert_eq!(debt_increase_amount(0, 50_000, 50_000, 3_000, 4_000), 0);
    }

    #[test]
    fn debt_decrease_is_the_difference() {
        assert_eq!(debt_decrease_amount(30_000, 10_000), 20_000);
        assert_eq!(debt_decrease_amount(10_000, 10_000), 0);
        assert_eq!(debt_decrease_amount(10_000, 30_000), 0);
    }
}
