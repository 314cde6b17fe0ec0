use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::state::UserData;
use shared_lib::{
    locked_amount, share_price, shares_to_underlying, underlying_to_shares, unlocking_rate_p32,
    ONE_BILLION,
};

/// Vault ledger, PDA("vault", index)
#[account]
#[derive(Default, Debug, InitSpace)]
pub struct Vault {
    pub key: Pubkey,
    pub bump: u8,
    pub index: u64,

    pub admin: Pubkey,
    /// authority allowed to move debt between strategies and process reports,
    /// normally a DAO-authorized bot
    pub rebalancer_auth: Pubkey,

    pub underlying_mint: Pubkey,
    pub underlying_token_account: Pubkey,
    pub underlying_decimals: u8,
    pub shares_mint: Pubkey,
    /// fee-policy record receiving entry/redemption/performance fee shares
    pub accountant: Pubkey,

    /// underlying held directly by the vault, not deployed to any strategy
    /// invariant: total_idle + total_debt only decreases through a withdrawal,
    /// a loss report or a fee payout
    pub total_idle: u64,
    /// sum of StrategyData.current_debt over this vault's strategies
    pub total_debt: u64,
    /// shares_mint.supply mirror, kept by the ledger so share price math never
    /// reads a stale mint account
    /// invariant: total_shares == 0 <=> free_assets == 0
    pub total_shares: u64,
    pub strategies_amount: u8,

    pub deposit_limit: u64,
    pub user_deposit_limit: u64,
    pub min_user_deposit: u64,
    /// idle reserve the debt allocator is not allowed to spend
    pub minimum_total_idle: u64,

    /// seconds over which newly reported profit vests; 0 means instant vesting
    pub profit_max_unlock_time: u64,
    pub last_profit_update: u64,
    pub full_profit_unlock_date: u64,
    /// per-second unlocking rate with 32-bit precision
    pub profit_unlocking_rate: u64,

    pub kyc_verified_only: bool,
    pub whitelisted_only: bool,
    pub direct_deposit_enabled: bool,
    pub direct_withdraw_enabled: bool,
    pub is_shutdown: bool,
}

#[derive(Debug, Clone, AnchorSerialize, AnchorDeserialize)]
pub struct VaultConfig {
    pub accountant: Pubkey,
    pub rebalancer_auth: Pubkey,
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

impl Vault {
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        index: u64,
        bump: u8,
        key: Pubkey,
        admin: Pubkey,
        underlying_mint: Pubkey,
        underlying_decimals: u8,
        underlying_token_account: Pubkey,
        shares_mint: Pubkey,
        config: &VaultConfig,
    ) -> Result<()> {
        self.key = key;
        self.bump = bump;
        self.index = index;
        self.admin = admin;
        self.rebalancer_auth = config.rebalancer_auth;
        self.underlying_mint = underlying_mint;
        self.underlying_token_account = underlying_token_account;
        self.underlying_decimals = underlying_decimals;
        self.shares_mint = shares_mint;
        self.accountant = config.accountant;
        self.deposit_limit = config.deposit_limit;
        self.user_deposit_limit = config.user_deposit_limit;
        self.min_user_deposit = config.min_user_deposit;
        self.minimum_total_idle = config.minimum_total_idle;
        self.profit_max_unlock_time = config.profit_max_unlock_time;
        self.kyc_verified_only = config.kyc_verified_only;
        self.whitelisted_only = config.whitelisted_only;
        self.direct_deposit_enabled = config.direct_deposit_enabled;
        self.direct_withdraw_enabled = config.direct_withdraw_enabled;
        Ok(())
    }

    // ------------------
    // share price
    // ------------------

    pub fn total_assets(&self) -> u64 {
        self.total_idle + self.total_debt
    }

    /// portion of previously reported profit not yet vested into the share price
    pub fn locked_profit(&self, now: u64) -> u64 {
        locked_amount(self.profit_unlocking_rate, self.full_profit_unlock_date, now)
    }

    pub fn free_assets(&self, now: u64) -> u64 {
        self.total_assets() - self.locked_profit(now)
    }

    pub fn convert_to_shares(&self, amount: u64, now: u64) -> u64 {
        underlying_to_shares(amount, self.free_assets(now), self.total_shares)
    }

    pub fn convert_to_underlying(&self, shares: u64, now: u64) -> u64 {
        shares_to_underlying(shares, self.free_assets(now), self.total_shares)
    }

    /// scaled by 1e9, identity price (1e9) when no shares exist
    pub fn get_share_price(&self, now: u64) -> u64 {
        share_price(self.free_assets(now), self.total_shares)
    }

    // ------------------
    // policy gate
    // ------------------

    pub fn check_deposit_policy(&self, user_data: &UserData, amount: u64) -> Result<()> {
        if self.is_shutdown {
            return Err(ErrorCode::VaultShutdown.into());
        }
        if amount == 0 {
            return Err(ErrorCode::ZeroValue.into());
        }
        if self.kyc_verified_only && !user_data.kyc_verified {
            return Err(ErrorCode::KycRequired.into());
        }
        if self.whitelisted_only && !user_data.whitelisted {
            return Err(ErrorCode::NotWhitelisted.into());
        }
        if amount < self.min_user_deposit {
            return Err(ErrorCode::MinDepositNotReached.into());
        }
        if self.total_assets() + amount > self.deposit_limit {
            return Err(ErrorCode::ExceedDepositLimit.into());
        }
        if self.user_deposit_limit > 0 && user_data.total_deposited + amount > self.user_deposit_limit
        {
            return Err(ErrorCode::ExceedDepositLimit.into());
        }
        Ok(())
    }

    /// the queue only takes new requests while the vault is live and instant
    /// withdrawals are off; pending requests stay servable after shutdown
    pub fn check_withdraw_request_policy(&self) -> Result<()> {
        if self.is_shutdown {
            return Err(ErrorCode::VaultShutdown.into());
        }
        if self.direct_withdraw_enabled {
            return Err(ErrorCode::WithdrawRequestsDisabled.into());
        }
        Ok(())
    }

    // ------------------
    // ledger bookkeeping
    // ------------------

    pub fn handle_deposit(&mut self, amount: u64, user_shares: u64, fee_shares: u64) {
        self.total_idle += amount;
        self.total_shares += user_shares + fee_shares;
    }

    /// direct-deposit path: the realized part went straight into a strategy,
    /// only the remainder lands in the idle reserve
    pub fn handle_direct_deposit(
        &mut self,
        deployed: u64,
        remainder: u64,
        user_shares: u64,
        fee_shares: u64,
    ) {
        self.total_debt += deployed;
        self.total_idle += remainder;
        self.total_shares += user_shares + fee_shares;
    }

    pub fn handle_withdraw(&mut self, assets: u64, shares_burned: u64) {
        self.total_idle -= assets;
        self.total_shares -= shares_burned;
    }

    pub fn handle_debt_increase(&mut self, realized: u64) {
        self.total_idle -= realized;
        self.total_debt += realized;
    }

    pub fn handle_debt_decrease(&mut self, freed: u64) {
        self.total_debt -= freed;
        self.total_idle += freed;
    }

    // ------------------
    // report processing
    // ------------------

    /// fold a reported gain into the ledger; the performance fee is assessed at
    /// the pre-report share price and returned as shares to mint for the
    /// accountant, the rest of the gain is re-spread over the vesting window
    pub fn process_profit(&mut self, gain: u64, fee_amount: u64, now: u64) -> u64 {
        let fee_shares = self.convert_to_shares(fee_amount, now);
        let remaining_locked = self.locked_profit(now);

        self.total_debt += gain;
        if self.profit_max_unlock_time > 0 {
            let new_locked = remaining_locked + (gain - fee_amount);
            self.profit_unlocking_rate = unlocking_rate_p32(new_locked, self.profit_max_unlock_time);
            self.full_profit_unlock_date = now + self.profit_max_unlock_time;
        }
        // with profit_max_unlock_time == 0 the gain is realized immediately:
        // free_assets jumps by the full delta in this same transaction

        self.total_shares += fee_shares;
        self.last_profit_update = now;
        fee_shares
    }

    /// losses are absorbed first by cancelling outstanding locked profit, and
    /// only the uncovered part reduces free assets (and so the share price)
    pub fn process_loss(&mut self, loss: u64, now: u64) {
        let remaining_locked = self.locked_profit(now);
        let absorbed = std::cmp::min(loss, remaining_locked);

        self.total_debt -= loss;

        let new_locked = remaining_locked - absorbed;
        if new_locked > 0 && self.full_profit_unlock_date > now {
            // re-spread what is left of the schedule over the remaining window
            self.profit_unlocking_rate =
                unlocking_rate_p32(new_locked, self.full_profit_unlock_date - now);
        } else {
            self.profit_unlocking_rate = 0;
            self.full_profit_unlock_date = 0;
        }
        self.last_profit_update = now;
    }
}

pub const IDENTITY_SHARE_PRICE: u64 = ONE_BILLION;

#[cfg(test)]
mod tests {
    use super::*;
    use shared_lib::apply_bp;

    const T0: u64 = 1_700_000_000;

    fn open_vault() -> Vault {
        Vault {
            deposit_limit: u64::MAX / 2,
            ..Default::default()
        }
    }

    fn vault_with(idle: u64, debt: u64, shares: u64) -> Vault {
        Vault {
            total_idle: idle,
            total_debt: debt,
            total_shares: shares,
            deposit_limit: u64::MAX / 2,
            ..Default::default()
        }
    }

    #[test]
    fn deposit_into_empty_vault_mints_one_to_one() {
        // scenario 1: 10_000000000 units at identity price, zero fees
        let mut vault = open_vault();
        let amount = 10_000_000_000u64;
        let user = UserData::default();
        vault.check_deposit_policy(&user, amount).unwrap();

        let shares = vault.convert_to_shares(amount, T0);
        assert_eq!(shares, amount);
        vault.handle_deposit(amount, shares, 0);
        assert_eq!(vault.total_idle, amount);
        assert_eq!(vault.total_shares, amount);
        assert_eq!(vault.get_share_price(T0), IDENTITY_SHARE_PRICE);
    }

    #[test]
    fn deposit_policy_rejections() {
        let mut vault = open_vault();
        vault.min_user_deposit = 1_000;
        let user = UserData::default();

        assert!(vault.check_deposit_policy(&user, 0).is_err()); // ZeroValue
        assert!(vault.check_deposit_policy(&user, 999).is_err()); // MinDepositNotReached
        assert!(vault.check_deposit_policy(&user, 1_000).is_ok());

        vault.deposit_limit = 5_000;
        assert!(vault.check_deposit_policy(&user, 6_000).is_err()); // ExceedDepositLimit

        vault.deposit_limit = u64::MAX / 2;
        vault.whitelisted_only = true;
        assert!(vault.check_deposit_policy(&user, 1_000).is_err()); // NotWhitelisted
        let whitelisted = UserData {
            whitelisted: true,
            ..Default::default()
        };
        assert!(vault.check_deposit_policy(&whitelisted, 1_000).is_ok());

        vault.kyc_verified_only = true;
        assert!(vault.check_deposit_policy(&whitelisted, 1_000).is_err()); // KycRequired

        vault.is_shutdown = true;
        assert!(vault.check_deposit_policy(&whitelisted, 1_000).is_err()); // VaultShutdown
    }

    #[test]
    fn per_user_limit_tracks_prior_deposits() {
        let mut vault = open_vault();
        vault.user_deposit_limit = 10_000;
        let user = UserData {
            total_deposited: 8_000,
            ..Default::default()
        };
        assert!(vault.check_deposit_policy(&user, 2_000).is_ok());
        assert!(vault.check_deposit_policy(&user, 2_001).is_err());
    }

    #[test]
    fn withdraw_request_gate() {
        let mut vault = open_vault();
        assert!(vault.check_withdraw_request_policy().is_ok());

        // queue closes while instant withdrawals are on
        vault.direct_withdraw_enabled = true;
        assert!(vault.check_withdraw_request_policy().is_err());
        vault.direct_withdraw_enabled = false;

        // no new requests on a shut-down vault
        vault.is_shutdown = true;
        assert!(vault.check_withdraw_request_policy().is_err());
    }

    #[test]
    fn instant_profit_jumps_share_price() {
        // scenario 2: report 5_000000000 profit with profit_max_unlock_time = 0
        let mut vault = vault_with(10_000_000_000, 0, 10_000_000_000);
        let before = vault.get_share_price(T0);
        let fee_shares = vault.process_profit(5_000_000_000, 0, T0);
        assert_eq!(fee_shares, 0);
        assert!(vault.get_share_price(T0) > before);
        assert_eq!(vault.get_share_price(T0), IDENTITY_SHARE_PRICE * 3 / 2);
    }

    #[test]
    fn vested_profit_unlocks_gradually() {
        // scenario 3: same report with a 7-day unlock window
        let unlock = 7 * 24 * 3600u64;
        let mut vault = vault_with(10_000_000_000, 0, 10_000_000_000);
        vault.profit_max_unlock_time = unlock;

        let before = vault.get_share_price(T0);
        vault.process_profit(5_000_000_000, 0, T0);

        let at_report = vault.get_share_price(T0);
        assert_eq!(at_report, before); // everything still locked
        let halfway = vault.get_share_price(T0 + unlock / 2);
        assert!(halfway > before);
        assert!(halfway < IDENTITY_SHARE_PRICE * 3 / 2);
        // converges to the full increase once the window elapses
        assert_eq!(vault.locked_profit(T0 + unlock), 0);
        assert_eq!(vault.get_share_price(T0 + unlock), IDENTITY_SHARE_PRICE * 3 / 2);
    }

    #[test]
    fn repeated_profit_respreads_remaining_locked() {
        let unlock = 1_000u64;
        let mut vault = vault_with(0, 10_000, 10_000);
        vault.profit_max_unlock_time = unlock;

        vault.process_profit(1_000, 0, T0);
        let locked_mid = vault.locked_profit(T0 + 500);
        assert!(locked_mid <= 500 && locked_mid >= 499);

        // second report halfway through: remaining 500 + new 1_000 over a fresh window
        vault.process_profit(1_000, 0, T0 + 500);
        let relocked = vault.locked_profit(T0 + 500);
        assert!(relocked >= 1_499 && relocked <= 1_500);
        assert_eq!(vault.full_profit_unlock_date, T0 + 500 + unlock);
        assert_eq!(vault.locked_profit(T0 + 500 + unlock), 0);
    }

    #[test]
    fn loss_drops_share_price() {
        // scenario 4: a loss strictly decreases the price with nothing locked
        let mut vault = vault_with(5_000_000_000, 10_000_000_000, 15_000_000_000);
        let before = vault.get_share_price(T0);
        vault.process_loss(5_000_000_000, T0);
        assert!(vault.get_share_price(T0) < before);
        assert_eq!(vault.total_debt, 5_000_000_000);
    }

    #[test]
    fn loss_fully_absorbed_by_locked_profit_keeps_price() {
        let unlock = 1_000u64;
        let mut vault = vault_with(0, 10_000, 10_000);
        vault.profit_max_unlock_time = unlock;
        vault.process_profit(2_000, 0, T0);

        let price_before = vault.get_share_price(T0);
        vault.process_loss(1_000, T0); // locked is ~2_000, covers it
        assert_eq!(vault.get_share_price(T0), price_before);
        assert_eq!(vault.total_debt, 11_000);
        // the cancelled profit never vests
        assert!(vault.locked_profit(T0 + unlock / 2) <= 500);
    }

    #[test]
    fn loss_beyond_locked_profit_hits_price() {
        let unlock = 1_000u64;
        let mut vault = vault_with(0, 10_000, 10_000);
        vault.profit_max_unlock_time = unlock;
        vault.process_profit(1_000, 0, T0);

        let price_before = vault.get_share_price(T0);
        vault.process_loss(3_000, T0); // only 1_000 covered
        assert!(vault.get_share_price(T0) < price_before);
        assert_eq!(vault.profit_unlocking_rate, 0);
        assert_eq!(vault.locked_profit(T0), 0);
    }

    #[test]
    fn performance_fee_shares_preserve_user_price() {
        let unlock = 1_000u64;
        let mut vault = vault_with(0, 10_000_000, 10_000_000);
        vault.profit_max_unlock_time = unlock;

        let gain = 1_000_000u64;
        let fee_amount = apply_bp(gain, 1_000); // 10%
        let price_before = vault.get_share_price(T0);
        let fee_shares = vault.process_profit(gain, fee_amount, T0);

        assert!(fee_shares > 0);
        // fee dilution exactly offsets the unlocked fee portion
        assert_eq!(vault.get_share_price(T0), price_before);
        // and the accountant's shares vest into the fee value over the window
        let fee_value_at_unlock = vault.convert_to_underlying(fee_shares, T0 + unlock);
        assert!(fee_value_at_unlock >= fee_amount.saturating_sub(2));
    }

    #[test]
    fn report_replay_is_idempotent() {
        // once current_debt has moved to the reported value the delta is zero,
        // so replaying the same report must not change the ledger
        let mut vault = vault_with(0, 15_000, 10_000);
        let snapshot = (vault.total_debt, vault.total_shares, vault.get_share_price(T0));
        vault.process_profit(0, 0, T0);
        vault.process_loss(0, T0);
        assert_eq!(
            snapshot,
            (vault.total_debt, vault.total_shares, vault.get_share_price(T0))
        );
    }

    #[test]
    fn withdraw_round_trip_returns_deposit() {
        // deposit then withdraw everything, zero fees, zero price movement
        let mut vault = open_vault();
        let amount = 7_000_000_000u64;
        let shares = vault.convert_to_shares(amount, T0);
        vault.handle_deposit(amount, shares, 0);

        let owed = vault.convert_to_underlying(shares, T0);
        assert_eq!(owed, amount);
        vault.handle_withdraw(owed, shares);
        assert_eq!(vault.total_idle, 0);
        assert_eq!(vault.total_shares, 0);
        assert_eq!(vault.get_share_price(T0), IDENTITY_SHARE_PRICE);
    }

    #[test]
    fn share_price_non_decreasing_without_losses() {
        let unlock = 500u64;
        let mut vault = vault_with(1_000_000, 0, 1_000_000);
        vault.profit_max_unlock_time = unlock;

        let mut last_price = vault.get_share_price(T0);
        let mut now = T0;
        for round in 1..=5u64 {
            vault.process_profit(10_000 * round, 0, now);
            for dt in [1u64, 100, 250, unlock] {
                let p = vault.get_share_price(now + dt);
                assert!(p >= last_price);
                last_price = p;
            }
            now += unlock;
        }
    }
}
