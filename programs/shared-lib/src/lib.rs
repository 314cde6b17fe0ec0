pub const TWO_POW_32: u64 = 0x1_0000_0000; // 32-bit precision, to store a per-second unlocking rate in u64

pub const BASIS_POINTS_100_PERCENT: u16 = 10_000;

pub const ONE_BILLION: u64 = 1_000_000_000; // share price precision

pub fn mul_div(amount: u64, numerator: u64, denominator: u64) -> u64 {
    u64::try_from((amount as u128) * (numerator as u128) / (denominator as u128)).unwrap()
}

/// convert an underlying amount into a shares amount,
/// considering share price = free-assets / shares-supply
/// shares = amount / ( free-assets / shares-supply )
/// shares = amount * shares-supply / free-assets
/// if you add amount to free-assets and mint these shares, the share price does not change
pub fn underlying_to_shares(amount: u64, free_assets: u64, shares_supply: u64) -> u64 {
    if shares_supply == 0 {
        amount
    } else {
        mul_div(amount, shares_supply, free_assets)
    }
}

/// convert a shares amount into an underlying amount,
/// considering share price = free-assets / shares-supply
/// if you remove this amount from free-assets and burn the shares, the share price does not change
pub fn shares_to_underlying(shares: u64, free_assets: u64, shares_supply: u64) -> u64 {
    if shares_supply == 0 {
        shares
    } else {
        mul_div(shares, free_assets, shares_supply)
    }
}

/// share price scaled by ONE_BILLION, identity price when no shares exist
pub fn share_price(free_assets: u64, shares_supply: u64) -> u64 {
    if shares_supply == 0 {
        ONE_BILLION
    } else {
        mul_div(free_assets, ONE_BILLION, shares_supply)
    }
}

/// per-second unlocking rate with 32-bit precision
/// rate_p32 = locked-amount * 2^32 / unlock-period
pub fn unlocking_rate_p32(locked_amount: u64, unlock_period_seconds: u64) -> u64 {
    mul_div(locked_amount, TWO_POW_32, unlock_period_seconds)
}

/// still-locked amount at `now`, linear decay down to zero at `full_unlock_timestamp`
pub fn locked_amount(rate_p32: u64, full_unlock_timestamp: u64, now: u64) -> u64 {
    if now >= full_unlock_timestamp {
        0
    } else {
        mul_div(rate_p32, full_unlock_timestamp - now, TWO_POW_32)
    }
}

// apply basis points to an amount
pub fn apply_bp(amount: u64, bp: u16) -> u64 {
    mul_div(amount, bp as u64, BASIS_POINTS_100_PERCENT as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identity_price_on_empty_pool() {
        assert_eq!(underlying_to_shares(10_000_000_000, 0, 0), 10_000_000_000);
        assert_eq!(shares_to_underlying(5, 0, 0), 5);
        assert_eq!(share_price(0, 0), ONE_BILLION);
    }

    #[test]
    fn conversion_follows_price() {
        // pool with price 2.0: 200 free assets, 100 shares
        assert_eq!(underlying_to_shares(50, 200, 100), 25);
        assert_eq!(shares_to_underlying(25, 200, 100), 50);
        assert_eq!(share_price(200, 100), 2 * ONE_BILLION);
    }

    #[test]
    fn unlocking_rate_round_trip() {
        let locked = 5_000_000_000u64;
        let period = 7 * 24 * 60 * 60u64;
        let rate = unlocking_rate_p32(locked, period);
        let full_unlock = 1_700_000_000 + period;
        // fully locked at the start, fully unlocked at the end
        let at_start = locked_amount(rate, full_unlock, 1_700_000_000);
        assert!(locked - at_start <= period); // rounding loses at most 1 unit/second
        assert_eq!(locked_amount(rate, full_unlock, full_unlock), 0);
        assert_eq!(locked_amount(rate, full_unlock, full_unlock + 1), 0);
        // halfway through, half remains
        let at_half = locked_amount(rate, full_unlock, 1_700_000_000 + period / 2);
        assert!(at_half <= locked / 2 && locked / 2 - at_half <= period);
    }

    #[test]
    fn bp_application() {
        assert_eq!(apply_bp(10_000, 50), 50); // 0.5%
        assert_eq!(apply_bp(10_000, BASIS_POINTS_100_PERCENT), 10_000);
        assert_eq!(apply_bp(0, 100), 0);
    }

    proptest! {
        #[test]
        fn round_trip_never_gains(amount in 0u64..=1u64 << 40,
                                  free in 1u64..=1u64 << 40,
                                  supply in 1u64..=1u64 << 40) {
            let shares = underlying_to_shares(amount, free, supply);
            let back = shares_to_underlying(shares, free, supply);
            prop_assert!(back <= amount);
        }

        #[test]
        fn locked_amount_is_monotonic_in_time(locked in 0u64..=1u64 << 40,
                                              period in 1u64..=365 * 24 * 3600u64,
                                              t0 in 0u64..=1u64 << 32,
                                              dt in 0u64..=1u64 << 20) {
            let rate = unlocking_rate_p32(locked, period);
            let full_unlock = t0 + period;
            let earlier = locked_amount(rate, full_unlock, t0);
            let later = locked_amount(rate, full_unlock, t0 + dt);
            prop_assert!(later <= earlier);
            prop_assert!(earlier <= locked);
        }
    }
}
