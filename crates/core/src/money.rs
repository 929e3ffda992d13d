//! Exact decimal money helpers.
//!
//! Amounts are stored as `NUMERIC(14,2)`; every computed amount is rounded to
//! cents with midpoints going away from zero, matching PostgreSQL's `round`.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept on stored amounts.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to cents.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percentage / 100`, rounded to cents.
pub fn percent_of(amount: Decimal, percentage: Decimal) -> Decimal {
    round_money(amount * percentage / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_whole_amount() {
        assert_eq!(percent_of(Decimal::from(1_000_000), Decimal::from(50)), Decimal::from(500_000));
    }

    #[test]
    fn percent_of_rounds_half_away_from_zero() {
        // 0.05 * 50% = 0.025 -> 0.03
        assert_eq!(percent_of(Decimal::new(5, 2), Decimal::from(50)), Decimal::new(3, 2));
        assert_eq!(percent_of(Decimal::new(-5, 2), Decimal::from(50)), Decimal::new(-3, 2));
    }

    #[test]
    fn fractional_percentages_are_exact() {
        // 12.5% of 80.00 = 10.00
        assert_eq!(percent_of(Decimal::from(80), Decimal::new(125, 1)), Decimal::from(10));
    }
}
