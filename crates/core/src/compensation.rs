//! Teacher compensation settings and their defaults.
//!
//! A teacher without a settings row is paid on the defaults below. The
//! defaults are defined here and nowhere else.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::validate_percentage;

/// Default share of collected student payments paid to the teacher.
pub const DEFAULT_BASE_PERCENTAGE: i64 = 50;
/// Default flat bonus percentage applied on top of the base salary.
pub const DEFAULT_BONUS_PERCENTAGE: i64 = 0;
/// Default tenure (in 30-day months) required for the experience bonus.
pub const DEFAULT_EXPERIENCE_THRESHOLD_MONTHS: i32 = 6;
/// Default experience bonus, as a percentage of the base salary.
pub const DEFAULT_EXPERIENCE_BONUS_RATE: i64 = 5;

/// Effective compensation rates for one teacher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationSettings {
    pub base_percentage: Decimal,
    pub bonus_percentage: Decimal,
    pub experience_bonus_threshold_months: i32,
    pub experience_bonus_rate: Decimal,
}

impl Default for CompensationSettings {
    fn default() -> Self {
        Self {
            base_percentage: Decimal::from(DEFAULT_BASE_PERCENTAGE),
            bonus_percentage: Decimal::from(DEFAULT_BONUS_PERCENTAGE),
            experience_bonus_threshold_months: DEFAULT_EXPERIENCE_THRESHOLD_MONTHS,
            experience_bonus_rate: Decimal::from(DEFAULT_EXPERIENCE_BONUS_RATE),
        }
    }
}

impl CompensationSettings {
    /// Check every rate is a percentage and the threshold is not negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_percentage(self.base_percentage, "base_percentage")?;
        validate_percentage(self.bonus_percentage, "bonus_percentage")?;
        validate_percentage(self.experience_bonus_rate, "experience_bonus_rate")?;
        validate_threshold(self.experience_bonus_threshold_months)
    }
}

/// Validate an experience bonus threshold.
pub fn validate_threshold(months: i32) -> Result<(), CoreError> {
    if months < 0 {
        return Err(CoreError::Validation(format!(
            "experience_bonus_threshold_months must not be negative, got {months}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_rates() {
        let d = CompensationSettings::default();
        assert_eq!(d.base_percentage, Decimal::from(50));
        assert_eq!(d.bonus_percentage, Decimal::ZERO);
        assert_eq!(d.experience_bonus_threshold_months, 6);
        assert_eq!(d.experience_bonus_rate, Decimal::from(5));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let mut s = CompensationSettings::default();
        s.base_percentage = Decimal::from(120);
        assert!(s.validate().is_err());

        let mut s = CompensationSettings::default();
        s.experience_bonus_threshold_months = -1;
        assert!(s.validate().is_err());
    }
}
