//! Monthly salary calculation (pure logic).
//!
//! A settlement for month M is a function of the teacher's collected student
//! payments, their compensation settings, their tenure, the advances taken
//! against M and the signed balance left by month M-1. Nothing here touches
//! storage; callers gather the inputs and persist the breakdown.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::compensation::CompensationSettings;
use crate::money::{percent_of, round_money};

// ---------------------------------------------------------------------------
// Tenure
// ---------------------------------------------------------------------------

/// Length of a tenure month, in days.
pub const DAYS_PER_TENURE_MONTH: i64 = 30;

/// Whole 30-day months between the hire date and `as_of`.
///
/// A teacher without a recorded hire date has no tenure.
pub fn experience_months(hire_date: Option<NaiveDate>, as_of: NaiveDate) -> i32 {
    let Some(hired) = hire_date else {
        return 0;
    };
    let days = (as_of - hired).num_days();
    let months = days.div_euclid(DAYS_PER_TENURE_MONTH);
    i32::try_from(months).unwrap_or(if months < 0 { i32::MIN } else { i32::MAX })
}

// ---------------------------------------------------------------------------
// Earnings
// ---------------------------------------------------------------------------

/// What a teacher earned in a month before advances and carried debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Earnings {
    pub base_salary: Decimal,
    pub experience_months: i32,
    pub experience_bonus: Decimal,
    pub other_bonuses: Decimal,
    pub total_earned: Decimal,
}

/// Apply the base share, the tenure bonus and the flat bonus.
///
/// The experience bonus is paid only once tenure reaches the threshold; the
/// flat bonus is always paid. Both are percentages of the base salary.
pub fn compute_earnings(
    total_payments: Decimal,
    hire_date: Option<NaiveDate>,
    as_of: NaiveDate,
    settings: &CompensationSettings,
) -> Earnings {
    let base_salary = percent_of(total_payments, settings.base_percentage);
    let experience_months = experience_months(hire_date, as_of);

    let experience_bonus = if experience_months >= settings.experience_bonus_threshold_months {
        percent_of(base_salary, settings.experience_bonus_rate)
    } else {
        Decimal::ZERO
    };
    let other_bonuses = percent_of(base_salary, settings.bonus_percentage);

    Earnings {
        base_salary,
        experience_months,
        experience_bonus,
        other_bonuses,
        total_earned: base_salary + experience_bonus + other_bonuses,
    }
}

// ---------------------------------------------------------------------------
// Debt carry-forward
// ---------------------------------------------------------------------------

/// The amount carried into this month from the previous month's balance.
///
/// Only a negative previous `final_salary` is carried, and it is carried with
/// its sign: the result is always `<= 0`.
pub fn carried_debt(previous_final_salary: Option<Decimal>) -> Decimal {
    match previous_final_salary {
        Some(balance) if balance < Decimal::ZERO => balance,
        _ => Decimal::ZERO,
    }
}

/// `total_earned - total_advances + debt_from_previous`.
pub fn final_salary(
    total_earned: Decimal,
    total_advances: Decimal,
    debt_from_previous: Decimal,
) -> Decimal {
    round_money(total_earned - total_advances + debt_from_previous)
}

// ---------------------------------------------------------------------------
// Full settlement
// ---------------------------------------------------------------------------

/// Everything the calculator needs for one (teacher, month).
#[derive(Debug, Clone, Copy)]
pub struct SettlementInputs {
    pub total_student_payments: Decimal,
    pub students_count: i64,
    pub hire_date: Option<NaiveDate>,
    pub as_of: NaiveDate,
    pub settings: CompensationSettings,
    pub total_advances: Decimal,
    /// `final_salary` of the previous month's settlement, if one exists.
    pub previous_final_salary: Option<Decimal>,
}

/// The computed fields of a monthly settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettlementBreakdown {
    pub total_student_payments: Decimal,
    pub students_count: i64,
    pub experience_months: i32,
    pub base_salary: Decimal,
    pub experience_bonus: Decimal,
    pub other_bonuses: Decimal,
    pub total_earned: Decimal,
    pub total_advances: Decimal,
    pub debt_from_previous: Decimal,
    pub final_salary: Decimal,
}

/// Compute a settlement breakdown.
pub fn calculate(inputs: &SettlementInputs) -> SettlementBreakdown {
    let earnings = compute_earnings(
        inputs.total_student_payments,
        inputs.hire_date,
        inputs.as_of,
        &inputs.settings,
    );
    let debt_from_previous = carried_debt(inputs.previous_final_salary);

    SettlementBreakdown {
        total_student_payments: inputs.total_student_payments,
        students_count: inputs.students_count,
        experience_months: earnings.experience_months,
        base_salary: earnings.base_salary,
        experience_bonus: earnings.experience_bonus,
        other_bonuses: earnings.other_bonuses,
        total_earned: earnings.total_earned,
        total_advances: inputs.total_advances,
        debt_from_previous,
        final_salary: final_salary(earnings.total_earned, inputs.total_advances, debt_from_previous),
    }
}

// ---------------------------------------------------------------------------
// Disbursement status
// ---------------------------------------------------------------------------

/// Where a settlement stands after a set of disbursements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentStatus {
    pub total_paid: Decimal,
    pub remaining: Decimal,
    pub is_fully_paid: bool,
}

/// A settlement is fully paid once cumulative disbursements reach its
/// `final_salary`. `remaining` is not clamped.
pub fn payment_status(final_salary: Decimal, total_paid: Decimal) -> PaymentStatus {
    PaymentStatus {
        total_paid,
        remaining: final_salary - total_paid,
        is_fully_paid: total_paid >= final_salary,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Months;

    use super::*;

    fn d(v: i64) -> Decimal {
        Decimal::from(v)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn inputs(total_payments: i64) -> SettlementInputs {
        SettlementInputs {
            total_student_payments: d(total_payments),
            students_count: 0,
            hire_date: None,
            as_of: today(),
            settings: CompensationSettings::default(),
            total_advances: Decimal::ZERO,
            previous_final_salary: None,
        }
    }

    // -- tenure --

    #[test]
    fn missing_hire_date_has_no_tenure() {
        assert_eq!(experience_months(None, today()), 0);
    }

    #[test]
    fn tenure_floors_thirty_day_months() {
        let as_of = today();
        assert_eq!(experience_months(Some(as_of - chrono::Days::new(59)), as_of), 1);
        assert_eq!(experience_months(Some(as_of - chrono::Days::new(60)), as_of), 2);
        assert_eq!(experience_months(Some(as_of), as_of), 0);
    }

    #[test]
    fn future_hire_date_gives_negative_tenure() {
        let as_of = today();
        assert_eq!(experience_months(Some(as_of + chrono::Days::new(1)), as_of), -1);
    }

    // -- earnings --

    #[test]
    fn default_rates_pay_half_of_collected_payments() {
        let b = calculate(&inputs(1_000_000));
        assert_eq!(b.base_salary, d(500_000));
        assert_eq!(b.experience_bonus, Decimal::ZERO);
        assert_eq!(b.other_bonuses, Decimal::ZERO);
        assert_eq!(b.total_earned, d(500_000));
        assert_eq!(b.final_salary, d(500_000));
    }

    #[test]
    fn experience_bonus_applies_at_threshold() {
        let as_of = today();
        let seven_months_ago = as_of.checked_sub_months(Months::new(7)).unwrap();
        let e = compute_earnings(
            d(1_000_000),
            Some(seven_months_ago),
            as_of,
            &CompensationSettings::default(),
        );
        assert_eq!(e.base_salary, d(500_000));
        assert!(e.experience_months >= 6);
        assert_eq!(e.experience_bonus, d(25_000));
        assert_eq!(e.total_earned, d(525_000));
    }

    #[test]
    fn experience_bonus_withheld_below_threshold() {
        let as_of = today();
        let five_months_ago = as_of.checked_sub_months(Months::new(5)).unwrap();
        let e = compute_earnings(
            d(1_000_000),
            Some(five_months_ago),
            as_of,
            &CompensationSettings::default(),
        );
        assert_eq!(e.experience_months, 5);
        assert_eq!(e.experience_bonus, Decimal::ZERO);
    }

    #[test]
    fn flat_bonus_applies_regardless_of_tenure() {
        let settings = CompensationSettings {
            bonus_percentage: d(10),
            ..CompensationSettings::default()
        };
        let e = compute_earnings(d(200_000), None, today(), &settings);
        assert_eq!(e.base_salary, d(100_000));
        assert_eq!(e.other_bonuses, d(10_000));
        assert_eq!(e.total_earned, d(110_000));
    }

    #[test]
    fn total_earned_is_sum_of_components() {
        let as_of = today();
        let settings = CompensationSettings {
            base_percentage: Decimal::new(425, 1),
            bonus_percentage: Decimal::new(75, 1),
            experience_bonus_threshold_months: 1,
            experience_bonus_rate: Decimal::new(33, 1),
        };
        let hired = as_of.checked_sub_months(Months::new(24)).unwrap();
        let e = compute_earnings(Decimal::new(123_456_78, 2), Some(hired), as_of, &settings);
        assert_eq!(e.total_earned, e.base_salary + e.experience_bonus + e.other_bonuses);
    }

    // -- debt & final salary --

    #[test]
    fn only_negative_previous_balance_is_carried() {
        assert_eq!(carried_debt(None), Decimal::ZERO);
        assert_eq!(carried_debt(Some(Decimal::ZERO)), Decimal::ZERO);
        assert_eq!(carried_debt(Some(d(40_000))), Decimal::ZERO);
        assert_eq!(carried_debt(Some(d(-30_000))), d(-30_000));
    }

    #[test]
    fn debt_carry_forward_reduces_final_salary() {
        let b = calculate(&SettlementInputs {
            total_advances: d(100_000),
            previous_final_salary: Some(d(-30_000)),
            ..inputs(1_000_000)
        });
        assert_eq!(b.total_earned, d(500_000));
        assert_eq!(b.debt_from_previous, d(-30_000));
        assert_eq!(b.final_salary, d(370_000));
    }

    #[test]
    fn no_payments_leaves_only_advances_and_debt() {
        let b = calculate(&SettlementInputs {
            total_advances: d(50_000),
            previous_final_salary: Some(d(-20_000)),
            ..inputs(0)
        });
        assert_eq!(b.total_student_payments, Decimal::ZERO);
        assert_eq!(b.base_salary, Decimal::ZERO);
        assert_eq!(b.experience_bonus, Decimal::ZERO);
        assert_eq!(b.other_bonuses, Decimal::ZERO);
        assert_eq!(b.total_earned, Decimal::ZERO);
        assert_eq!(b.final_salary, d(-70_000));
    }

    #[test]
    fn negative_balance_threads_into_following_months() {
        // Month 1 ends negative, month 2 absorbs it, month 3 starts clean.
        let m1 = calculate(&SettlementInputs {
            total_advances: d(80_000),
            ..inputs(100_000)
        });
        assert_eq!(m1.final_salary, d(-30_000));

        let m2 = calculate(&SettlementInputs {
            previous_final_salary: Some(m1.final_salary),
            ..inputs(200_000)
        });
        assert_eq!(m2.debt_from_previous, d(-30_000));
        assert_eq!(m2.final_salary, d(70_000));

        let m3 = calculate(&SettlementInputs {
            previous_final_salary: Some(m2.final_salary),
            ..inputs(200_000)
        });
        assert_eq!(m3.debt_from_previous, Decimal::ZERO);
        assert_eq!(m3.final_salary, d(100_000));
    }

    #[test]
    fn calculation_is_deterministic() {
        let i = SettlementInputs {
            total_advances: d(12_345),
            previous_final_salary: Some(d(-1)),
            ..inputs(987_654)
        };
        assert_eq!(calculate(&i), calculate(&i));
    }

    // -- payment status --

    #[test]
    fn partial_then_full_payment() {
        let first = payment_status(d(370_000), d(200_000));
        assert!(!first.is_fully_paid);
        assert_eq!(first.remaining, d(170_000));

        let second = payment_status(d(370_000), d(370_000));
        assert!(second.is_fully_paid);
        assert_eq!(second.remaining, Decimal::ZERO);
    }

    #[test]
    fn overpayment_reports_negative_remaining() {
        let s = payment_status(d(100), d(150));
        assert!(s.is_fully_paid);
        assert_eq!(s.remaining, d(-50));
    }
}
