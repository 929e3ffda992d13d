//! Read-only payroll reports.

use rust_decimal::Decimal;
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use schoolpay_db::models::advance::Advance;
use schoolpay_db::models::report::{GroupIncome, SettlementSummaryRow, TeacherDebt};
use schoolpay_db::models::salary_payment::SalaryPayment;
use schoolpay_db::models::settlement::MonthlySettlement;
use schoolpay_db::models::teacher::Teacher;
use schoolpay_db::repositories::{
    AdvanceRepo, EarningsRepo, ReportRepo, SalaryPaymentRepo, SettlementRepo,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::rates::{rates_for, require_teacher, ResolvedRates};
use crate::PayrollResult;

/// Everything known about one teacher's pay for one month.
#[derive(Debug, Clone, Serialize)]
pub struct TeacherReport {
    pub teacher: Teacher,
    pub month: PayPeriod,
    pub rates: ResolvedRates,
    /// `None` until the settlement has been calculated.
    pub settlement: Option<MonthlySettlement>,
    pub advances: Vec<Advance>,
    pub total_advances: Decimal,
    pub payments: Vec<SalaryPayment>,
    pub total_paid: Decimal,
    /// `final_salary - total_paid`; `None` without a settlement.
    pub remaining: Option<Decimal>,
    pub groups: Vec<GroupIncome>,
}

pub async fn teacher_report(
    pool: &PgPool,
    teacher_id: DbId,
    month: PayPeriod,
) -> PayrollResult<TeacherReport> {
    let teacher = require_teacher(pool, teacher_id).await?;
    let rates = rates_for(pool, teacher_id).await?;
    let settlement = SettlementRepo::find(pool, teacher_id, month).await?;
    let advances = AdvanceRepo::list_for_period(pool, teacher_id, month).await?;
    let groups = EarningsRepo::income_by_group(pool, teacher_id, month).await?;

    let payments = match &settlement {
        Some(s) => SalaryPaymentRepo::list_for_settlement(pool, s.id).await?,
        None => Vec::new(),
    };

    let total_advances: Decimal = advances.iter().map(|a| a.amount).sum();
    let total_paid: Decimal = payments.iter().map(|p| p.amount).sum();
    let remaining = settlement.as_ref().map(|s| s.final_salary - total_paid);

    tracing::debug!(
        teacher_id,
        month = %month,
        has_settlement = settlement.is_some(),
        advances = advances.len(),
        payments = payments.len(),
        "Teacher report built",
    );

    Ok(TeacherReport {
        teacher,
        month,
        rates,
        settlement,
        advances,
        total_advances,
        payments,
        total_paid,
        remaining,
        groups,
    })
}

/// Month-wide totals across all settlements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub teachers_count: usize,
    pub total_student_payments: Decimal,
    pub total_earned: Decimal,
    pub total_advances: Decimal,
    pub total_final_salary: Decimal,
    pub total_paid: Decimal,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

/// Fold settlement rows into a [`MonthlySummary`].
pub fn summarize(rows: &[SettlementSummaryRow]) -> MonthlySummary {
    rows.iter().fold(MonthlySummary::default(), |mut acc, row| {
        acc.teachers_count += 1;
        acc.total_student_payments += row.total_student_payments;
        acc.total_earned += row.total_earned;
        acc.total_advances += row.total_advances;
        acc.total_final_salary += row.final_salary;
        acc.total_paid += row.total_paid;
        if row.is_paid {
            acc.paid_count += 1;
        } else {
            acc.unpaid_count += 1;
        }
        acc
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyReport {
    pub month: PayPeriod,
    pub settlements: Vec<SettlementSummaryRow>,
    pub summary: MonthlySummary,
    pub previous_month: PayPeriod,
    /// Negative balances from the previous month.
    pub previous_month_debts: Vec<TeacherDebt>,
}

pub async fn all_teachers_report(pool: &PgPool, month: PayPeriod) -> PayrollResult<MonthlyReport> {
    let settlements = ReportRepo::list_month_summaries(pool, month).await?;
    let previous_month = month.previous();
    let previous_month_debts = ReportRepo::list_debts(pool, previous_month).await?;
    let summary = summarize(&settlements);

    tracing::debug!(
        month = %month,
        settlements = settlements.len(),
        previous_month_debts = previous_month_debts.len(),
        "Monthly report built",
    );

    Ok(MonthlyReport {
        month,
        settlements,
        summary,
        previous_month,
        previous_month_debts,
    })
}

/// Debts carried into `month` from the month before it.
#[derive(Debug, Clone, Serialize)]
pub struct DebtCheck {
    pub month: PayPeriod,
    pub previous_month: PayPeriod,
    pub has_debts: bool,
    pub debts: Vec<TeacherDebt>,
    /// Signed sum of the negative balances, so zero or below.
    pub total_debt: Decimal,
}

pub async fn check_debts(pool: &PgPool, month: PayPeriod) -> PayrollResult<DebtCheck> {
    let previous_month = month.previous();
    let debts = ReportRepo::list_debts(pool, previous_month).await?;
    let total_debt: Decimal = debts.iter().map(|d| d.final_salary).sum();

    tracing::debug!(
        month = %month,
        previous_month = %previous_month,
        debts = debts.len(),
        total_debt = %total_debt,
        "Debt check",
    );

    Ok(DebtCheck {
        month,
        previous_month,
        has_debts: !debts.is_empty(),
        debts,
        total_debt,
    })
}
