//! Settlement writer: compute a `(teacher, month)` settlement and upsert it.

use chrono::{NaiveDate, Utc};
use schoolpay_core::payroll::{self, SettlementInputs};
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use schoolpay_db::models::settlement::MonthlySettlement;
use schoolpay_db::models::teacher::Teacher;
use schoolpay_db::repositories::{AdvanceRepo, EarningsRepo, SettlementRepo};
use sqlx::PgPool;

use crate::rates::{rates_for, require_teacher};
use crate::PayrollResult;

/// Compute and store a teacher's settlement for `month`, with tenure measured
/// up to today.
///
/// Recalculating the same period replaces the stored computed fields, so
/// repeated calls with unchanged payments and advances give the same result.
pub async fn compute_settlement(
    pool: &PgPool,
    teacher_id: DbId,
    month: PayPeriod,
) -> PayrollResult<MonthlySettlement> {
    compute_settlement_as_of(pool, teacher_id, month, Utc::now().date_naive()).await
}

/// [`compute_settlement`] with an explicit date for the tenure calculation.
pub async fn compute_settlement_as_of(
    pool: &PgPool,
    teacher_id: DbId,
    month: PayPeriod,
    as_of: NaiveDate,
) -> PayrollResult<MonthlySettlement> {
    let teacher = require_teacher(pool, teacher_id).await?;
    compute_for_teacher(pool, &teacher, month, as_of).await
}

/// Gather the inputs for an already-resolved teacher, calculate, upsert.
pub(crate) async fn compute_for_teacher(
    pool: &PgPool,
    teacher: &Teacher,
    month: PayPeriod,
    as_of: NaiveDate,
) -> PayrollResult<MonthlySettlement> {
    let rates = rates_for(pool, teacher.id).await?;
    let collected = EarningsRepo::student_payment_totals(pool, teacher.id, month).await?;
    let total_advances = AdvanceRepo::total_for_period(pool, teacher.id, month).await?;
    let previous_final_salary =
        SettlementRepo::find_final_salary(pool, teacher.id, month.previous()).await?;

    let breakdown = payroll::calculate(&SettlementInputs {
        total_student_payments: collected.total_payments,
        students_count: collected.students_count,
        hire_date: teacher.hire_date,
        as_of,
        settings: rates.settings,
        total_advances,
        previous_final_salary,
    });

    let settlement = SettlementRepo::upsert(pool, teacher.id, month, &breakdown).await?;

    tracing::info!(
        settlement_id = settlement.id,
        teacher_id = teacher.id,
        month = %month,
        total_earned = %settlement.total_earned,
        total_advances = %settlement.total_advances,
        debt_from_previous = %settlement.debt_from_previous,
        final_salary = %settlement.final_salary,
        default_rates = rates.is_default,
        "Settlement calculated",
    );

    Ok(settlement)
}

/// An active teacher's settlements, newest period first.
pub async fn settlement_history(
    pool: &PgPool,
    teacher_id: DbId,
) -> PayrollResult<Vec<MonthlySettlement>> {
    require_teacher(pool, teacher_id).await?;
    Ok(SettlementRepo::list_for_teacher(pool, teacher_id).await?)
}
