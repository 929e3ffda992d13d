//! Cash advances against a settlement period.

use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use schoolpay_core::validation::{require, require_period, validate_positive_amount};
use schoolpay_db::models::advance::{Advance, CreateAdvance, NewAdvance};
use schoolpay_db::repositories::AdvanceRepo;
use sqlx::PgPool;

use crate::rates::{require_teacher, require_user_ref};
use crate::PayrollResult;

/// Issue an advance to an active teacher.
///
/// Fails with a validation error when `teacher_id`, `amount` or `month` is
/// missing, the amount is not a positive whole-cent value that fits storage,
/// or the month is not `YYYY-MM`. An unknown `issued_by` is `NotFound`.
pub async fn give_advance(pool: &PgPool, input: &CreateAdvance) -> PayrollResult<Advance> {
    let teacher_id = require(input.teacher_id, "teacher_id")?;
    let amount = require(input.amount, "amount")?;
    validate_positive_amount(amount, "amount")?;
    let month = require_period(input.month.as_deref(), "month")?;

    require_teacher(pool, teacher_id).await?;
    require_user_ref(pool, input.issued_by).await?;

    let advance = AdvanceRepo::create(
        pool,
        &NewAdvance {
            teacher_id,
            amount,
            month,
            description: input.description.clone(),
            issued_by: input.issued_by,
        },
    )
    .await?;

    tracing::info!(
        advance_id = advance.id,
        teacher_id,
        month = %month,
        amount = %advance.amount,
        issued_by = ?advance.issued_by,
        "Advance issued",
    );

    Ok(advance)
}

/// List an active teacher's advances for a period.
pub async fn list_advances(
    pool: &PgPool,
    teacher_id: DbId,
    month: PayPeriod,
) -> PayrollResult<Vec<Advance>> {
    require_teacher(pool, teacher_id).await?;
    Ok(AdvanceRepo::list_for_period(pool, teacher_id, month).await?)
}
