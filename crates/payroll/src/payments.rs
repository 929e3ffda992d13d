//! Payment recorder: disbursements against a calculated settlement.

use rust_decimal::Decimal;
use schoolpay_core::error::CoreError;
use schoolpay_core::payroll::payment_status;
use schoolpay_core::validation::{require, require_period, validate_positive_amount};
use schoolpay_db::models::salary_payment::{NewSalaryPayment, RecordSalaryPayment, SalaryPayment};
use schoolpay_db::repositories::SalaryPaymentRepo;
use serde::Serialize;
use sqlx::PgPool;

use crate::rates::{require_teacher, require_user_ref};
use crate::PayrollResult;

/// Result of recording one disbursement.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub payment: SalaryPayment,
    pub total_paid: Decimal,
    pub remaining: Decimal,
    pub is_fully_paid: bool,
}

/// Record a disbursement against a teacher's settlement for a period.
///
/// The settlement must already exist; otherwise this fails with
/// `PreconditionFailed` and nothing is written.
pub async fn record_payment(
    pool: &PgPool,
    input: &RecordSalaryPayment,
) -> PayrollResult<PaymentReceipt> {
    let teacher_id = require(input.teacher_id, "teacher_id")?;
    let month = require_period(input.month.as_deref(), "month")?;
    let amount = require(input.amount, "amount")?;
    validate_positive_amount(amount, "amount")?;

    require_teacher(pool, teacher_id).await?;
    require_user_ref(pool, input.created_by).await?;

    let recorded = SalaryPaymentRepo::record(
        pool,
        &NewSalaryPayment {
            teacher_id,
            month,
            amount,
            description: input.description.clone(),
            created_by: input.created_by,
        },
    )
    .await?
    .ok_or_else(|| {
        CoreError::PreconditionFailed(format!(
            "No settlement for teacher {teacher_id} in {month}; calculate the settlement first"
        ))
    })?;

    let status = payment_status(recorded.settlement.final_salary, recorded.total_paid);

    tracing::info!(
        payment_id = recorded.payment.id,
        settlement_id = recorded.settlement.id,
        teacher_id,
        month = %month,
        amount = %recorded.payment.amount,
        total_paid = %status.total_paid,
        remaining = %status.remaining,
        is_fully_paid = status.is_fully_paid,
        "Salary payment recorded",
    );

    Ok(PaymentReceipt {
        payment: recorded.payment,
        total_paid: status.total_paid,
        remaining: status.remaining,
        is_fully_paid: status.is_fully_paid,
    })
}
