//! Read-only projections used by payroll reports.

use rust_decimal::Decimal;
use schoolpay_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Collected student payments for a teacher and month.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct StudentPaymentTotals {
    pub total_payments: Decimal,
    pub students_count: i64,
}

/// Income collected by one of a teacher's groups in a month.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupIncome {
    pub group_id: DbId,
    pub group_name: String,
    pub students_count: i64,
    pub total_payments: Decimal,
}

/// A settlement joined with the teacher's name, for month-wide listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SettlementSummaryRow {
    pub settlement_id: DbId,
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub month: String,
    pub total_student_payments: Decimal,
    pub students_count: i64,
    pub total_earned: Decimal,
    pub total_advances: Decimal,
    pub debt_from_previous: Decimal,
    pub final_salary: Decimal,
    pub total_paid: Decimal,
    pub is_paid: bool,
    pub payment_date: Option<Timestamp>,
}

/// A negative settlement balance still owed by a teacher.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeacherDebt {
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub month: String,
    pub final_salary: Decimal,
}
