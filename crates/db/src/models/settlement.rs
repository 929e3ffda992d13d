//! Monthly settlement models.

use rust_decimal::Decimal;
use schoolpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A monthly_settlements row from the database.
///
/// Unique per `(teacher_id, month)`. Computed fields are replaced wholesale
/// every time the settlement is recalculated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MonthlySettlement {
    pub id: DbId,
    pub teacher_id: DbId,
    pub month: String,
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
    pub is_paid: bool,
    pub payment_date: Option<Timestamp>,
    pub calculated_at: Timestamp,
    pub created_at: Timestamp,
}

/// Request body naming one settlement period.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettlementPeriodRequest {
    pub teacher_id: Option<DbId>,
    pub month: Option<String>,
}

/// Request body for the all-teachers calculation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchPeriodRequest {
    pub month: Option<String>,
}
