//! Aggregates over the LMS student payment ledger.

use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{GroupIncome, StudentPaymentTotals};

/// Sums student payments attributable to a teacher's groups.
pub struct EarningsRepo;

impl EarningsRepo {
    /// Total collected and distinct paying students across the teacher's
    /// groups for a period. Both are zero when nothing was collected.
    pub async fn student_payment_totals(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<StudentPaymentTotals, sqlx::Error> {
        sqlx::query_as::<_, StudentPaymentTotals>(
            "SELECT COALESCE(SUM(sp.amount), 0) AS total_payments, \
                    COUNT(DISTINCT sp.student_id) AS students_count \
             FROM student_payments sp \
             JOIN groups g ON g.id = sp.group_id \
             WHERE g.teacher_id = $1 AND sp.month = $2",
        )
        .bind(teacher_id)
        .bind(month.to_string())
        .fetch_one(pool)
        .await
    }

    /// Per-group breakdown of the same totals. Every group the teacher leads
    /// is listed, with zeros for groups that collected nothing.
    pub async fn income_by_group(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<Vec<GroupIncome>, sqlx::Error> {
        sqlx::query_as::<_, GroupIncome>(
            "SELECT g.id AS group_id, g.name AS group_name, \
                    COUNT(DISTINCT sp.student_id) AS students_count, \
                    COALESCE(SUM(sp.amount), 0) AS total_payments \
             FROM groups g \
             LEFT JOIN student_payments sp ON sp.group_id = g.id AND sp.month = $2 \
             WHERE g.teacher_id = $1 \
             GROUP BY g.id, g.name \
             ORDER BY g.name ASC, g.id ASC",
        )
        .bind(teacher_id)
        .bind(month.to_string())
        .fetch_all(pool)
        .await
    }
}
