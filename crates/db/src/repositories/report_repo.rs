//! Month-wide read projections over settlements and payments.

use schoolpay_core::period::PayPeriod;
use sqlx::PgPool;

use crate::models::report::{SettlementSummaryRow, TeacherDebt};

/// Read-only queries backing the payroll reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Every settlement for a period with teacher names and amounts paid so
    /// far, ordered by teacher name.
    pub async fn list_month_summaries(
        pool: &PgPool,
        month: PayPeriod,
    ) -> Result<Vec<SettlementSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, SettlementSummaryRow>(
            "SELECT ms.id AS settlement_id, ms.teacher_id, u.full_name AS teacher_name, \
                    ms.month, ms.total_student_payments, ms.students_count, ms.total_earned, \
                    ms.total_advances, ms.debt_from_previous, ms.final_salary, \
                    COALESCE(paid.total, 0) AS total_paid, ms.is_paid, ms.payment_date \
             FROM monthly_settlements ms \
             JOIN users u ON u.id = ms.teacher_id \
             LEFT JOIN ( \
                 SELECT settlement_id, SUM(amount) AS total \
                 FROM salary_payments GROUP BY settlement_id \
             ) paid ON paid.settlement_id = ms.id \
             WHERE ms.month = $1 \
             ORDER BY u.full_name ASC, ms.teacher_id ASC",
        )
        .bind(month.to_string())
        .fetch_all(pool)
        .await
    }

    /// Settlements for a period whose balance is negative, most owed first.
    pub async fn list_debts(
        pool: &PgPool,
        month: PayPeriod,
    ) -> Result<Vec<TeacherDebt>, sqlx::Error> {
        sqlx::query_as::<_, TeacherDebt>(
            "SELECT ms.teacher_id, u.full_name AS teacher_name, ms.month, ms.final_salary \
             FROM monthly_settlements ms \
             JOIN users u ON u.id = ms.teacher_id \
             WHERE ms.month = $1 AND ms.final_salary < 0 \
             ORDER BY ms.final_salary ASC, ms.teacher_id ASC",
        )
        .bind(month.to_string())
        .fetch_all(pool)
        .await
    }
}
