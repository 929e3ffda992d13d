//! Repository for the `monthly_settlements` table.

use rust_decimal::Decimal;
use schoolpay_core::payroll::SettlementBreakdown;
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::settlement::MonthlySettlement;

/// Column list for monthly_settlements queries.
pub(crate) const COLUMNS: &str = "\
    id, teacher_id, month, total_student_payments, students_count, experience_months, \
    base_salary, experience_bonus, other_bonuses, total_earned, total_advances, \
    debt_from_previous, final_salary, is_paid, payment_date, calculated_at, created_at";

/// Owns writes to the computed fields of monthly settlements.
pub struct SettlementRepo;

impl SettlementRepo {
    /// Find the settlement for a teacher and period.
    pub async fn find(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<Option<MonthlySettlement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monthly_settlements \
             WHERE teacher_id = $1 AND month = $2"
        );
        sqlx::query_as::<_, MonthlySettlement>(&query)
            .bind(teacher_id)
            .bind(month.to_string())
            .fetch_optional(pool)
            .await
    }

    /// The signed `final_salary` of a teacher's settlement for a period.
    pub async fn find_final_salary(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        let row: Option<(Decimal,)> = sqlx::query_as(
            "SELECT final_salary FROM monthly_settlements \
             WHERE teacher_id = $1 AND month = $2",
        )
        .bind(teacher_id)
        .bind(month.to_string())
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|r| r.0))
    }

    /// Insert or fully replace the computed fields of a settlement.
    ///
    /// Keyed on `(teacher_id, month)`; a single statement so concurrent
    /// recalculations never interleave. `is_paid` and `payment_date` belong to
    /// the payment recorder and are left untouched on conflict.
    pub async fn upsert(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
        breakdown: &SettlementBreakdown,
    ) -> Result<MonthlySettlement, sqlx::Error> {
        let query = format!(
            "INSERT INTO monthly_settlements
                (teacher_id, month, total_student_payments, students_count, experience_months,
                 base_salary, experience_bonus, other_bonuses, total_earned, total_advances,
                 debt_from_previous, final_salary, calculated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
             ON CONFLICT (teacher_id, month)
             DO UPDATE SET
                total_student_payments = EXCLUDED.total_student_payments,
                students_count = EXCLUDED.students_count,
                experience_months = EXCLUDED.experience_months,
                base_salary = EXCLUDED.base_salary,
                experience_bonus = EXCLUDED.experience_bonus,
                other_bonuses = EXCLUDED.other_bonuses,
                total_earned = EXCLUDED.total_earned,
                total_advances = EXCLUDED.total_advances,
                debt_from_previous = EXCLUDED.debt_from_previous,
                final_salary = EXCLUDED.final_salary,
                calculated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MonthlySettlement>(&query)
            .bind(teacher_id)
            .bind(month.to_string())
            .bind(breakdown.total_student_payments)
            .bind(breakdown.students_count)
            .bind(breakdown.experience_months)
            .bind(breakdown.base_salary)
            .bind(breakdown.experience_bonus)
            .bind(breakdown.other_bonuses)
            .bind(breakdown.total_earned)
            .bind(breakdown.total_advances)
            .bind(breakdown.debt_from_previous)
            .bind(breakdown.final_salary)
            .fetch_one(pool)
            .await
    }

    /// A teacher's settlements, newest period first.
    pub async fn list_for_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<MonthlySettlement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM monthly_settlements \
             WHERE teacher_id = $1 \
             ORDER BY month DESC"
        );
        sqlx::query_as::<_, MonthlySettlement>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await
    }
}
