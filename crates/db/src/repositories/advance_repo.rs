//! Repository for the append-only `teacher_advances` table.

use rust_decimal::Decimal;
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::advance::{Advance, NewAdvance};

/// Column list for teacher_advances queries.
const COLUMNS: &str = "id, teacher_id, amount, month, description, issued_by, created_at";

/// Provides inserts and per-period reads of cash advances.
pub struct AdvanceRepo;

impl AdvanceRepo {
    /// Insert a new advance, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewAdvance) -> Result<Advance, sqlx::Error> {
        let query = format!(
            "INSERT INTO teacher_advances (teacher_id, amount, month, description, issued_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Advance>(&query)
            .bind(input.teacher_id)
            .bind(input.amount)
            .bind(input.month.to_string())
            .bind(&input.description)
            .bind(input.issued_by)
            .fetch_one(pool)
            .await
    }

    /// List a teacher's advances for a period, oldest first.
    pub async fn list_for_period(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<Vec<Advance>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_advances \
             WHERE teacher_id = $1 AND month = $2 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Advance>(&query)
            .bind(teacher_id)
            .bind(month.to_string())
            .fetch_all(pool)
            .await
    }

    /// Sum of a teacher's advances for a period; zero when there are none.
    pub async fn total_for_period(
        pool: &PgPool,
        teacher_id: DbId,
        month: PayPeriod,
    ) -> Result<Decimal, sqlx::Error> {
        let row: (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0) FROM teacher_advances \
             WHERE teacher_id = $1 AND month = $2",
        )
        .bind(teacher_id)
        .bind(month.to_string())
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
