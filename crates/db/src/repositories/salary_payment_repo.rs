//! Repository for the append-only `salary_payments` table.

use rust_decimal::Decimal;
use schoolpay_core::payroll::payment_status;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::salary_payment::{NewSalaryPayment, RecordedPayment, SalaryPayment};
use crate::models::settlement::MonthlySettlement;
use crate::repositories::settlement_repo::COLUMNS as SETTLEMENT_COLUMNS;

/// Column list for salary_payments queries.
const COLUMNS: &str = "id, teacher_id, settlement_id, amount, description, created_by, created_at";

/// Owns disbursements and the settlement paid flag.
pub struct SalaryPaymentRepo;

impl SalaryPaymentRepo {
    /// Record a disbursement against the settlement for `input.month`.
    ///
    /// Runs in one transaction holding a row lock on the settlement, so
    /// concurrent payments serialize on the read-total / compare / write-flag
    /// sequence. Returns `None` (and writes nothing) when the settlement has
    /// not been calculated.
    pub async fn record(
        pool: &PgPool,
        input: &NewSalaryPayment,
    ) -> Result<Option<RecordedPayment>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let lock = format!(
            "SELECT {SETTLEMENT_COLUMNS} FROM monthly_settlements \
             WHERE teacher_id = $1 AND month = $2 \
             FOR UPDATE"
        );
        let settlement = sqlx::query_as::<_, MonthlySettlement>(&lock)
            .bind(input.teacher_id)
            .bind(input.month.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(settlement) = settlement else {
            tx.rollback().await?;
            return Ok(None);
        };

        let insert = format!(
            "INSERT INTO salary_payments (teacher_id, settlement_id, amount, description, created_by) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        let payment = sqlx::query_as::<_, SalaryPayment>(&insert)
            .bind(input.teacher_id)
            .bind(settlement.id)
            .bind(input.amount)
            .bind(&input.description)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        let total: (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0) FROM salary_payments WHERE settlement_id = $1",
        )
        .bind(settlement.id)
        .fetch_one(&mut *tx)
        .await?;
        let total_paid = total.0;

        // The flag follows the latest total, including flipping back to unpaid.
        let status = payment_status(settlement.final_salary, total_paid);
        let update = format!(
            "UPDATE monthly_settlements SET \
                is_paid = $2, \
                payment_date = CASE WHEN $2 THEN NOW() ELSE NULL END \
             WHERE id = $1 \
             RETURNING {SETTLEMENT_COLUMNS}"
        );
        let settlement = sqlx::query_as::<_, MonthlySettlement>(&update)
            .bind(settlement.id)
            .bind(status.is_fully_paid)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(RecordedPayment {
            payment,
            settlement,
            total_paid,
        }))
    }

    /// List disbursements against a settlement, oldest first.
    pub async fn list_for_settlement(
        pool: &PgPool,
        settlement_id: DbId,
    ) -> Result<Vec<SalaryPayment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM salary_payments \
             WHERE settlement_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, SalaryPayment>(&query)
            .bind(settlement_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of disbursements against a settlement; zero when there are none.
    pub async fn total_for_settlement(
        pool: &PgPool,
        settlement_id: DbId,
    ) -> Result<Decimal, sqlx::Error> {
        let row: (Decimal,) = sqlx::query_as(
            "SELECT COALESCE(SUM(amount), 0) FROM salary_payments WHERE settlement_id = $1",
        )
        .bind(settlement_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}
