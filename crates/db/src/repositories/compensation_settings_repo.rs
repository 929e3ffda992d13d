//! Repository for the `teacher_compensation_settings` table.

use rust_decimal::Decimal;
use schoolpay_core::compensation::CompensationSettings;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::compensation::{CompensationSettingsRow, SetCompensationSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, teacher_id, base_percentage, bonus_percentage, \
    experience_bonus_threshold_months, experience_bonus_rate, created_at, updated_at";

/// Provides lookups and upserts for per-teacher compensation settings.
pub struct CompensationSettingsRepo;

impl CompensationSettingsRepo {
    /// Get the settings row for a teacher, if one was ever saved.
    pub async fn find_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Option<CompensationSettingsRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teacher_compensation_settings WHERE teacher_id = $1"
        );
        sqlx::query_as::<_, CompensationSettingsRow>(&query)
            .bind(teacher_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert settings for a teacher.
    ///
    /// On insert, absent optional fields take the defaults. On conflict,
    /// absent optional fields keep the stored value.
    pub async fn upsert(
        pool: &PgPool,
        teacher_id: DbId,
        base_percentage: Decimal,
        body: &SetCompensationSettings,
    ) -> Result<CompensationSettingsRow, sqlx::Error> {
        let defaults = CompensationSettings::default();
        let bonus = body.bonus_percentage.unwrap_or(defaults.bonus_percentage);
        let threshold = body
            .experience_bonus_threshold_months
            .unwrap_or(defaults.experience_bonus_threshold_months);
        let rate = body
            .experience_bonus_rate
            .unwrap_or(defaults.experience_bonus_rate);

        let query = format!(
            "INSERT INTO teacher_compensation_settings
                (teacher_id, base_percentage, bonus_percentage,
                 experience_bonus_threshold_months, experience_bonus_rate)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (teacher_id)
             DO UPDATE SET
                base_percentage = EXCLUDED.base_percentage,
                bonus_percentage = COALESCE($6, teacher_compensation_settings.bonus_percentage),
                experience_bonus_threshold_months =
                    COALESCE($7, teacher_compensation_settings.experience_bonus_threshold_months),
                experience_bonus_rate =
                    COALESCE($8, teacher_compensation_settings.experience_bonus_rate),
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CompensationSettingsRow>(&query)
            .bind(teacher_id)
            .bind(base_percentage)
            .bind(bonus)
            .bind(threshold)
            .bind(rate)
            .bind(body.bonus_percentage)
            .bind(body.experience_bonus_threshold_months)
            .bind(body.experience_bonus_rate)
            .fetch_one(pool)
            .await
    }
}
