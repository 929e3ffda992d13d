//! Rate resolution: a teacher's effective compensation settings.

use schoolpay_core::compensation::CompensationSettings;
use schoolpay_core::error::CoreError;
use schoolpay_core::types::DbId;
use schoolpay_core::validation::require;
use schoolpay_db::models::compensation::{CompensationSettingsRow, SetCompensationSettings};
use schoolpay_db::models::teacher::Teacher;
use schoolpay_db::repositories::{CompensationSettingsRepo, TeacherRepo, UserRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::PayrollResult;

/// Compensation settings in effect for a teacher.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRates {
    pub teacher_id: DbId,
    #[serde(flatten)]
    pub settings: CompensationSettings,
    /// `true` when no settings row exists and the defaults apply.
    pub is_default: bool,
}

/// Resolve an active teacher or fail with `NotFound`.
pub async fn require_teacher(pool: &PgPool, teacher_id: DbId) -> PayrollResult<Teacher> {
    TeacherRepo::find_active(pool, teacher_id)
        .await?
        .ok_or_else(|| {
            CoreError::NotFound {
                entity: "Teacher",
                id: teacher_id,
            }
            .into()
        })
}

/// Check an optional audit reference (`issued_by`, `created_by`) names an
/// existing user, failing with `NotFound` before anything is written.
pub(crate) async fn require_user_ref(
    pool: &PgPool,
    user_id: Option<DbId>,
) -> PayrollResult<()> {
    let Some(id) = user_id else {
        return Ok(());
    };
    if UserRepo::exists(pool, id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound { entity: "User", id }.into())
    }
}

/// Effective rates for an active teacher, defaulting when none were saved.
pub async fn resolve_rates(pool: &PgPool, teacher_id: DbId) -> PayrollResult<ResolvedRates> {
    require_teacher(pool, teacher_id).await?;
    Ok(rates_for(pool, teacher_id).await?)
}

/// Effective rates without the teacher check. Callers have already resolved
/// the teacher.
pub(crate) async fn rates_for(
    pool: &PgPool,
    teacher_id: DbId,
) -> Result<ResolvedRates, sqlx::Error> {
    let row = CompensationSettingsRepo::find_by_teacher(pool, teacher_id).await?;
    let resolved = match row {
        Some(row) => ResolvedRates {
            teacher_id,
            settings: row.settings(),
            is_default: false,
        },
        None => ResolvedRates {
            teacher_id,
            settings: CompensationSettings::default(),
            is_default: true,
        },
    };
    Ok(resolved)
}

/// Save a teacher's compensation settings.
///
/// `base_percentage` is required. Everything is validated before the teacher
/// lookup and the write.
pub async fn set_compensation_settings(
    pool: &PgPool,
    teacher_id: DbId,
    body: &SetCompensationSettings,
) -> PayrollResult<CompensationSettingsRow> {
    let base_percentage = require(body.base_percentage, "base_percentage")?;

    let defaults = CompensationSettings::default();
    CompensationSettings {
        base_percentage,
        bonus_percentage: body.bonus_percentage.unwrap_or(defaults.bonus_percentage),
        experience_bonus_threshold_months: body
            .experience_bonus_threshold_months
            .unwrap_or(defaults.experience_bonus_threshold_months),
        experience_bonus_rate: body
            .experience_bonus_rate
            .unwrap_or(defaults.experience_bonus_rate),
    }
    .validate()?;

    require_teacher(pool, teacher_id).await?;

    let row = CompensationSettingsRepo::upsert(pool, teacher_id, base_percentage, body).await?;

    tracing::info!(
        teacher_id,
        base_percentage = %row.base_percentage,
        bonus_percentage = %row.bonus_percentage,
        threshold_months = row.experience_bonus_threshold_months,
        experience_bonus_rate = %row.experience_bonus_rate,
        "Compensation settings saved",
    );

    Ok(row)
}
