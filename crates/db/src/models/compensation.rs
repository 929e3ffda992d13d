//! Teacher compensation settings models and DTOs.

use rust_decimal::Decimal;
use schoolpay_core::compensation::CompensationSettings;
use schoolpay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A teacher_compensation_settings row from the database.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompensationSettingsRow {
    pub id: DbId,
    pub teacher_id: DbId,
    pub base_percentage: Decimal,
    pub bonus_percentage: Decimal,
    pub experience_bonus_threshold_months: i32,
    pub experience_bonus_rate: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CompensationSettingsRow {
    /// The rates stored on this row.
    pub fn settings(&self) -> CompensationSettings {
        CompensationSettings {
            base_percentage: self.base_percentage,
            bonus_percentage: self.bonus_percentage,
            experience_bonus_threshold_months: self.experience_bonus_threshold_months,
            experience_bonus_rate: self.experience_bonus_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Request body for setting a teacher's compensation.
///
/// `base_percentage` is required; the other fields fall back to the defaults
/// on first insert and to the stored value on later updates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetCompensationSettings {
    pub base_percentage: Option<Decimal>,
    pub bonus_percentage: Option<Decimal>,
    pub experience_bonus_threshold_months: Option<i32>,
    pub experience_bonus_rate: Option<Decimal>,
}
