//! Read-only view of teacher accounts from the LMS `users` table.

use chrono::NaiveDate;
use schoolpay_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// An active user with the teacher role.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    pub full_name: String,
    pub hire_date: Option<NaiveDate>,
}
