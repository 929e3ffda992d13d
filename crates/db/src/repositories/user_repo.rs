//! Existence checks against the LMS `users` table, for audit references
//! such as `issued_by` and `created_by`.

use schoolpay_core::types::DbId;
use sqlx::PgPool;

/// Looks up user accounts of any role.
pub struct UserRepo;

impl UserRepo {
    /// Whether a user row with this id exists, active or not.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }
}
