//! Read-only lookups of teacher accounts in the LMS `users` table.

use schoolpay_core::roles::ROLE_TEACHER;
use schoolpay_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::Teacher;

/// Column list for teacher queries.
const COLUMNS: &str = "id, full_name, hire_date";

/// Resolves teachers from the identity store.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Find an active user with the teacher role.
    pub async fn find_active(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE id = $1 AND role = $2 AND is_active = true"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .bind(ROLE_TEACHER)
            .fetch_optional(pool)
            .await
    }

    /// List every active teacher, ordered by id.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Teacher>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users \
             WHERE role = $1 AND is_active = true \
             ORDER BY id"
        );
        sqlx::query_as::<_, Teacher>(&query)
            .bind(ROLE_TEACHER)
            .fetch_all(pool)
            .await
    }
}
