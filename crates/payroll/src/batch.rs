//! Batch runner: every active teacher's settlement for one month.
//!
//! Teachers are processed with bounded parallelism. A failure for one teacher
//! is recorded in that teacher's result and never aborts the others.

use std::future::Future;

use chrono::Utc;
use futures::stream::{self, StreamExt};
use schoolpay_core::period::PayPeriod;
use schoolpay_core::types::DbId;
use schoolpay_db::models::settlement::MonthlySettlement;
use schoolpay_db::models::teacher::Teacher;
use schoolpay_db::repositories::TeacherRepo;
use serde::Serialize;
use sqlx::PgPool;

use crate::settlement::compute_for_teacher;
use crate::PayrollResult;

/// Per-teacher outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherRunResult {
    pub teacher_id: DbId,
    pub teacher_name: String,
    pub status: BatchStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settlement: Option<MonthlySettlement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate result of a batch run, results ordered by teacher id.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub month: PayPeriod,
    pub results: Vec<TeacherRunResult>,
    pub success_count: usize,
    pub error_count: usize,
}

/// Compute settlements for every active teacher for `month`.
///
/// Only the initial teacher listing can fail the whole run.
pub async fn compute_all_settlements(
    pool: &PgPool,
    month: PayPeriod,
    concurrency: usize,
) -> PayrollResult<BatchOutcome> {
    let teachers = TeacherRepo::list_active(pool).await?;
    let as_of = Utc::now().date_naive();

    tracing::info!(
        month = %month,
        teachers = teachers.len(),
        concurrency,
        "Starting settlement batch",
    );

    let outcome = run_for_teachers(month, teachers, concurrency, |teacher| async move {
        compute_for_teacher(pool, &teacher, month, as_of).await
    })
    .await;

    tracing::info!(
        month = %month,
        success_count = outcome.success_count,
        error_count = outcome.error_count,
        "Settlement batch finished",
    );

    Ok(outcome)
}

/// Drive `compute` over `teachers`, at most `concurrency` at a time.
pub async fn run_for_teachers<F, Fut>(
    month: PayPeriod,
    teachers: Vec<Teacher>,
    concurrency: usize,
    compute: F,
) -> BatchOutcome
where
    F: Fn(Teacher) -> Fut,
    Fut: Future<Output = PayrollResult<MonthlySettlement>>,
{
    let mut results: Vec<TeacherRunResult> = stream::iter(teachers)
        .map(|teacher| {
            let teacher_id = teacher.id;
            let teacher_name = teacher.full_name.clone();
            let run = compute(teacher);
            async move {
                match run.await {
                    Ok(settlement) => TeacherRunResult {
                        teacher_id,
                        teacher_name,
                        status: BatchStatus::Success,
                        settlement: Some(settlement),
                        error: None,
                    },
                    Err(e) => {
                        tracing::warn!(
                            teacher_id,
                            month = %month,
                            error = %e,
                            "Settlement failed for teacher",
                        );
                        TeacherRunResult {
                            teacher_id,
                            teacher_name,
                            status: BatchStatus::Error,
                            settlement: None,
                            error: Some(e.to_string()),
                        }
                    }
                }
            }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    results.sort_by_key(|r| r.teacher_id);

    let success_count = results
        .iter()
        .filter(|r| r.status == BatchStatus::Success)
        .count();
    let error_count = results.len() - success_count;

    BatchOutcome {
        month,
        results,
        success_count,
        error_count,
    }
}
