//! One-shot settlement batch for an external scheduler.
//!
//! Computes every active teacher's settlement for one month and exits. The
//! month is taken from the first argument, then `PAYROLL_MONTH`, and defaults
//! to the previous calendar month. Exits non-zero if any teacher failed.

use anyhow::{bail, Context};
use chrono::{NaiveDate, Utc};
use schoolpay_core::period::PayPeriod;
use schoolpay_db::DEFAULT_MAX_CONNECTIONS;
use schoolpay_payroll::batch::{compute_all_settlements, BatchStatus};
use schoolpay_payroll::config::PayrollConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolpay_worker=debug,schoolpay_payroll=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let month = resolve_month(
        std::env::args().nth(1),
        std::env::var("PAYROLL_MONTH").ok(),
        Utc::now().date_naive(),
    )?;
    let config = PayrollConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = schoolpay_db::create_pool(&database_url, DEFAULT_MAX_CONNECTIONS)
        .await
        .context("Failed to connect to database")?;
    schoolpay_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(month = %month, concurrency = config.batch_concurrency, "Settlement run starting");

    let outcome = compute_all_settlements(&pool, month, config.batch_concurrency).await?;
    pool.close().await;

    for failed in outcome
        .results
        .iter()
        .filter(|r| r.status == BatchStatus::Error)
    {
        tracing::error!(
            teacher_id = failed.teacher_id,
            teacher_name = %failed.teacher_name,
            error = failed.error.as_deref().unwrap_or_default(),
            "Teacher settlement failed",
        );
    }

    tracing::info!(
        month = %month,
        success_count = outcome.success_count,
        error_count = outcome.error_count,
        "Settlement run complete",
    );

    if outcome.error_count > 0 {
        bail!(
            "{} of {} settlements failed for {month}",
            outcome.error_count,
            outcome.results.len()
        );
    }
    Ok(())
}

/// Pick the month to settle: explicit argument, then environment, then the
/// month before `today`.
fn resolve_month(
    arg: Option<String>,
    env: Option<String>,
    today: NaiveDate,
) -> anyhow::Result<PayPeriod> {
    match arg.or(env).filter(|s| !s.trim().is_empty()) {
        Some(raw) => raw
            .parse::<PayPeriod>()
            .with_context(|| format!("Invalid month '{raw}'")),
        None => Ok(PayPeriod::containing(today).previous()),
    }
}
