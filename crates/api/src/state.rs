use std::sync::Arc;

use schoolpay_payroll::config::PayrollConfig;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and configs sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: schoolpay_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payroll engine configuration (batch concurrency).
    pub payroll: Arc<PayrollConfig>,
}
