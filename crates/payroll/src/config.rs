/// Engine configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Teachers computed concurrently by the batch runner (default: `4`).
    pub batch_concurrency: usize,
}

/// Default bound on concurrent settlement computations in a batch.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 4;

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

impl PayrollConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default |
    /// |-----------------------------|---------|
    /// | `PAYROLL_BATCH_CONCURRENCY` | `4`     |
    pub fn from_env() -> Self {
        let batch_concurrency: usize = std::env::var("PAYROLL_BATCH_CONCURRENCY")
            .unwrap_or_else(|_| DEFAULT_BATCH_CONCURRENCY.to_string())
            .parse()
            .expect("PAYROLL_BATCH_CONCURRENCY must be a valid usize");

        Self {
            batch_concurrency: batch_concurrency.max(1),
        }
    }
}
