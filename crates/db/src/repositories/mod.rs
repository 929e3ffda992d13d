//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument.

pub mod advance_repo;
pub mod compensation_settings_repo;
pub mod earnings_repo;
pub mod report_repo;
pub mod salary_payment_repo;
pub mod settlement_repo;
pub mod teacher_repo;
pub mod user_repo;

pub use advance_repo::AdvanceRepo;
pub use compensation_settings_repo::CompensationSettingsRepo;
pub use earnings_repo::EarningsRepo;
pub use report_repo::ReportRepo;
pub use salary_payment_repo::SalaryPaymentRepo;
pub use settlement_repo::SettlementRepo;
pub use teacher_repo::TeacherRepo;
pub use user_repo::UserRepo;
