//! Pure payroll domain: error types, identifiers, pay periods, compensation
//! settings and the monthly salary calculator.
//!
//! This crate has no I/O. Everything that touches the database lives in
//! `schoolpay-db`; orchestration lives in `schoolpay-payroll`.

pub mod compensation;
pub mod error;
pub mod money;
pub mod payroll;
pub mod period;
pub mod roles;
pub mod types;
pub mod validation;
