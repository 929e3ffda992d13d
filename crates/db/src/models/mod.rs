//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO whose fields are optional so missing values
//!   surface as validation errors naming the field
//! - Where the engine needs one, a validated `New*` struct the repository
//!   writes

pub mod advance;
pub mod compensation;
pub mod report;
pub mod salary_payment;
pub mod settlement;
pub mod teacher;
