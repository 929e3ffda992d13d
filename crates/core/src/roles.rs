//! Role names stored in `users.role`. Only teachers are payroll subjects.

pub const ROLE_TEACHER: &str = "teacher";
