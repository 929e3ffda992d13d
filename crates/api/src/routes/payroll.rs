//! Route definitions for teacher payroll, mounted at `/api/v1/payroll`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payroll;
use crate::state::AppState;

/// ```text
/// GET  /teachers/{teacher_id}/compensation    -> get_compensation
/// PUT  /teachers/{teacher_id}/compensation    -> set_compensation
/// GET  /teachers/{teacher_id}/advances        -> list_advances (?month=)
/// GET  /teachers/{teacher_id}/settlements     -> settlement_history
/// GET  /teachers/{teacher_id}/report          -> teacher_report (?month=)
/// POST /advances                              -> give_advance
/// POST /settlements/calculate                 -> calculate_settlement
/// POST /settlements/calculate-all             -> calculate_all_settlements
/// POST /settlements/payments                  -> record_payment
/// GET  /reports/monthly                       -> monthly_report (?month=)
/// GET  /debts                                 -> check_debts (?month=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/teachers/{teacher_id}/compensation",
            get(payroll::get_compensation).put(payroll::set_compensation),
        )
        .route(
            "/teachers/{teacher_id}/advances",
            get(payroll::list_advances),
        )
        .route(
            "/teachers/{teacher_id}/settlements",
            get(payroll::settlement_history),
        )
        .route("/teachers/{teacher_id}/report", get(payroll::teacher_report))
        .route("/advances", post(payroll::give_advance))
        .route("/settlements/calculate", post(payroll::calculate_settlement))
        .route(
            "/settlements/calculate-all",
            post(payroll::calculate_all_settlements),
        )
        .route("/settlements/payments", post(payroll::record_payment))
        .route("/reports/monthly", get(payroll::monthly_report))
        .route("/debts", get(payroll::check_debts))
}
