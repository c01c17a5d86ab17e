use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/sections/:section/timetable",
            get(handlers::timetable::get_timetable).post(handlers::timetable::generate_timetable),
        )
        .route(
            "/api/sections/:section/table",
            get(handlers::timetable::get_table),
        )
        .route(
            "/api/sections/:section/export",
            get(handlers::timetable::export_timetable),
        )
}
