use axum::{extract::State, Json};
use std::sync::Arc;
use timetable_core::models::section::PairsResponse;

use crate::ApiState;

pub async fn list_pairs(State(state): State<Arc<ApiState>>) -> Json<PairsResponse> {
    let registry = state.registry.lock().await;

    Json(PairsResponse {
        pairs: registry.all_pairs().to_vec(),
    })
}
