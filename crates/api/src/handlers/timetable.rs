use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse},
    Json,
};
use std::sync::Arc;
use timetable_core::{
    errors::TimetableError,
    models::{
        section::{validate_section_id, GenerateTimetableResponse, SectionTimetable},
        submission::SectionSubmission,
    },
};
use tracing::{info, warn};

use crate::{export, middleware::error_handling::AppError, render, ApiState, RenderedSection};

#[axum::debug_handler]
pub async fn generate_timetable(
    State(state): State<Arc<ApiState>>,
    Path(section): Path<String>,
    Json(payload): Json<SectionSubmission>,
) -> Result<Json<GenerateTimetableResponse>, AppError> {
    validate_section_id(&section)?;

    // Reject the whole submission before touching the shared registry
    let (slots_per_day, submitted) = payload
        .slot_count()
        .and_then(|slots| payload.subject_teacher_pairs().map(|pairs| (slots, pairs)))
        .inspect_err(|err| warn!(section = %section, "Rejected submission: {}", err))?;

    let (pairs_added, pairs) = {
        let mut registry = state.registry.lock().await;
        let added = registry.extend(submitted);
        (added, registry.all_pairs().to_vec())
    };

    let grid = {
        let mut rng = state.rng.lock().await;
        state.generator.generate(slots_per_day, &pairs, &mut *rng)
    };

    let time_labels = state.clock.labels(grid.column_count());
    let table_html = render::timetable_table(&grid, &time_labels).into_string();
    let timetable = SectionTimetable {
        section: section.clone(),
        grid,
        time_labels,
    };

    state.sections.write().await.insert(
        section.clone(),
        RenderedSection {
            timetable: timetable.clone(),
            table_html,
        },
    );

    info!(
        section = %section,
        slots_per_day,
        pairs = pairs.len(),
        pairs_added,
        "Generated timetable"
    );

    Ok(Json(GenerateTimetableResponse {
        timetable,
        pairs_added,
    }))
}

#[axum::debug_handler]
pub async fn get_timetable(
    State(state): State<Arc<ApiState>>,
    Path(section): Path<String>,
) -> Result<Json<SectionTimetable>, AppError> {
    validate_section_id(&section)?;

    let sections = state.sections.read().await;
    let rendered = sections.get(&section).ok_or_else(|| {
        TimetableError::NotFound(format!("No timetable generated for section {}", section))
    })?;

    Ok(Json(rendered.timetable.clone()))
}

#[axum::debug_handler]
pub async fn get_table(
    State(state): State<Arc<ApiState>>,
    Path(section): Path<String>,
) -> Result<Html<String>, AppError> {
    validate_section_id(&section)?;

    let sections = state.sections.read().await;
    let rendered = sections.get(&section).ok_or_else(|| {
        TimetableError::NotFound(format!("No timetable generated for section {}", section))
    })?;

    Ok(Html(rendered.table_html.clone()))
}

#[axum::debug_handler]
pub async fn export_timetable(
    State(state): State<Arc<ApiState>>,
    Path(section): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    validate_section_id(&section)?;

    let document = {
        let sections = state.sections.read().await;
        export::export_section(
            &section,
            sections.get(&section).map(|rendered| rendered.table_html.as_str()),
        )?
    };

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        document.file_name
    ))
    .map_err(|err| TimetableError::ExportEncodingFailure(err.to_string()))?;

    info!(section = %section, file = %document.file_name, "Exported timetable");

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(export::CONTENT_TYPE)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.body,
    ))
}
