use axum::Json;
use axum::extract::Path;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::{delete, patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::AppError;
use crate::models::*;
use crate::services::LayoutView;
use crate::state::AppState;
use crate::transfer::EXPORT_FILE_NAME;
use crate::translator;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest {
    code: String,
    #[serde(default)]
    course_id: String,
}

#[derive(Serialize)]
struct ShareResponse {
    token: String,
    path: String,
    link: String,
}

#[derive(Serialize)]
struct PaletteEntry {
    value: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct ImportResponse {
    imported: usize,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course).delete(clear_courses))
        .route("/courses/{id}", delete(remove_course))
        .route("/courses/{id}/blocks", post(add_block))
        .route("/courses/{id}/blocks/{block_id}", patch(update_block).delete(remove_block))
        .route("/translate", post(translate_code))
        .route("/layout", get(layout))
        .route("/palette", get(palette))
        .route("/share", get(share))
        .route("/export", get(export))
        .route("/import", post(import))
        .route("/{encoded}", get(open_shared))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.schedule.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.schedule.list().await)
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>
) -> Result<(StatusCode, Json<Course>), AppError> {
    if req.code.trim().is_empty() && req.name.trim().is_empty() {
        return Err(AppError::BadRequest("course needs a code or a name".to_string()));
    }
    let course = state.schedule.add_course(req).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

async fn clear_courses(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.schedule.clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn remove_course(
    State(state): State<AppState>,
    Path(id): Path<String>
) -> Result<StatusCode, AppError> {
    state.schedule.remove_course(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn add_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NewBlockRequest>
) -> Result<(StatusCode, Json<TimeBlock>), AppError> {
    let block = state.schedule.add_block(&id, req).await?;
    Ok((StatusCode::CREATED, Json(block)))
}

async fn update_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(String, String)>,
    Json(req): Json<UpdateBlockRequest>
) -> Result<Json<TimeBlock>, AppError> {
    let block = state.schedule.update_block(&id, &block_id, req).await?;
    Ok(Json(block))
}

async fn remove_block(
    State(state): State<AppState>,
    Path((id, block_id)): Path<(String, String)>
) -> Result<StatusCode, AppError> {
    state.schedule.remove_block(&id, &block_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn translate_code(Json(req): Json<TranslateRequest>) -> Json<Vec<TimeBlock>> {
    Json(translator::translate(&req.code, &req.course_id))
}

async fn layout(State(state): State<AppState>) -> Json<LayoutView> {
    Json(state.schedule.layout().await)
}

async fn palette() -> Json<Vec<PaletteEntry>> {
    Json(
        PALETTE
            .iter()
            .map(|&(value, label)| PaletteEntry { value, label })
            .collect(),
    )
}

async fn share(State(state): State<AppState>) -> Result<Json<ShareResponse>, AppError> {
    let token = state.schedule.share_token().await?;
    Ok(Json(ShareResponse {
        path: format!("/{}", token),
        link: state.config.share_link(&token),
        token,
    }))
}

async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.schedule.export().await?;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
        ),
    ];
    Ok((headers, body))
}

async fn import(
    State(state): State<AppState>,
    body: String
) -> Result<Json<ImportResponse>, AppError> {
    let imported = state.schedule.import(&body).await?;
    Ok(Json(ImportResponse { imported }))
}

/// Read-only view of a shared link. A broken token shows an empty schedule.
async fn open_shared(Path(encoded): Path<String>) -> Json<Vec<Course>> {
    Json(codec::decode(&encoded))
}
