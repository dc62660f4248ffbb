use crate::catalog::CATALOG;
use crate::errors::AppError;
use crate::models::{CatalogEntry, FormRequest, LogResponse, RemoveRequest, SelectRequest};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::Html,
    Json,
};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let log = state.log.lock().await;
    Html(render_index(&log))
}

pub async fn get_catalog() -> Json<Vec<CatalogEntry>> {
    Json(CATALOG.iter().map(CatalogEntry::from).collect())
}

pub async fn get_log(State(state): State<AppState>) -> Json<LogResponse> {
    let log = state.log.lock().await;
    Json(LogResponse::from_log(&log))
}

pub async fn form(
    State(state): State<AppState>,
    Json(payload): Json<FormRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let action = payload.action.trim();
    if action != "open" && action != "close" {
        return Err(AppError::bad_request("action must be 'open' or 'close'"));
    }

    let mut log = state.log.lock().await;
    if action == "open" {
        log.open_form();
    } else {
        log.close_form();
    }

    Ok(Json(LogResponse::from_log(&log)))
}

pub async fn select(
    State(state): State<AppState>,
    Json(payload): Json<SelectRequest>,
) -> Json<LogResponse> {
    let mut log = state.log.lock().await;
    // An unknown name is dropped inside select_template; the page only
    // offers catalog names.
    log.select_template(&payload.name);
    Json(LogResponse::from_log(&log))
}

pub async fn confirm(State(state): State<AppState>) -> Json<LogResponse> {
    let mut log = state.log.lock().await;
    if let Some(entry) = log.confirm_add() {
        info!("logged '{}' for {} points", entry.name, entry.points);
    }
    Json(LogResponse::from_log(&log))
}

pub async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<RemoveRequest>,
) -> Json<LogResponse> {
    let mut log = state.log.lock().await;
    if log.remove_entry(payload.id) {
        info!("removed entry {}", payload.id);
    }
    Json(LogResponse::from_log(&log))
}
