use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::entry::{Category, Entry};
use crate::menu::Menu;
use crate::server::AppState;
use crate::Error;

#[derive(Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub name: String,
    /// Optional second contributor, folded into the name ("Alex & Sam")
    #[serde(default)]
    pub partner: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub dish: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(e: Error) -> ApiError {
    let status = match e {
        Error::MissingField(_) | Error::UnknownCategory(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::DuplicateDish(_) => StatusCode::CONFLICT,
        Error::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse { error: e.to_string() }))
}

/// Fold an optional partner into the contributor name, the way the
/// sign-up form does
pub fn contributor_name(name: &str, partner: &str) -> String {
    let name = name.trim();
    let partner = partner.trim();
    if partner.is_empty() {
        name.to_string()
    } else {
        format!("{} & {}", name, partner)
    }
}

pub async fn get_menu(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let snapshot = state.registry.lock().await.fetch_snapshot();
    let menu = Menu::from_snapshot(&snapshot);

    Ok(Json(serde_json::json!({
        "title": state.event_title,
        "degraded": snapshot.degraded_reason(),
        "menu": menu,
    })))
}

pub async fn get_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let snapshot = state.registry.lock().await.fetch_snapshot();

    Ok(Json(serde_json::json!({
        "degraded": snapshot.degraded_reason(),
        "entries": snapshot.entries(),
    })))
}

pub async fn submit_entry(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let entry = Entry {
        name: contributor_name(&request.name, &request.partner),
        category: request.category,
        dish: request.dish,
        note: request.note,
    };

    state
        .registry
        .lock()
        .await
        .submit(entry)
        .map_err(api_error)?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"status": "Dish added successfully!"})),
    ))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let snapshot = state.registry.lock().await.fetch_snapshot();
    let counts: Vec<serde_json::Value> = snapshot
        .category_counts()
        .into_iter()
        .map(|(category, count)| {
            serde_json::json!({"category": category.as_str(), "count": count})
        })
        .collect();

    Ok(Json(serde_json::json!({
        "total": snapshot.len(),
        "categories": counts,
        "category_labels": Category::all().iter().map(|c| c.as_str()).collect::<Vec<_>>(),
    })))
}
