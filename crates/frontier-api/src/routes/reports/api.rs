//! Reports API endpoints - JSON API and HTMX partial responses
//!
//! Generation, view and download are simulated: each one only produces a
//! notification and leaves the report list unchanged.

use super::page::render_reports_list;
use crate::error::ApiError;
use crate::render;
use crate::AppState;
use axum::extract::{Form, Path, Query};
use frontier_core::types::ReportType;
use frontier_core::{GenerateRequest, NotificationBuffer};
use std::collections::HashMap;

/// Get reports with search and type filter (JSON API)
pub async fn api_reports(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let store = &workspace.reports;
    let filter = crate::routes::record_filter::<ReportType>(&params, "type");

    axum::Json(serde_json::json!({
        "reports": store.filter(&filter),
        "stats": store.stats(),
        "total": store.len(),
    }))
}

/// Start a (simulated) report generation (JSON API)
pub async fn api_report_generate(
    state: axum::extract::State<AppState>,
    body: String,
) -> Result<axum::Json<serde_json::Value>, ApiError> {
    let request: GenerateRequest = if body.trim().is_empty() {
        GenerateRequest::default()
    } else {
        serde_json::from_str(&body).map_err(|e| ApiError::BadRequest {
            message: format!("Invalid generate request: {}", e),
        })?
    };

    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.generate(&request, &mut notifications);

    Ok(axum::Json(serde_json::json!({
        "request": request,
        "notifications": notifications.into_vec(),
    })))
}

/// Open a completed report (JSON API)
pub async fn api_report_view(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::Json<serde_json::Value>, ApiError> {
    let workspace = state.workspace.read().await;
    let report = workspace.reports.available(&id)?;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.view(&id, &mut notifications);

    Ok(axum::Json(serde_json::json!({
        "report": report,
        "notifications": notifications.into_vec(),
    })))
}

/// Download a completed report (JSON API)
pub async fn api_report_download(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> Result<axum::Json<serde_json::Value>, ApiError> {
    let workspace = state.workspace.read().await;
    let report = workspace.reports.available(&id)?;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.download(&id, &mut notifications);

    Ok(axum::Json(serde_json::json!({
        "report": report,
        "notifications": notifications.into_vec(),
    })))
}

/// HTMX: Report list - Partial page update
pub async fn htmx_reports_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let filter = crate::routes::record_filter::<ReportType>(&params, "type");
    axum::response::Html(render_reports_list(&workspace.reports, &filter))
}

/// HTMX: Generate form submit - toast only
pub async fn htmx_report_generate(
    state: axum::extract::State<AppState>,
    Form(params): Form<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let request = request_from_form(&params);
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.generate(&request, &mut notifications);

    axum::response::Html(render::toasts(
        &notifications.into_vec(),
        state.config.notifications.dismiss_after_ms,
    ))
}

/// HTMX: View action - toast only, empty for reports that are not completed
pub async fn htmx_report_view(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.view(&id, &mut notifications);

    axum::response::Html(render::toasts(
        &notifications.into_vec(),
        state.config.notifications.dismiss_after_ms,
    ))
}

/// HTMX: Download action - toast only, empty for reports that are not completed
pub async fn htmx_report_download(
    state: axum::extract::State<AppState>,
    Path(id): Path<String>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let mut notifications = NotificationBuffer::new();
    workspace.reports.download(&id, &mut notifications);

    axum::response::Html(render::toasts(
        &notifications.into_vec(),
        state.config.notifications.dismiss_after_ms,
    ))
}

/// Unknown type or format values fall back to the form defaults
fn request_from_form(params: &HashMap<String, String>) -> GenerateRequest {
    GenerateRequest {
        report_type: params
            .get("type")
            .and_then(|t| t.parse().ok())
            .unwrap_or_default(),
        date: params
            .get("date")
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string),
        format: params
            .get("format")
            .and_then(|f| f.parse().ok())
            .unwrap_or_default(),
    }
}
