//! Dashboard API endpoints

use super::page::{render_dashboard_tabs, status_chart, trend_chart, volume_chart};
use crate::error::ApiError;
use crate::AppState;
use axum::extract::Path;
use frontier_core::DashboardTab;

/// Dashboard snapshot plus ready-to-draw chart configurations (JSON API)
pub async fn api_dashboard(state: axum::extract::State<AppState>) -> axum::Json<serde_json::Value> {
    let workspace = state.workspace.read().await;
    let snapshot = &workspace.dashboard;
    let charts = &state.config.charts;

    axum::Json(serde_json::json!({
        "snapshot": snapshot,
        "charts": {
            "status": status_chart(snapshot, charts),
            "volume": volume_chart(snapshot, charts),
            "trend": trend_chart(snapshot, charts),
        },
    }))
}

/// HTMX: Switch dashboard tab
pub async fn htmx_dashboard_tab(
    state: axum::extract::State<AppState>,
    Path(tab): Path<String>,
) -> Result<axum::response::Html<String>, ApiError> {
    let tab: DashboardTab = tab.parse()?;
    let workspace = state.workspace.read().await;
    Ok(axum::response::Html(render_dashboard_tabs(
        tab,
        &workspace.dashboard,
        &state.config.charts,
    )))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_api_dashboard() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/api/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["snapshot"]["kpis"][0]["value"], "$2.4M");
        assert_eq!(value["snapshot"]["exceptions"][1]["type"], "Missing Reference");
        assert_eq!(value["charts"]["trend"]["type"], "bar");
    }

    #[tokio::test]
    async fn test_dashboard_page_routes() {
        let (router, _) = app();
        for uri in ["/", "/dashboard"] {
            let (status, body) = send(&router, get(uri)).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("Real-time financial transaction matching & reporting"));
            assert!(body.contains("STP Rate"));
        }
    }

    #[tokio::test]
    async fn test_tab_partial() {
        let (router, _) = app();
        let (status, body) = send(&router, htmx_get("/dashboard/tab/exceptions")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Exception Management"));
        assert!(body.contains("EX001"));
    }

    #[tokio::test]
    async fn test_unknown_tab() {
        let (router, _) = app();
        let (status, _) = send(&router, htmx_get("/dashboard/tab/forecast")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
