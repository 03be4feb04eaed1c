//! HTTP server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: KPI cards, charts and dashboard tabs
//! - routes::transactions: Transaction list, search, simulated import
//! - routes::rules: Matching rule list, create form, toggle, delete
//! - routes::reports: Report list, type filter, simulated generate/view/download
//! - routes::admin: Users, system settings, audit trail, security

pub mod error;
pub mod render;
pub mod routes;

use axum::{
    routing::{delete, get, post},
    Router,
};
use frontier_config::Config;
use frontier_core::Workspace;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub workspace: Arc<RwLock<Workspace>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(RwLock::new(workspace)),
            config,
        }
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::admin::{
        api_audit, api_settings, api_users, htmx_add_user, htmx_admin_tab, htmx_audit_list,
        htmx_users_list, page_admin,
    };
    use routes::dashboard::{api_dashboard, htmx_dashboard_tab, page_dashboard};
    use routes::reports::{
        api_report_download, api_report_generate, api_report_view, api_reports,
        htmx_report_download, htmx_report_generate, htmx_report_view, htmx_reports_list,
        page_reports,
    };
    use routes::rules::{
        api_rule_create, api_rule_delete, api_rule_toggle, api_rules, htmx_rule_create,
        htmx_rule_delete, htmx_rule_form, htmx_rule_form_close, htmx_rule_toggle, htmx_rules_list,
        page_rules,
    };
    use routes::transactions::{
        api_transactions, api_transactions_import, htmx_transactions_import,
        htmx_transactions_list, page_transactions,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/dashboard", get(api_dashboard))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/import", post(api_transactions_import))
        .route("/api/rules", get(api_rules).post(api_rule_create))
        .route("/api/rules/:id/toggle", post(api_rule_toggle))
        .route("/api/rules/:id", delete(api_rule_delete))
        .route("/api/reports", get(api_reports))
        .route("/api/reports/generate", post(api_report_generate))
        .route("/api/reports/:id/view", post(api_report_view))
        .route("/api/reports/:id/download", post(api_report_download))
        .route("/api/users", get(api_users))
        .route("/api/audit", get(api_audit))
        .route("/api/settings", get(api_settings))
        // HTMX page routes
        .route("/", get(page_dashboard))
        .route("/dashboard", get(page_dashboard))
        .route("/transactions", get(page_transactions))
        .route("/rules", get(page_rules).post(htmx_rule_create))
        .route("/reports", get(page_reports))
        .route("/admin", get(page_admin))
        // HTMX partial routes
        .route("/dashboard/tab/:tab", get(htmx_dashboard_tab))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/transactions/import", post(htmx_transactions_import))
        .route("/rules/list", get(htmx_rules_list))
        .route("/rules/form", get(htmx_rule_form))
        .route("/rules/form/close", get(htmx_rule_form_close))
        .route("/rules/:id/toggle", post(htmx_rule_toggle))
        .route("/rules/:id/delete", post(htmx_rule_delete))
        .route("/reports/list", get(htmx_reports_list))
        .route("/reports/generate", post(htmx_report_generate))
        .route("/reports/:id/view", post(htmx_report_view))
        .route("/reports/:id/download", post(htmx_report_download))
        .route("/admin/tab/:tab", get(htmx_admin_tab))
        .route("/admin/users/list", get(htmx_users_list))
        .route("/admin/users/new", post(htmx_add_user))
        .route("/admin/audit/list", get(htmx_audit_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Record counts per page (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> axum::Json<frontier_core::WorkspaceSummary> {
    let workspace = state.workspace.read().await;
    axum::Json(workspace.summary())
}

// ==================== Template Functions ====================

/// Base HTML template with the toast region and its auto-dismiss hook
pub fn base_html(title: &str, app_name: &str, dismiss_after_ms: u64, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - {}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body class="bg-slate-50 text-slate-900">
    {}
    <div id="toast-region" class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80"></div>
    <script>
        htmx.onLoad(function(root) {{
            var toasts = root.matches && root.matches('[data-toast]')
                ? [root]
                : Array.prototype.slice.call(root.querySelectorAll ? root.querySelectorAll('[data-toast]') : []);
            toasts.forEach(function(toast) {{
                var ms = parseInt(toast.getAttribute('data-dismiss-after') || '{}', 10);
                setTimeout(function() {{ toast.remove(); }}, ms);
            }});
        }});
    </script>
</body>
</html>"#,
        title, app_name, content, dismiss_after_ms
    )
}

/// Navigation sidebar with branding and operator footer
pub fn nav_sidebar(current_path: &str, ui: &frontier_config::UiConfig) -> String {
    let links = [
        ("/", "Dashboard", "dashboard"),
        ("/transactions", "Transactions", "transactions"),
        ("/rules", "Rules", "rules"),
        ("/reports", "Reports", "reports"),
        ("/admin", "Admin", "admin"),
    ];

    let mut nav = format!(
        "<div class='bg-white border-r border-slate-200 h-screen flex flex-col'><div class='p-6 border-b border-slate-200'><h1 class='text-xl font-bold text-slate-900'>{}</h1><p class='text-sm text-slate-500'>{}</p></div><ul class='flex-1 py-4 space-y-1 px-3'>",
        frontier_utils::escape_html(&ui.app_name),
        frontier_utils::escape_html(&ui.app_subtitle)
    );

    for (path, label, id) in &links {
        let is_active = if *path == "/" {
            current_path == "/" || current_path == "/dashboard"
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "bg-blue-50 text-blue-700 border-r-2 border-blue-700"
        } else {
            "text-slate-600 hover:bg-slate-50 hover:text-slate-900"
        };
        let icon = match *id {
            "dashboard" => "📊",
            "transactions" => "💳",
            "rules" => "⚙️",
            "reports" => "📄",
            "admin" => "👥",
            _ => "📄",
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }

    nav.push_str(&format!(
        "</ul><div class='p-4 border-t border-slate-200'><p class='text-sm font-medium text-slate-900'>{}</p><p class='text-xs text-slate-500'>{}</p></div></div>",
        frontier_utils::escape_html(&ui.operator_name),
        frontier_utils::escape_html(&ui.operator_email)
    ));
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    config: &Config,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        format!(
            r#"<main class='flex-1 overflow-auto bg-slate-50 p-6'>{}</main>"#,
            inner_content
        )
    } else {
        base_html(
            title,
            &config.ui.app_name,
            config.notifications.dismiss_after_ms,
            &format!(
                r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-slate-50 p-6'>{}</main>
    </div>
</div>"#,
                nav_sidebar(current_path, &config.ui),
                inner_content
            ),
        )
    }
}

/// Start the HTTP server
///
/// Binds to the configured address and serves until the listener fails.
pub async fn start_server(config: Config, workspace: Workspace) -> std::io::Result<()> {
    let addr = config.bind_address();
    let summary = workspace.summary();
    let state = AppState::new(config, workspace);

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Frontier server on http://{}", addr);
    log::info!(
        "Seeded {} transactions, {} rules, {} reports, {} users, {} audit entries",
        summary.transactions,
        summary.rules,
        summary.reports,
        summary.users,
        summary.audit_entries
    );
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /transactions (Transaction management)");
    log::info!("  - /rules (Matching rules)");
    log::info!("  - /reports (Reports & analytics)");
    log::info!("  - /admin (System administration)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router).await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    pub fn app() -> (Router, AppState) {
        let state = AppState::new(Config::default(), Workspace::seeded());
        (create_router(state.clone()), state)
    }

    pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, String) {
        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    pub fn htmx_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header("hx-request", "true")
            .body(Body::empty())
            .unwrap()
    }

    pub fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("hx-request", "true")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_full_page_has_shell() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/transactions")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>"));
        assert!(body.contains("id=\"toast-region\""));
        assert!(body.contains("Admin User"));
        assert!(body.contains("admin@company.com"));
        assert!(body.contains("href='/rules'"));
    }

    #[tokio::test]
    async fn test_htmx_page_skips_shell() {
        let (router, _) = app();
        let (status, body) = send(&router, htmx_get("/rules")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("<!DOCTYPE html>"));
        assert!(body.contains("Matching Rules"));
    }

    #[tokio::test]
    async fn test_summary() {
        let (router, _) = app();
        let (status, body) = send(&router, get("/api/summary")).await;
        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["reports"], 6);
    }

    #[test]
    fn test_nav_marks_active_link() {
        let ui = frontier_config::UiConfig::default();
        let nav = super::nav_sidebar("/reports", &ui);
        assert!(nav.contains("href='/reports' class='flex items-center gap-3 px-3 py-2 rounded-lg text-sm font-medium bg-blue-50"));
        assert!(nav.contains("Reconciliation"));
    }
}
