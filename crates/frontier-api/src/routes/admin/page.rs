//! Admin page rendering
//!
//! The tab bar and the active tab body are rendered together into
//! `#admin-tabs`, so switching tabs also moves the active marker.

use crate::render;
use crate::AppState;
use frontier_core::admin::{health_cards, security_controls, settings_by_category};
use frontier_core::types::{RoleBadge, Severity, UserStatus};
use frontier_core::{AdminTab, AuditLog, RecordFilter, SystemSetting, User, UserStore, Workspace};
use frontier_utils::escape_html;
use std::collections::HashMap;

pub async fn page_admin(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let tab = params
        .get("tab")
        .and_then(|t| t.parse::<AdminTab>().ok())
        .unwrap_or_default();

    let accents = ["green", "purple", "amber"];
    let health: String = health_cards()
        .iter()
        .zip(accents)
        .map(|(card, accent)| render::stat_card(card.title, card.value, card.caption, accent))
        .collect();

    let inner_content = format!(
        r#"{}
        <div class='grid grid-cols-1 md:grid-cols-4 gap-4 mb-6'>
            {}{}
        </div>
        <div id='admin-tabs'>{}</div>"#,
        render::page_header(
            "System Administration",
            "Manage users, settings, and system configuration",
            ""
        ),
        render::stat_card(
            "Total Users",
            &workspace.users.len().to_string(),
            &format!("{} active", workspace.users.active_count()),
            "blue"
        ),
        health,
        render_admin_tabs(tab, &workspace, &params)
    );

    axum::response::Html(crate::page_response(
        &headers,
        &state.config,
        "Admin",
        "/admin",
        &inner_content,
    ))
}

/// Tab bar plus the body of the active tab
pub fn render_admin_tabs(tab: AdminTab, workspace: &Workspace, params: &HashMap<String, String>) -> String {
    let mut html = String::from("<div class='flex gap-1 p-1 mb-6 bg-slate-100 rounded-lg w-fit'>");
    for candidate in AdminTab::ALL {
        let class = if candidate == tab {
            "bg-white text-slate-900 shadow-sm"
        } else {
            "text-slate-600 hover:text-slate-900"
        };
        html.push_str(&format!(
            "<button hx-get='/admin/tab/{}' hx-target='#admin-tabs' class='px-4 py-1.5 rounded-md text-sm font-medium {}'>{}</button>",
            candidate.slug(),
            class,
            candidate.label()
        ));
    }
    html.push_str("</div>");

    let body = match tab {
        AdminTab::Users => render_users_tab(&workspace.users, params),
        AdminTab::Settings => render_settings_tab(&workspace.settings),
        AdminTab::Audit => render_audit_tab(&workspace.audit_log, params),
        AdminTab::Security => render_security_tab(),
    };
    html.push_str(&body);
    html
}

fn render_users_tab(users: &UserStore, params: &HashMap<String, String>) -> String {
    let filter = crate::routes::record_filter::<UserStatus>(params, "status");
    format!(
        r#"<div class='flex items-center justify-between mb-4'>
    <h3 class='text-lg font-medium'>User Management</h3>
    <button hx-post='/admin/users/new' hx-swap='none' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>+ Add User</button>
</div>
<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
    <form id='users-filter' class='flex gap-2 mb-4' onsubmit='return false'>
        {}
        <select name='status' hx-get='/admin/users/list' hx-target='#users-content' hx-include='#users-filter' hx-trigger='change'
            class='px-4 py-2 border border-slate-300 rounded-lg'>{}</select>
    </form>
    <div id='users-content'>{}</div>
</div>"#,
        render::search_input(
            "Search name or email...",
            crate::routes::query_text(params),
            "/admin/users/list",
            "#users-content",
            "#users-filter"
        ),
        render::category_options(
            "All Status",
            [("active", "Active"), ("inactive", "Inactive")],
            crate::routes::category_text(params, "status")
        ),
        render_users_list(users, &filter)
    )
}

/// User table for the given filter
pub fn render_users_list(users: &UserStore, filter: &RecordFilter<UserStatus>) -> String {
    let rows = users.filter(filter);
    if rows.is_empty() {
        return render::empty_state("No users match the current filters.");
    }

    let mut html = String::from(
        r#"<div class='overflow-x-auto'><table class='w-full text-sm'><thead><tr class='border-b border-slate-200 text-slate-700'>
        <th class='text-left py-3 px-4 font-medium'>User</th>
        <th class='text-left py-3 px-4 font-medium'>Role</th>
        <th class='text-left py-3 px-4 font-medium'>Status</th>
        <th class='text-left py-3 px-4 font-medium'>Last Login</th>
        <th class='text-left py-3 px-4 font-medium'>Permissions</th>
    </tr></thead><tbody>"#,
    );
    for user in rows {
        html.push_str(&render_user_row(user));
    }
    html.push_str("</tbody></table></div>");
    html
}

fn render_user_row(user: &User) -> String {
    let permissions: String = user
        .permissions
        .iter()
        .map(|p| {
            format!(
                "<span class='inline-block mr-1 mb-1 px-2 py-0.5 rounded bg-slate-100 text-xs text-slate-700'>{}</span>",
                escape_html(p)
            )
        })
        .collect();

    format!(
        r#"<tr class='border-b border-slate-100 hover:bg-slate-50'>
    <td class='py-3 px-4'><div class='font-medium text-slate-900'>{}</div><div class='text-sm text-slate-600'>{}</div></td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4 text-slate-600'>{}</td>
    <td class='py-3 px-4'>{}</td>
</tr>"#,
        escape_html(&user.name),
        escape_html(&user.email),
        render::badge(&RoleBadge(&user.role)),
        render::badge(&user.status),
        escape_html(&user.last_login),
        permissions
    )
}

fn render_settings_tab(settings: &[SystemSetting]) -> String {
    let mut html = String::from("<h3 class='text-lg font-medium mb-4'>System Configuration</h3><div class='space-y-6'>");
    for (category, entries) in settings_by_category(settings) {
        html.push_str(&format!(
            "<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'><h4 class='font-semibold mb-3'>{}</h4>",
            escape_html(category)
        ));
        for setting in entries {
            html.push_str(&format!(
                "<div class='flex items-center justify-between py-3 border-b border-slate-100 last:border-b-0'><span class='font-medium text-slate-900'>{}</span><span class='text-sm font-medium'>{}</span></div>",
                escape_html(&setting.key),
                escape_html(&setting.value)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_audit_tab(log: &AuditLog, params: &HashMap<String, String>) -> String {
    let filter = crate::routes::record_filter::<Severity>(params, "severity");
    format!(
        r#"<h3 class='text-lg font-medium mb-4'>Audit Trail</h3>
<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
    <div class='flex items-center justify-between mb-4'>
        <h4 class='font-semibold'>Recent System Activity</h4>
        <form id='audit-filter' class='flex gap-2' onsubmit='return false'>
            {}
            <select name='severity' hx-get='/admin/audit/list' hx-target='#audit-content' hx-include='#audit-filter' hx-trigger='change'
                class='px-4 py-2 border border-slate-300 rounded-lg'>{}</select>
        </form>
    </div>
    <div id='audit-content'>{}</div>
</div>"#,
        render::search_input(
            "Search activity...",
            crate::routes::query_text(params),
            "/admin/audit/list",
            "#audit-content",
            "#audit-filter"
        ),
        render::category_options(
            "All Severities",
            [("info", "Info"), ("warning", "Warning"), ("error", "Error")],
            crate::routes::category_text(params, "severity")
        ),
        render_audit_list(log, &filter)
    )
}

/// Audit entries, newest first as recorded
pub fn render_audit_list(log: &AuditLog, filter: &RecordFilter<Severity>) -> String {
    let entries = log.filter(filter);
    if entries.is_empty() {
        return render::empty_state("No audit entries match the current filters.");
    }

    let mut html = String::from("<div class='space-y-4'>");
    for entry in entries {
        html.push_str(&format!(
            r#"<div class='py-3 border-b border-slate-100 last:border-b-0'>
    <div class='flex items-center gap-3 mb-1'><span class='font-medium text-slate-900'>{}</span>{}</div>
    <div class='text-sm text-slate-600 mb-1'>{}</div>
    <div class='text-xs text-slate-500'>{} • {}</div>
</div>"#,
            escape_html(&entry.action),
            render::badge(&entry.severity),
            escape_html(&entry.details),
            escape_html(&entry.user),
            escape_html(&entry.timestamp)
        ));
    }
    html.push_str("</div>");
    html
}

fn render_security_tab() -> String {
    let controls = security_controls();
    let (access, compliance) = controls.split_at(controls.len().min(3));

    let column = |title: &str, rows: &[frontier_core::admin::SecurityControl]| {
        let items: String = rows
            .iter()
            .map(|c| {
                format!(
                    "<div class='flex justify-between items-center'><span>{}</span><span class='inline-flex px-2 py-0.5 rounded-full text-xs font-medium bg-green-100 text-green-800'>{}</span></div>",
                    c.name, c.status
                )
            })
            .collect();
        format!(
            "<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'><h4 class='font-semibold mb-3'>{}</h4><div class='space-y-3'>{}</div></div>",
            title, items
        )
    };

    format!(
        "<h3 class='text-lg font-medium mb-4'>Security Management</h3><div class='grid grid-cols-1 md:grid-cols-2 gap-6'>{}{}</div>",
        column("Access Control", access),
        column("Compliance Status", compliance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::CategoryFilter;

    #[test]
    fn test_users_tab_is_default() {
        let workspace = Workspace::seeded();
        let html = render_admin_tabs(AdminTab::default(), &workspace, &HashMap::new());
        assert!(html.contains("User Management"));
        assert!(html.contains("John Smith"));
        assert!(html.contains(">Manager<"));
        assert!(html.contains("Process Transactions"));
    }

    #[test]
    fn test_settings_grouped() {
        let workspace = Workspace::seeded();
        let html = render_admin_tabs(AdminTab::Settings, &workspace, &HashMap::new());
        let processing = html.find(">Processing</h4>").unwrap();
        let security = html.find(">Security</h4>").unwrap();
        assert!(processing < security);
        assert!(html.contains("±$0.05"));
    }

    #[test]
    fn test_audit_list_by_severity() {
        let log = AuditLog::new(frontier_core::seed::audit_log());
        let filter = RecordFilter::new("", CategoryFilter::Only(Severity::Warning));
        let html = render_audit_list(&log, &filter);
        assert!(html.contains("Authentication failure"));
        assert!(!html.contains("Created matching rule"));
    }

    #[test]
    fn test_security_tab_columns() {
        let html = render_security_tab();
        assert!(html.contains("Access Control"));
        assert!(html.contains("Compliance Status"));
        assert!(html.contains("AES-256"));
    }
}
