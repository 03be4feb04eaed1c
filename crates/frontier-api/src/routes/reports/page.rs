//! Reports page rendering

use crate::render;
use crate::AppState;
use frontier_core::types::{Badge, ReportFormat, ReportStatus, ReportType};
use frontier_core::{RecordFilter, Report, ReportStore};
use frontier_utils::{escape_html, format_number};
use std::collections::HashMap;

pub async fn page_reports(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let store = &workspace.reports;
    let stats = store.stats();

    let query = crate::routes::query_text(&params);
    let report_type = crate::routes::category_text(&params, "type");
    let filter = crate::routes::record_filter::<ReportType>(&params, "type");

    let type_labels: Vec<(String, String)> = ReportType::ALL
        .iter()
        .map(|t| (t.to_string(), t.label().to_string()))
        .collect();

    let inner_content = format!(
        r#"{}
        <div class='grid grid-cols-1 md:grid-cols-4 gap-4 mb-6'>
            {}{}{}{}
        </div>
        {}
        <div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6 mb-6'>
            <h3 class='text-lg font-semibold mb-4'>Filter Reports</h3>
            <form id='reports-filter' class='flex gap-2' onsubmit='return false'>
                {}
                <select name='type' hx-get='/reports/list' hx-target='#reports-content' hx-include='#reports-filter' hx-trigger='change'
                    class='px-4 py-2 border border-slate-300 rounded-lg w-48'>{}</select>
            </form>
        </div>
        <div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
            <h3 class='text-lg font-semibold'>Available Reports</h3>
            <div id='reports-content'>{}</div>
        </div>"#,
        render::page_header(
            "Reports & Analytics",
            "Generate and manage reconciliation reports",
            ""
        ),
        render::stat_card("Total Reports", &stats.total.to_string(), "All report definitions", "blue"),
        render::stat_card("Completed", &stats.completed.to_string(), "Ready to view", "green"),
        render::stat_card("In Progress", &stats.generating.to_string(), "Currently generating", "yellow"),
        render::stat_card("Failed", &stats.failed.to_string(), "Needs attention", "red"),
        render_generate_form(),
        render::search_input("Search reports...", query, "/reports/list", "#reports-content", "#reports-filter"),
        render::category_options(
            "All Types",
            type_labels.iter().map(|(value, label)| (value.as_str(), label.as_str())),
            report_type
        ),
        render_reports_list(store, &filter)
    );

    axum::response::Html(crate::page_response(
        &headers,
        &state.config,
        "Reports",
        "/reports",
        &inner_content,
    ))
}

/// Generate form; submits with `hx-swap='none'` so only the toast lands
fn render_generate_form() -> String {
    let type_options: String = ReportType::ALL
        .iter()
        .map(|t| {
            format!(
                "<option value='{}'{}>{}</option>",
                t,
                if *t == ReportType::default() { " selected" } else { "" },
                t.generate_label()
            )
        })
        .collect();
    let format_options: String = ReportFormat::ALL
        .iter()
        .map(|f| {
            format!(
                "<option value='{}'{}>{}</option>",
                f,
                if *f == ReportFormat::default() { " selected" } else { "" },
                f.label()
            )
        })
        .collect();

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6 mb-6'>
    <h3 class='text-lg font-semibold mb-4'>Generate New Report</h3>
    <form hx-post='/reports/generate' hx-swap='none' class='grid grid-cols-1 md:grid-cols-4 gap-4 items-end'>
        <div>
            <label class='block text-sm font-medium mb-2'>Report Type</label>
            <select name='type' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>{}</select>
        </div>
        <div>
            <label class='block text-sm font-medium mb-2'>Date Range</label>
            <input type='date' name='date' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>
        </div>
        <div>
            <label class='block text-sm font-medium mb-2'>Format</label>
            <select name='format' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>{}</select>
        </div>
        <button type='submit' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Generate Report</button>
    </form>
</div>"#,
        type_options, format_options
    )
}

/// Report table with the "Showing N of M" line
pub fn render_reports_list(store: &ReportStore, filter: &RecordFilter<ReportType>) -> String {
    let reports = store.filter(filter);

    let mut html = format!(
        "<p class='text-sm text-slate-600 mb-3'>Showing {} of {} reports</p>",
        reports.len(),
        store.len()
    );

    if reports.is_empty() {
        html.push_str(&render::empty_state("No reports match the current filters."));
        return html;
    }

    html.push_str(r#"<div class='overflow-x-auto'><table class='w-full text-sm'><thead><tr class='border-b border-slate-200 text-slate-700'>
        <th class='text-left py-3 px-4 font-medium'>Report Name</th>
        <th class='text-left py-3 px-4 font-medium'>Type</th>
        <th class='text-left py-3 px-4 font-medium'>Period</th>
        <th class='text-left py-3 px-4 font-medium'>Last Generated</th>
        <th class='text-left py-3 px-4 font-medium'>Status</th>
        <th class='text-left py-3 px-4 font-medium'>Records</th>
        <th class='text-left py-3 px-4 font-medium'>Actions</th>
    </tr></thead><tbody>"#);

    for report in reports {
        html.push_str(&render_report_row(report));
    }
    html.push_str("</tbody></table></div>");
    html
}

fn render_report_row(report: &Report) -> String {
    let records = if report.records > 0 {
        format_number(report.records)
    } else {
        "N/A".to_string()
    };
    let actions = if report.status == ReportStatus::Completed {
        format!(
            "<button hx-post='/reports/{id}/view' hx-swap='none' class='px-2 py-1 rounded hover:bg-slate-100' title='View'>👁</button>\
             <button hx-post='/reports/{id}/download' hx-swap='none' class='px-2 py-1 rounded hover:bg-slate-100' title='Download'>⬇</button>",
            id = escape_html(&report.id)
        )
    } else {
        String::new()
    };

    format!(
        r#"<tr class='border-b border-slate-100 hover:bg-slate-50'>
    <td class='py-3 px-4'><div class='font-medium text-slate-900'>{}</div><div class='text-sm text-slate-600'>{}</div></td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'>{}</td>
    <td class='py-3 px-4'><div class='flex gap-2'>{}</div></td>
</tr>"#,
        escape_html(&report.name),
        escape_html(&report.size),
        render::badge(&report.report_type),
        escape_html(&report.period),
        escape_html(&report.last_generated),
        render::badge(&report.status),
        records,
        actions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::{seed, CategoryFilter};

    #[test]
    fn test_list_filters_analytics() {
        let store = ReportStore::new(seed::reports());
        let filter = RecordFilter::new("", CategoryFilter::Only(ReportType::Analytics));
        let html = render_reports_list(&store, &filter);
        assert!(html.contains("Showing 2 of 6 reports"));
        assert!(html.contains("Monthly Transaction Volume"));
        assert!(html.contains("Performance Metrics"));
        assert!(!html.contains("Daily Reconciliation Summary"));
    }

    #[test]
    fn test_records_and_actions() {
        let store = ReportStore::new(seed::reports());
        let html = render_reports_list(&store, &RecordFilter::default());
        assert!(html.contains("245,000"));
        assert!(html.contains("N/A"));
        assert!(html.contains("/reports/RPT001/view"));
        assert!(!html.contains("/reports/RPT005/view"));
        assert!(!html.contains("/reports/RPT006/download"));
    }

    #[test]
    fn test_generate_form_options() {
        let html = render_generate_form();
        assert!(html.contains("<option value='reconciliation' selected>Reconciliation Summary</option>"));
        assert!(html.contains("<option value='xlsx' selected>Excel (.xlsx)</option>"));
        assert!(html.contains("hx-swap='none'"));
    }
}
