//! Dashboard page rendering
//!
//! Chart series are serialized into Chart.js configuration objects and
//! drawn client-side; the trend chart follows `charts.trend_chart_type`.

use crate::render;
use crate::AppState;
use frontier_config::{ChartConfig, ChartType};
use frontier_core::dashboard::EngineState;
use frontier_core::{DashboardSnapshot, DashboardTab};
use frontier_utils::escape_html;
use serde_json::json;
use std::collections::HashMap;

const MATCHED_COLOR: &str = "#22c55e";
const UNMATCHED_COLOR: &str = "#f59e0b";
const EXCEPTION_COLOR: &str = "#ef4444";
const VOLUME_COLOR: &str = "#3b82f6";

pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let snapshot = &workspace.dashboard;
    let tab = params
        .get("tab")
        .and_then(|t| t.parse::<DashboardTab>().ok())
        .unwrap_or_default();

    let kpis: String = snapshot
        .kpis
        .iter()
        .map(|k| render::stat_card(k.title, k.value, k.caption, k.accent.as_str()))
        .collect();

    let last_update = r#"<div class='flex items-center gap-4'>
        <div class='text-sm text-slate-600'>Last Update: <span id='last-update'></span></div>
        <div class='w-3 h-3 bg-green-500 rounded-full animate-pulse'></div>
        <script>document.getElementById('last-update').textContent = new Date().toLocaleTimeString();</script>
    </div>"#;

    let inner_content = format!(
        r#"{}
        <div class='grid grid-cols-1 md:grid-cols-5 gap-4 mb-6'>{}</div>
        <div id='dashboard-tabs'>{}</div>"#,
        render::page_header(
            "Frontier Reconciliation",
            "Real-time financial transaction matching & reporting",
            last_update
        ),
        kpis,
        render_dashboard_tabs(tab, snapshot, &state.config.charts)
    );

    axum::response::Html(crate::page_response(
        &headers,
        &state.config,
        "Dashboard",
        "/",
        &inner_content,
    ))
}

/// Tab bar plus the body of the active tab
pub fn render_dashboard_tabs(tab: DashboardTab, snapshot: &DashboardSnapshot, charts: &ChartConfig) -> String {
    let mut html = String::from("<div class='flex gap-1 p-1 mb-6 bg-slate-100 rounded-lg w-fit'>");
    for candidate in DashboardTab::ALL {
        let class = if candidate == tab {
            "bg-white text-slate-900 shadow-sm"
        } else {
            "text-slate-600 hover:text-slate-900"
        };
        html.push_str(&format!(
            "<button hx-get='/dashboard/tab/{}' hx-target='#dashboard-tabs' class='px-4 py-1.5 rounded-md text-sm font-medium {}'>{}</button>",
            candidate.slug(),
            class,
            candidate.label()
        ));
    }
    html.push_str("</div>");

    let body = match tab {
        DashboardTab::Overview => render_overview(snapshot, charts),
        DashboardTab::Reconciliation => render_engines(snapshot),
        DashboardTab::Exceptions => render_exceptions(snapshot),
        DashboardTab::Analytics => render_analytics(snapshot),
    };
    html.push_str(&body);
    html
}

fn render_overview(snapshot: &DashboardSnapshot, charts: &ChartConfig) -> String {
    format!(
        r#"<div class='grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6'>
    {}
    {}
</div>
{}"#,
        chart_card("chart-status", "Reconciliation Status", &status_chart(snapshot, charts)),
        chart_card("chart-volume", "Transaction Volume (24h)", &volume_chart(snapshot, charts)),
        chart_card("chart-trend", "Monthly Reconciliation Trends", &trend_chart(snapshot, charts))
    )
}

/// Card holding a canvas and the script that draws it
fn chart_card(id: &str, title: &str, config: &serde_json::Value) -> String {
    // "</" inside an inline script would end the script element
    let config = config.to_string().replace("</", "<\\/");
    format!(
        r#"<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
    <h3 class='text-lg font-semibold mb-4'>{title}</h3>
    <div class='h-72'><canvas id='{id}'></canvas></div>
    <script>(function() {{
        var el = document.getElementById('{id}');
        if (window.Chart && el) {{ new Chart(el, {config}); }}
    }})();</script>
</div>"#,
        title = title,
        id = id,
        config = config
    )
}

fn chart_options(charts: &ChartConfig) -> serde_json::Value {
    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "plugins": {
            "legend": { "display": charts.show_legend },
            "tooltip": { "enabled": charts.interactive },
        },
    });
    if !charts.interactive {
        options["events"] = json!([]);
    }
    options
}

/// Pie of matched / pending / exception shares
pub fn status_chart(snapshot: &DashboardSnapshot, charts: &ChartConfig) -> serde_json::Value {
    let shares = &snapshot.status_shares;
    json!({
        "type": "pie",
        "data": {
            "labels": shares.iter().map(|s| s.name).collect::<Vec<_>>(),
            "datasets": [{
                "data": shares.iter().map(|s| s.value).collect::<Vec<_>>(),
                "backgroundColor": shares.iter().map(|s| s.color).collect::<Vec<_>>(),
            }],
        },
        "options": chart_options(charts),
    })
}

pub fn volume_chart(snapshot: &DashboardSnapshot, charts: &ChartConfig) -> serde_json::Value {
    let points = &snapshot.volume_24h;
    json!({
        "type": "line",
        "data": {
            "labels": points.iter().map(|p| p.time).collect::<Vec<_>>(),
            "datasets": [{
                "label": "Volume",
                "data": points.iter().map(|p| p.volume).collect::<Vec<_>>(),
                "borderColor": VOLUME_COLOR,
                "backgroundColor": VOLUME_COLOR,
                "tension": 0.3,
            }],
        },
        "options": chart_options(charts),
    })
}

/// Monthly matched / unmatched / exceptions in the configured chart style
pub fn trend_chart(snapshot: &DashboardSnapshot, charts: &ChartConfig) -> serde_json::Value {
    let trend = &snapshot.monthly_trend;
    let (kind, stacked, fill) = match charts.trend_chart_type {
        ChartType::StackedBar => ("bar", true, false),
        ChartType::Bar => ("bar", false, false),
        ChartType::Line => ("line", false, false),
        ChartType::Area => ("line", false, true),
    };

    let dataset = |label: &str, color: &str, data: Vec<u64>| {
        json!({
            "label": label,
            "data": data,
            "backgroundColor": color,
            "borderColor": color,
            "fill": fill,
        })
    };

    let mut options = chart_options(charts);
    if stacked {
        options["scales"] = json!({
            "x": { "stacked": true },
            "y": { "stacked": true },
        });
    }

    json!({
        "type": kind,
        "data": {
            "labels": trend.iter().map(|t| t.month).collect::<Vec<_>>(),
            "datasets": [
                dataset("Matched", MATCHED_COLOR, trend.iter().map(|t| t.matched).collect()),
                dataset("Unmatched", UNMATCHED_COLOR, trend.iter().map(|t| t.unmatched).collect()),
                dataset("Exceptions", EXCEPTION_COLOR, trend.iter().map(|t| t.exceptions).collect()),
            ],
        },
        "options": options,
    })
}

fn render_engines(snapshot: &DashboardSnapshot) -> String {
    let rows: String = snapshot
        .engines
        .iter()
        .map(|engine| {
            let (tone, icon) = match engine.state {
                EngineState::Active => ("green", "✓"),
                EngineState::Pending => ("amber", "⏱"),
            };
            format!(
                "<div class='flex items-center justify-between p-4 bg-{tone}-50 border border-{tone}-200 rounded-lg'><div class='flex items-center gap-3'><span class='text-{tone}-600'>{icon}</span><span class='font-medium'>{name}</span></div><span class='text-{tone}-600 font-medium'>{state}</span></div>",
                tone = tone,
                icon = icon,
                name = escape_html(engine.name),
                state = engine.state
            )
        })
        .collect();

    section("Reconciliation Engine Status", &format!("<div class='space-y-4'>{}</div>", rows))
}

fn render_exceptions(snapshot: &DashboardSnapshot) -> String {
    let rows: String = snapshot
        .exceptions
        .iter()
        .map(|ex| {
            format!(
                "<div class='flex items-center justify-between p-4 border border-slate-200 rounded-lg'><div class='flex items-center gap-4'><span class='text-red-500'>⚠</span><div><div class='font-medium'>{}</div><div class='text-sm text-slate-600'>{}</div></div></div><div class='text-right'><div class='font-medium'>{}</div><div class='text-sm text-slate-600'>{}</div></div></div>",
                escape_html(ex.id),
                escape_html(ex.kind),
                escape_html(ex.amount),
                escape_html(ex.priority)
            )
        })
        .collect();

    section("Exception Management", &format!("<div class='space-y-4'>{}</div>", rows))
}

fn render_analytics(snapshot: &DashboardSnapshot) -> String {
    let figures: String = snapshot
        .analytics
        .iter()
        .map(|fig| {
            format!(
                "<div class='text-center p-6 bg-{accent}-50 rounded-lg'><div class='text-3xl font-bold text-{accent}-900'>{}</div><div class='text-{accent}-700'>{}</div></div>",
                escape_html(fig.value),
                escape_html(fig.label),
                accent = fig.accent.as_str()
            )
        })
        .collect();

    section(
        "Advanced Analytics",
        &format!("<div class='grid grid-cols-1 md:grid-cols-3 gap-6'>{}</div>", figures),
    )
}

fn section(title: &str, body: &str) -> String {
    format!(
        "<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'><h3 class='text-lg font-semibold mb-4'>{}</h3>{}</div>",
        title, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_chart_follows_config() {
        let snapshot = DashboardSnapshot::seeded();
        let mut charts = ChartConfig::default();

        let stacked = trend_chart(&snapshot, &charts);
        assert_eq!(stacked["type"], "bar");
        assert_eq!(stacked["options"]["scales"]["y"]["stacked"], true);
        assert_eq!(stacked["data"]["datasets"][0]["data"][4], 62000);

        charts.trend_chart_type = ChartType::Area;
        let area = trend_chart(&snapshot, &charts);
        assert_eq!(area["type"], "line");
        assert_eq!(area["data"]["datasets"][2]["fill"], true);
        assert!(area["options"].get("scales").is_none());
    }

    #[test]
    fn test_chart_options_without_interaction() {
        let charts = ChartConfig {
            show_legend: false,
            interactive: false,
            ..ChartConfig::default()
        };
        let pie = status_chart(&DashboardSnapshot::seeded(), &charts);
        assert_eq!(pie["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(pie["options"]["events"], json!([]));
        assert_eq!(pie["data"]["labels"][2], "Exceptions");
    }

    #[test]
    fn test_overview_has_three_charts() {
        let html = render_dashboard_tabs(DashboardTab::Overview, &DashboardSnapshot::seeded(), &ChartConfig::default());
        assert!(html.contains("canvas id='chart-status'"));
        assert!(html.contains("canvas id='chart-volume'"));
        assert!(html.contains("canvas id='chart-trend'"));
        assert!(html.contains("Transaction Volume (24h)"));
    }

    #[test]
    fn test_other_tabs() {
        let snapshot = DashboardSnapshot::seeded();
        let charts = ChartConfig::default();

        let engines = render_dashboard_tabs(DashboardTab::Reconciliation, &snapshot, &charts);
        assert!(engines.contains("ACH Processing"));
        assert!(engines.contains("bg-amber-50"));

        let exceptions = render_dashboard_tabs(DashboardTab::Exceptions, &snapshot, &charts);
        assert!(exceptions.contains("EX003"));
        assert!(exceptions.contains("Date Variance"));

        let analytics = render_dashboard_tabs(DashboardTab::Analytics, &snapshot, &charts);
        assert!(analytics.contains("96.2%"));
        assert!(analytics.contains("Avg Processing Time"));
    }
}
