//! Transactions page rendering
//!
//! - page_transactions: header, status counts, search controls and the first list page
//! - render_transactions_list: list fragment shared with the HTMX partial

use crate::render;
use crate::AppState;
use frontier_config::Config;
use frontier_core::filter::paginate;
use frontier_core::types::{Badge, TransactionStatus};
use frontier_core::{RecordFilter, TransactionStore};
use frontier_utils::escape_html;
use std::collections::HashMap;

pub async fn page_transactions(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let store = &workspace.transactions;
    let counts = store.status_counts();

    let query = crate::routes::query_text(&params);
    let status = crate::routes::category_text(&params, "status");
    let filter = crate::routes::record_filter::<TransactionStatus>(&params, "status");
    let page = params.get("page").and_then(|s| s.parse().ok()).unwrap_or(1);

    let status_labels: Vec<(String, String)> = TransactionStatus::ALL
        .iter()
        .map(|s| (s.to_string(), s.label().to_string()))
        .collect();
    let status_options = render::category_options(
        "All Status",
        status_labels.iter().map(|(value, label)| (value.as_str(), label.as_str())),
        status,
    );
    let total_amount = render::money(store.total_amount(), &state.config.currency);

    let import_button = "<button hx-post='/transactions/import' hx-swap='none' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>Import Transactions</button>";

    let inner_content = format!(
        r#"{}
        <div class='grid grid-cols-1 md:grid-cols-4 gap-4 mb-6'>
            {}{}{}{}
        </div>
        <div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
            <form id='transactions-filter' class='flex gap-2 mb-4' onsubmit='return false'>
                {}
                <select name='status' hx-get='/transactions/list' hx-target='#transactions-content' hx-include='#transactions-filter' hx-trigger='change'
                    class='px-4 py-2 border border-slate-300 rounded-lg'>{}</select>
            </form>
            <div id='transactions-content'>{}</div>
        </div>"#,
        render::page_header(
            "Transaction Management",
            "Import, process, and reconcile financial transactions",
            import_button
        ),
        render::stat_card("Total", &store.len().to_string(), &total_amount, "blue"),
        render::stat_card("Matched", &counts.matched.to_string(), "Reconciled", "green"),
        render::stat_card("Pending", &counts.pending.to_string(), "Awaiting match", "amber"),
        render::stat_card("Exceptions", &counts.exception.to_string(), "Requires review", "red"),
        render::search_input(
            "Search description or reference...",
            query,
            "/transactions/list",
            "#transactions-content",
            "#transactions-filter"
        ),
        status_options,
        render_transactions_list(store, &filter, page, &state.config, query, status)
    );

    axum::response::Html(crate::page_response(
        &headers,
        &state.config,
        "Transactions",
        "/transactions",
        &inner_content,
    ))
}

/// Filtered, paginated transaction table
pub fn render_transactions_list(
    store: &TransactionStore,
    filter: &RecordFilter<TransactionStatus>,
    page: usize,
    config: &Config,
    query: &str,
    status: &str,
) -> String {
    let matching = store.filter(filter);
    let paged = paginate(matching, page, config.pagination.records_per_page);

    let mut html = format!(
        "<p class='text-sm text-slate-600 mb-3'>Showing {} of {} transactions</p>",
        paged.total,
        store.len()
    );

    if paged.items.is_empty() {
        html.push_str(&render::empty_state("No transactions match the current filters."));
        return html;
    }

    html.push_str(r#"<div class='overflow-x-auto'><table class='w-full text-sm'><thead class='bg-slate-50 text-slate-600'><tr>
        <th class='px-4 py-2 text-left'>Transaction</th>
        <th class='px-4 py-2 text-left'>Date</th>
        <th class='px-4 py-2 text-left'>Source</th>
        <th class='px-4 py-2 text-right'>Amount</th>
        <th class='px-4 py-2 text-left'>Status</th>
        <th class='px-4 py-2 text-left'>Reference</th>
        <th class='px-4 py-2 text-right'>Actions</th>
    </tr></thead><tbody>"#);

    for t in &paged.items {
        let review = if t.needs_review() {
            "<button class='px-2 py-1 text-xs rounded bg-red-50 text-red-700 hover:bg-red-100'>Review</button>"
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<tr class='border-t border-slate-100 hover:bg-slate-50'>
            <td class='px-4 py-3'><p class='font-medium'>{}</p><p class='text-slate-500'>{}</p></td>
            <td class='px-4 py-3'>{}</td>
            <td class='px-4 py-3'>{}</td>
            <td class='px-4 py-3 text-right font-medium'>{}</td>
            <td class='px-4 py-3'>{}</td>
            <td class='px-4 py-3 font-mono text-xs'>{}</td>
            <td class='px-4 py-3 text-right space-x-1'><button class='px-2 py-1 text-xs rounded bg-slate-100 hover:bg-slate-200'>View</button>{}</td>
        </tr>"#,
            escape_html(&t.id),
            escape_html(&t.description),
            escape_html(&t.date),
            escape_html(&t.source),
            render::money(t.amount, &config.currency),
            render::badge(&t.status),
            escape_html(&t.reference),
            review
        ));
    }
    html.push_str("</tbody></table></div>");

    if paged.total_pages > 1 {
        let link = |target_page: usize, label: &str, enabled: bool| {
            if enabled {
                format!(
                    "<button hx-get='/transactions/list?q={}&status={}&page={}' hx-target='#transactions-content' class='px-3 py-1 border rounded-lg hover:bg-slate-50'>{}</button>",
                    urlencoding::encode(query),
                    urlencoding::encode(status),
                    target_page,
                    label
                )
            } else {
                format!("<span class='px-3 py-1 border rounded-lg text-slate-300'>{}</span>", label)
            }
        };
        html.push_str(&format!(
            "<div class='flex items-center justify-between mt-4 text-sm'><span class='text-slate-600'>Page {} of {}</span><div class='flex gap-2'>{}{}</div></div>",
            paged.page,
            paged.total_pages,
            link(paged.page.saturating_sub(1), "Previous", paged.page > 1),
            link(paged.page + 1, "Next", paged.page < paged.total_pages)
        ));
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::{seed, CategoryFilter};

    #[test]
    fn test_list_shows_counts() {
        let store = TransactionStore::new(seed::transactions());
        let filter = RecordFilter::new("visa", CategoryFilter::All);
        let html = render_transactions_list(&store, &filter, 1, &Config::default(), "visa", "all");
        assert!(html.contains("Showing 1 of 5 transactions"));
        assert!(html.contains("TXN001"));
        assert!(!html.contains("TXN002"));
        assert!(html.contains("$1,250.00"));
    }

    #[test]
    fn test_list_paginates() {
        let store = TransactionStore::new(seed::transactions());
        let mut config = Config::default();
        config.pagination.records_per_page = 2;
        let html = render_transactions_list(&store, &RecordFilter::default(), 2, &config, "", "all");
        assert!(html.contains("Showing 5 of 5 transactions"));
        assert!(html.contains("Page 2 of 3"));
        assert!(html.contains("TXN003"));
        assert!(!html.contains("TXN001"));
        assert!(html.contains("page=3"));
    }

    #[test]
    fn test_exceptions_get_review_action() {
        let store = TransactionStore::new(seed::transactions());
        let filter = RecordFilter::new("", CategoryFilter::Only(TransactionStatus::Exception));
        let html = render_transactions_list(&store, &filter, 1, &Config::default(), "", "exception");
        assert!(html.contains("Review"));
    }
}
