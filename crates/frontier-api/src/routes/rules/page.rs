//! Rules page rendering
//!
//! The create form lives in `#rule-form-slot`; the list (with its
//! active/inactive counts) lives in `#rules-content` so every mutation
//! can re-render it in one swap.

use crate::render;
use crate::AppState;
use frontier_core::types::{Badge, PriorityLevel, RuleType};
use frontier_core::{RecordFilter, Rule, RuleDraft, RuleStore};
use frontier_utils::{escape_html, format_number};
use std::collections::HashMap;

pub async fn page_rules(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let workspace = state.workspace.read().await;
    let query = crate::routes::query_text(&params);
    let rule_type = crate::routes::category_text(&params, "type");
    let filter = crate::routes::record_filter::<RuleType>(&params, "type");

    let create_button = "<button hx-get='/rules/form' hx-target='#rule-form-slot' class='px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700'>+ Create New Rule</button>";

    let inner_content = format!(
        r#"{}
        <div id='rule-form-slot'></div>
        <div class='bg-white rounded-xl shadow-sm border border-slate-200 p-6'>
            <div class='flex items-center justify-between mb-4'>
                <h3 class='text-lg font-semibold'>Active Matching Rules</h3>
                <form id='rules-filter' class='flex gap-2' onsubmit='return false'>
                    {}
                    <select name='type' hx-get='/rules/list' hx-target='#rules-content' hx-include='#rules-filter' hx-trigger='change'
                        class='px-4 py-2 border border-slate-300 rounded-lg'>{}</select>
                </form>
            </div>
            <div id='rules-content'>{}</div>
        </div>"#,
        render::page_header(
            "Matching Rules",
            "Configure automated reconciliation rules and priorities",
            create_button
        ),
        render::search_input("Search rules...", query, "/rules/list", "#rules-content", "#rules-filter"),
        render::category_options(
            "All Types",
            [("automatic", "Automatic"), ("manual", "Manual")],
            rule_type
        ),
        render_rules_list(&workspace.rules, &filter)
    );

    axum::response::Html(crate::page_response(
        &headers,
        &state.config,
        "Rules",
        "/rules",
        &inner_content,
    ))
}

/// Counts line plus rule cards in priority order
pub fn render_rules_list(store: &RuleStore, filter: &RecordFilter<RuleType>) -> String {
    let rules = store.filter(filter);

    let mut html = format!(
        "<p class='text-sm text-slate-600 mb-4'>{} active rules, {} inactive</p>",
        store.active_count(),
        store.inactive_count()
    );

    if rules.is_empty() {
        html.push_str(&render::empty_state("No matching rules found."));
        return html;
    }

    html.push_str("<div class='space-y-4'>");
    for rule in rules {
        html.push_str(&render_rule_card(rule));
    }
    html.push_str("</div>");
    html
}

fn render_rule_card(rule: &Rule) -> String {
    let conditions = if rule.conditions.is_empty() {
        String::new()
    } else {
        format!(
            "<p class='text-xs text-slate-500 font-mono bg-slate-100 px-2 py-1 rounded'>{}</p>",
            escape_html(&rule.conditions)
        )
    };
    let (container, toggle_label, toggle_class) = if rule.is_active {
        ("border-slate-200 bg-white", "Active", "bg-blue-600")
    } else {
        ("border-slate-100 bg-slate-50", "Inactive", "bg-slate-300")
    };

    format!(
        r#"<div id='rule-{id}' class='p-4 border rounded-lg {container}'>
    <div class='flex items-start justify-between'>
        <div class='flex-1'>
            <div class='flex items-center gap-3 mb-2'>
                <h3 class='font-medium text-slate-900'>{name}</h3>{priority}{kind}
                <span class='text-xs text-slate-500'>#{number}</span>
            </div>
            <p class='text-sm text-slate-600 mb-2'>{description}</p>
            {conditions}
            <div class='mt-2 text-xs text-slate-500'>Matched {matches} transactions</div>
        </div>
        <div class='flex items-center gap-3'>
            <button hx-post='/rules/{id}/toggle' hx-target='#rules-content' hx-include='#rules-filter'
                class='w-10 h-5 rounded-full {toggle_class}' aria-label='Toggle rule'></button>
            <span class='text-xs text-slate-600'>{toggle_label}</span>
            <button hx-post='/rules/{id}/delete' hx-target='#rules-content' hx-include='#rules-filter'
                hx-confirm='Delete this rule?' class='px-2 py-1 text-sm text-red-600 hover:text-red-700'>Delete</button>
        </div>
    </div>
</div>"#,
        id = escape_html(&rule.id),
        container = container,
        name = escape_html(&rule.name),
        priority = render::badge(&PriorityLevel::from_priority(rule.priority)),
        kind = render::badge(&rule.rule_type),
        number = rule.priority,
        description = escape_html(&rule.description),
        conditions = conditions,
        matches = format_number(rule.match_count),
        toggle_class = toggle_class,
        toggle_label = toggle_label,
    )
}

/// Create form, pre-filled with `draft` when re-rendered after a failed save
pub fn render_rule_form(draft: &RuleDraft) -> String {
    let type_options: String = RuleType::ALL
        .iter()
        .map(|t| {
            format!(
                "<option value='{}'{}>{}</option>",
                t,
                if *t == draft.rule_type { " selected" } else { "" },
                match t {
                    RuleType::Automatic => t.label(),
                    RuleType::Manual => "Manual Review",
                }
            )
        })
        .collect();

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm border border-blue-200 p-6 mb-6'>
    <h3 class='text-lg font-semibold mb-4'>Create New Matching Rule</h3>
    <form hx-post='/rules' hx-target='#rule-form-slot' hx-include='#rules-filter' class='space-y-4'>
        <div class='grid grid-cols-1 md:grid-cols-2 gap-4'>
            <div>
                <label class='block text-sm font-medium mb-2'>Rule Name *</label>
                <input type='text' name='name' value='{}' placeholder='Enter rule name' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>
            </div>
            <div>
                <label class='block text-sm font-medium mb-2'>Rule Type</label>
                <select name='rule_type' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>{}</select>
            </div>
        </div>
        <div>
            <label class='block text-sm font-medium mb-2'>Description *</label>
            <input type='text' name='description' value='{}' placeholder='Describe what this rule does' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>
        </div>
        <div>
            <label class='block text-sm font-medium mb-2'>Matching Conditions</label>
            <input type='text' name='conditions' value='{}' placeholder='e.g., Amount = Exact AND Date ± 2 days' class='w-full px-3 py-2 border border-slate-300 rounded-lg'>
        </div>
        <div>
            <label class='block text-sm font-medium mb-2'>Priority (1-10)</label>
            <input type='number' name='priority' min='1' max='10' value='{}' class='w-32 px-3 py-2 border border-slate-300 rounded-lg'>
        </div>
        <div class='flex gap-3'>
            <button type='submit' class='px-4 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700'>Save Rule</button>
            <button type='button' hx-get='/rules/form/close' hx-target='#rule-form-slot' class='px-4 py-2 border border-slate-300 rounded-lg hover:bg-slate-50'>Cancel</button>
        </div>
    </form>
</div>"#,
        escape_html(&draft.name),
        type_options,
        escape_html(&draft.description),
        escape_html(&draft.conditions),
        draft.priority
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::{seed, CategoryFilter};

    #[test]
    fn test_list_in_priority_order_with_counts() {
        let store = RuleStore::new(seed::rules());
        let html = render_rules_list(&store, &RecordFilter::default());
        assert!(html.contains("3 active rules, 1 inactive"));
        let first = html.find("Credit Card Amount Match").unwrap();
        let last = html.find("Merchant Settlement").unwrap();
        assert!(first < last);
        assert!(html.contains("Matched 1,542 transactions"));
    }

    #[test]
    fn test_list_filtered_by_type() {
        let store = RuleStore::new(seed::rules());
        let filter = RecordFilter::new("", CategoryFilter::Only(RuleType::Manual));
        let html = render_rules_list(&store, &filter);
        assert!(html.contains("Manual Review Required"));
        assert!(!html.contains("Reference Number Match"));
    }

    #[test]
    fn test_form_keeps_entered_values() {
        let draft = RuleDraft {
            name: "Batch <match>".to_string(),
            rule_type: RuleType::Manual,
            priority: 7,
            ..RuleDraft::default()
        };
        let html = render_rule_form(&draft);
        assert!(html.contains("value='Batch &lt;match&gt;'"));
        assert!(html.contains("<option value='automatic'>Automatic</option>"));
        assert!(html.contains("<option value='manual' selected>Manual Review</option>"));
        assert!(html.contains("value='7'"));
    }
}
