//! Shared HTML fragments: badges, toasts, filter controls, money

use frontier_config::{CurrencyConfig, SymbolPosition};
use frontier_core::types::Badge;
use frontier_core::Notification;
use frontier_utils::{escape_html, format_money, MoneyFormat};
use rust_decimal::Decimal;

pub fn badge(value: &impl Badge) -> String {
    format!(
        "<span class='inline-flex items-center px-2 py-0.5 rounded-full text-xs font-medium {}'>{}</span>",
        value.badge_class(),
        escape_html(value.label())
    )
}

pub fn money(amount: Decimal, currency: &CurrencyConfig) -> String {
    let fmt = MoneyFormat {
        symbol: &currency.symbol,
        decimal_places: currency.decimal_places,
        thousands_separator: &currency.thousands_separator,
        decimal_separator: &currency.decimal_separator,
        symbol_after: currency.symbol_position == SymbolPosition::After,
    };
    format_money(amount, &fmt)
}

/// Out-of-band fragment appending toasts to `#toast-region`
///
/// Empty when there is nothing to show, so responses without
/// notifications stay unchanged.
pub fn toasts(notifications: &[Notification], dismiss_after_ms: u64) -> String {
    if notifications.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div hx-swap-oob='beforeend:#toast-region'>");
    for n in notifications {
        let style = if n.is_destructive() {
            "bg-red-600 border-red-700 text-white"
        } else {
            "bg-white border-slate-200 text-slate-900"
        };
        html.push_str(&format!(
            "<div data-toast data-dismiss-after='{}' role='status' class='border rounded-lg shadow-lg p-4 {}'><p class='font-semibold text-sm'>{}</p><p class='text-sm opacity-90'>{}</p></div>",
            dismiss_after_ms,
            style,
            escape_html(&n.title),
            escape_html(&n.description)
        ));
    }
    html.push_str("</div>");
    html
}

/// `<option>` list for a category select; `all_label` is the sentinel entry
pub fn category_options<'a>(
    all_label: &str,
    options: impl IntoIterator<Item = (&'a str, &'a str)>,
    selected: &str,
) -> String {
    let mut html = format!(
        "<option value='all'{}>{}</option>",
        if selected == "all" || selected.is_empty() { " selected" } else { "" },
        all_label
    );
    for (value, label) in options {
        html.push_str(&format!(
            "<option value='{}'{}>{}</option>",
            value,
            if value == selected { " selected" } else { "" },
            label
        ));
    }
    html
}

/// Text search box that re-renders a list partial as the user types
pub fn search_input(placeholder: &str, value: &str, list_url: &str, target: &str, include: &str) -> String {
    format!(
        "<input type='text' name='q' value='{}' placeholder='{}' hx-get='{}' hx-target='{}' hx-include='{}' hx-trigger='keyup changed delay:300ms, search' class='px-4 py-2 border border-slate-300 rounded-lg w-72'>",
        escape_html(value),
        placeholder,
        list_url,
        target,
        include
    )
}

pub fn page_header(title: &str, subtitle: &str, actions: &str) -> String {
    format!(
        "<div class='flex items-center justify-between mb-6'><div><h2 class='text-2xl font-bold text-slate-900'>{}</h2><p class='text-slate-600'>{}</p></div><div class='flex gap-2'>{}</div></div>",
        title, subtitle, actions
    )
}

pub fn stat_card(label: &str, value: &str, caption: &str, accent: &str) -> String {
    format!(
        "<div class='bg-white rounded-xl shadow-sm border border-slate-200 p-4'><p class='text-sm font-medium text-{accent}-700'>{}</p><p class='text-2xl font-bold text-{accent}-900'>{}</p><p class='text-xs text-slate-500'>{}</p></div>",
        label,
        value,
        caption,
        accent = accent
    )
}

pub fn empty_state(message: &str) -> String {
    format!("<div class='text-center py-12 text-slate-500'>{}</div>", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::types::TransactionStatus;

    #[test]
    fn test_badge() {
        let html = badge(&TransactionStatus::Exception);
        assert!(html.contains("bg-red-100 text-red-800"));
        assert!(html.contains(">Exception<"));
    }

    #[test]
    fn test_toasts_empty() {
        assert_eq!(toasts(&[], 5000), "");
    }

    #[test]
    fn test_toasts_escape_and_variant() {
        let html = toasts(
            &[
                Notification::new("Opening Report", "Report \"<x>\" is opening"),
                Notification::destructive("Validation Error", "Please fill in all required fields."),
            ],
            3000,
        );
        assert!(html.starts_with("<div hx-swap-oob='beforeend:#toast-region'>"));
        assert!(html.contains("data-dismiss-after='3000'"));
        assert!(html.contains("Report &quot;&lt;x&gt;&quot; is opening"));
        assert_eq!(html.matches("bg-red-600").count(), 1);
        assert_eq!(html.matches("bg-white").count(), 1);
    }

    #[test]
    fn test_money_uses_currency_config() {
        let currency = CurrencyConfig::default();
        assert_eq!(money(Decimal::new(210000, 2), &currency), "$2,100.00");
    }

    #[test]
    fn test_category_options() {
        let html = category_options("All Status", [("matched", "Matched"), ("pending", "Pending")], "pending");
        assert!(html.contains("<option value='all'>All Status</option>"));
        assert!(html.contains("<option value='pending' selected>Pending</option>"));
    }
}
