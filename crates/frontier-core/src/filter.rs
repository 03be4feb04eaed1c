//! Free-text search combined with an exact category filter
//!
//! Every list page runs its record store through a [`RecordFilter`]:
//! a record is kept when its category matches (or the filter is "all")
//! and the query is a case-insensitive substring of one of its text
//! fields. Filtering is stable and never fails.

use crate::models::{AuditLogEntry, Report, Rule, Transaction, User};
use crate::types::{ReportType, RuleType, Severity, TransactionStatus, UserStatus};

/// A record that can be searched and filtered by category
pub trait Searchable {
    type Category: Copy + PartialEq;

    /// Text fields the free-text query is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Categorical value matched exactly
    fn category(&self) -> Self::Category;
}

/// Category selection: the "all" sentinel or one concrete value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    All,
    Only(C),
}

impl<C> Default for CategoryFilter<C> {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl<C: std::str::FromStr> CategoryFilter<C> {
    /// Parse a request parameter; "all", empty and unknown values select everything
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(v) if v.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(v) => v.parse().map(CategoryFilter::Only).unwrap_or(CategoryFilter::All),
        }
    }
}

impl<C: std::fmt::Display> std::fmt::Display for CategoryFilter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn accepts(&self, value: &C) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == value,
        }
    }
}

/// Query plus category, normalized once and applied to any record slice
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFilter<C> {
    query: String,
    category: CategoryFilter<C>,
}

impl<C> Default for RecordFilter<C> {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
        }
    }
}

impl<C: Copy + PartialEq> RecordFilter<C> {
    pub fn new(query: &str, category: CategoryFilter<C>) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            category,
        }
    }

    /// Normalized (trimmed, lower-cased) query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> CategoryFilter<C> {
        self.category
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable<Category = C>,
    {
        if !self.category.accepts(&record.category()) {
            return false;
        }
        self.query.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query))
    }

    /// Matching records, in their original order
    pub fn apply<'a, R>(&self, records: &'a [R]) -> Vec<&'a R>
    where
        R: Searchable<Category = C>,
    {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Owned variant of [`RecordFilter::apply`]
    pub fn apply_cloned<R>(&self, records: &[R]) -> Vec<R>
    where
        R: Searchable<Category = C> + Clone,
    {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// One page of a filtered view
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    /// 1-based page number, clamped to the available range
    pub page: usize,
    pub total_pages: usize,
    /// Number of records before slicing
    pub total: usize,
}

/// Slice an already-filtered view into pages of `per_page` records
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Paged<T> {
    let per_page = per_page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let page = page.clamp(1, total_pages);
    let items = items
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();
    Paged {
        items,
        page,
        total_pages,
        total,
    }
}

impl Searchable for Transaction {
    type Category = TransactionStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.description, &self.reference]
    }

    fn category(&self) -> TransactionStatus {
        self.status
    }
}

impl Searchable for Report {
    type Category = ReportType;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn category(&self) -> ReportType {
        self.report_type
    }
}

impl Searchable for Rule {
    type Category = RuleType;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description, &self.conditions]
    }

    fn category(&self) -> RuleType {
        self.rule_type
    }
}

impl Searchable for User {
    type Category = UserStatus;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn category(&self) -> UserStatus {
        self.status
    }
}

impl Searchable for AuditLogEntry {
    type Category = Severity;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.user, &self.action, &self.details]
    }

    fn category(&self) -> Severity {
        self.severity
    }
}
