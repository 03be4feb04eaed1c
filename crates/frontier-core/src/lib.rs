//! Record stores, filtering and simulated actions behind the dashboard
//!
//! Each page owns one store in the [`Workspace`]. Stores are seeded
//! once at startup and only mutated in memory; there is no cross-page
//! synchronization and nothing survives a restart.

pub mod admin;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod models;
pub mod notification;
pub mod reports;
pub mod rules;
pub mod seed;
pub mod transactions;
pub mod types;

use serde::Serialize;

pub use admin::{AdminTab, AuditLog, UserStore};
pub use dashboard::{DashboardSnapshot, DashboardTab};
pub use error::{CoreError, CoreResult, ErrorSeverity};
pub use filter::{CategoryFilter, Paged, RecordFilter, Searchable};
pub use models::{AuditLogEntry, Report, Rule, RuleDraft, SystemSetting, Transaction, User};
pub use notification::{Notification, NotificationBuffer, NotificationSink, NotificationVariant};
pub use reports::{GenerateRequest, ReportStats, ReportStore};
pub use rules::RuleStore;
pub use transactions::{StatusCounts, TransactionStore};

/// In-memory state of every page
#[derive(Debug, Clone)]
pub struct Workspace {
    pub transactions: TransactionStore,
    pub rules: RuleStore,
    pub reports: ReportStore,
    pub users: UserStore,
    pub audit_log: AuditLog,
    pub settings: Vec<SystemSetting>,
    pub dashboard: DashboardSnapshot,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Record counts logged at startup and served by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkspaceSummary {
    pub transactions: usize,
    pub rules: usize,
    pub reports: usize,
    pub users: usize,
    pub audit_entries: usize,
}

impl Workspace {
    /// Workspace populated with the static seed records
    pub fn seeded() -> Self {
        Self {
            transactions: TransactionStore::new(seed::transactions()),
            rules: RuleStore::new(seed::rules()),
            reports: ReportStore::new(seed::reports()),
            users: UserStore::new(seed::users()),
            audit_log: AuditLog::new(seed::audit_log()),
            settings: seed::system_settings(),
            dashboard: DashboardSnapshot::seeded(),
        }
    }

    pub fn summary(&self) -> WorkspaceSummary {
        WorkspaceSummary {
            transactions: self.transactions.len(),
            rules: self.rules.len(),
            reports: self.reports.len(),
            users: self.users.len(),
            audit_entries: self.audit_log.len(),
        }
    }
}
