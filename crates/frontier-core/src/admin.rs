//! Users, audit trail and system settings for the admin panel

use serde::Serialize;

use crate::error::CoreError;
use crate::filter::RecordFilter;
use crate::models::{AuditLogEntry, SystemSetting, User};
use crate::notification::{Notification, NotificationSink};
use crate::types::{Severity, UserStatus};

#[derive(Debug, Clone, Default)]
pub struct UserStore {
    records: Vec<User>,
}

impl UserStore {
    pub fn new(records: Vec<User>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[User] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|u| u.is_active()).count()
    }

    pub fn filter(&self, filter: &RecordFilter<UserStatus>) -> Vec<&User> {
        filter.apply(&self.records)
    }

    /// Simulated; no user is created
    pub fn add_user(&self, sink: &mut dyn NotificationSink) {
        sink.notify(Notification::new(
            "User Management",
            "New user creation form would open in a production system.",
        ));
    }
}

/// Append-only audit trail; entries cannot be edited or removed
#[derive(Debug, Clone, Default)]
pub struct AuditLog {
    entries: Vec<AuditLogEntry>,
}

impl AuditLog {
    pub fn new(entries: Vec<AuditLogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn filter(&self, filter: &RecordFilter<Severity>) -> Vec<&AuditLogEntry> {
        filter.apply(&self.entries)
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.entries.iter().filter(|e| e.severity == severity).count()
    }
}

/// Static health card on the admin overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthCard {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub fn health_cards() -> Vec<HealthCard> {
    vec![
        HealthCard {
            title: "System Status",
            value: "Healthy",
            caption: "99.9% uptime",
        },
        HealthCard {
            title: "Security",
            value: "Secure",
            caption: "No threats detected",
        },
        HealthCard {
            title: "Performance",
            value: "Optimal",
            caption: "2.3s avg response",
        },
    ]
}

/// Row in the security tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityControl {
    pub name: &'static str,
    pub status: &'static str,
}

pub fn security_controls() -> Vec<SecurityControl> {
    [
        ("Two-Factor Authentication", "Enabled"),
        ("Password Policy", "Strong"),
        ("Session Management", "Active"),
        ("PCI DSS", "Compliant"),
        ("SOX Controls", "Compliant"),
        ("Data Encryption", "AES-256"),
    ]
    .into_iter()
    .map(|(name, status)| SecurityControl { name, status })
    .collect()
}

/// Settings grouped by category, categories in first-seen order
pub fn settings_by_category(settings: &[SystemSetting]) -> Vec<(&str, Vec<&SystemSetting>)> {
    let mut groups: Vec<(&str, Vec<&SystemSetting>)> = Vec::new();
    for setting in settings {
        match groups.iter().position(|(c, _)| *c == setting.category) {
            Some(i) => groups[i].1.push(setting),
            None => groups.push((setting.category.as_str(), vec![setting])),
        }
    }
    groups
}

/// Admin panel tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Settings,
    Audit,
    Security,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Users, AdminTab::Settings, AdminTab::Audit, AdminTab::Security];

    pub fn slug(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Settings => "settings",
            AdminTab::Audit => "audit",
            AdminTab::Security => "security",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "User Management",
            AdminTab::Settings => "System Settings",
            AdminTab::Audit => "Audit Trail",
            AdminTab::Security => "Security",
        }
    }
}

impl std::str::FromStr for AdminTab {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminTab::ALL
            .into_iter()
            .find(|tab| tab.slug() == s)
            .ok_or_else(|| CoreError::UnknownTab { tab: s.to_string() })
    }
}
