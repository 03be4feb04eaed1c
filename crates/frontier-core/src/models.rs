//! Core data models for the dashboard pages

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{ReportStatus, ReportType, RuleType, Severity, TransactionStatus, UserStatus};

/// Imported financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier (e.g., "TXN001")
    pub id: String,
    /// Booking date (YYYY-MM-DD format)
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    /// Feed the transaction came from (e.g., "Credit Card")
    pub source: String,
    pub status: TransactionStatus,
    /// External reference number
    pub reference: String,
}

impl Transaction {
    /// Exceptions get an extra review action in the list
    pub fn needs_review(&self) -> bool {
        self.status == TransactionStatus::Exception
    }
}

/// Matching rule shown on the rules page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Free-text conditions, never evaluated
    pub conditions: String,
    /// Lower sorts first; no uniqueness requirement
    pub priority: i32,
    pub is_active: bool,
    pub match_count: u64,
    #[serde(rename = "type")]
    pub rule_type: RuleType,
}

/// Input for creating a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub conditions: String,
    #[serde(default = "default_rule_priority")]
    pub priority: i32,
    #[serde(default, rename = "type")]
    pub rule_type: RuleType,
}

/// Priority a new rule gets when none is given
pub const DEFAULT_RULE_PRIORITY: i32 = 5;

fn default_rule_priority() -> i32 {
    DEFAULT_RULE_PRIORITY
}

impl Default for RuleDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            conditions: String::new(),
            priority: DEFAULT_RULE_PRIORITY,
            rule_type: RuleType::Automatic,
        }
    }
}

impl RuleDraft {
    /// Name and description are required
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Generated (or generating) report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Schedule label (e.g., "Daily", "Real-time")
    pub period: String,
    /// YYYY-MM-DD HH:MM:SS
    pub last_generated: String,
    pub status: ReportStatus,
    /// Human-readable size or "N/A"
    pub size: String,
    pub records: u64,
}

impl Report {
    /// Only completed reports can be viewed or downloaded
    pub fn is_available(&self) -> bool {
        self.status == ReportStatus::Completed
    }
}

/// Dashboard operator account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub last_login: String,
    pub permissions: Vec<String>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

/// Audit trail entry; immutable once recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub details: String,
    pub severity: Severity,
}

/// Read-only application setting shown in the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSetting {
    pub key: String,
    pub value: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_draft_completeness() {
        let mut draft = RuleDraft::default();
        assert!(!draft.is_complete());
        draft.name = "Amount match".to_string();
        assert!(!draft.is_complete());
        draft.description = "   ".to_string();
        assert!(!draft.is_complete());
        draft.description = "Exact amount".to_string();
        assert!(draft.is_complete());
    }

    #[test]
    fn test_rule_draft_json_defaults() {
        let draft: RuleDraft = serde_json::from_str(r#"{"name": "A", "description": "B"}"#).unwrap();
        assert_eq!(draft.priority, DEFAULT_RULE_PRIORITY);
        assert_eq!(draft.rule_type, RuleType::Automatic);
        assert!(draft.conditions.is_empty());
    }

    #[test]
    fn test_rule_serializes_camel_case() {
        let rule = Rule {
            id: "RULE001".to_string(),
            name: "A".to_string(),
            description: "B".to_string(),
            conditions: String::new(),
            priority: 1,
            is_active: true,
            match_count: 3,
            rule_type: RuleType::Manual,
        };
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["isActive"], true);
        assert_eq!(value["matchCount"], 3);
        assert_eq!(value["type"], "manual");
    }

    #[test]
    fn test_report_timestamp() {
        let report = Report {
            id: "RPT001".to_string(),
            name: "Daily".to_string(),
            report_type: ReportType::Reconciliation,
            period: "Daily".to_string(),
            last_generated: "2024-06-27 09:00:00".to_string(),
            status: ReportStatus::Completed,
            size: "2.1 MB".to_string(),
            records: 15420,
        };
        assert!(report.is_available());
    }
}
