//! Closed enumerations for record categories and their badge styles

use serde::{Deserialize, Serialize};

/// Style lookup for a categorical value rendered as a badge
pub trait Badge {
    /// Text shown inside the badge
    fn label(&self) -> &str;
    /// Tailwind classes for the badge
    fn badge_class(&self) -> &'static str;
}

const GREEN: &str = "bg-green-100 text-green-800";
const YELLOW: &str = "bg-yellow-100 text-yellow-800";
const RED: &str = "bg-red-100 text-red-800";
const BLUE: &str = "bg-blue-100 text-blue-800";
const PURPLE: &str = "bg-purple-100 text-purple-800";
const GRAY: &str = "bg-gray-100 text-gray-800";

/// Transaction reconciliation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Matched,
    Pending,
    Exception,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Matched,
        TransactionStatus::Pending,
        TransactionStatus::Exception,
    ];
}

impl std::str::FromStr for TransactionStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "matched" => Ok(TransactionStatus::Matched),
            "pending" => Ok(TransactionStatus::Pending),
            "exception" => Ok(TransactionStatus::Exception),
            _ => Err(format!("Invalid transaction status: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Matched => write!(f, "matched"),
            TransactionStatus::Pending => write!(f, "pending"),
            TransactionStatus::Exception => write!(f, "exception"),
        }
    }
}

impl Badge for TransactionStatus {
    fn label(&self) -> &str {
        match self {
            TransactionStatus::Matched => "Matched",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Exception => "Exception",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            TransactionStatus::Matched => GREEN,
            TransactionStatus::Pending => YELLOW,
            TransactionStatus::Exception => RED,
        }
    }
}

/// How a matching rule is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleType {
    Automatic,
    Manual,
}

impl RuleType {
    pub const ALL: [RuleType; 2] = [RuleType::Automatic, RuleType::Manual];
}

impl Default for RuleType {
    fn default() -> Self {
        RuleType::Automatic
    }
}

impl std::str::FromStr for RuleType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "automatic" => Ok(RuleType::Automatic),
            "manual" => Ok(RuleType::Manual),
            _ => Err(format!("Invalid rule type: {}", s)),
        }
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleType::Automatic => write!(f, "automatic"),
            RuleType::Manual => write!(f, "manual"),
        }
    }
}

impl Badge for RuleType {
    fn label(&self) -> &str {
        match self {
            RuleType::Automatic => "Automatic",
            RuleType::Manual => "Manual",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            RuleType::Automatic => BLUE,
            RuleType::Manual => PURPLE,
        }
    }
}

/// Display bucket for a numeric rule priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// ≤ 2 is High, ≤ 4 is Medium, anything else Low
    pub fn from_priority(priority: i32) -> Self {
        if priority <= 2 {
            PriorityLevel::High
        } else if priority <= 4 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }
}

impl Badge for PriorityLevel {
    fn label(&self) -> &str {
        match self {
            PriorityLevel::High => "High",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::Low => "Low",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            PriorityLevel::High => RED,
            PriorityLevel::Medium => YELLOW,
            PriorityLevel::Low => GREEN,
        }
    }
}

/// Report family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Reconciliation,
    Exceptions,
    Analytics,
    Audit,
    Compliance,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Reconciliation,
        ReportType::Exceptions,
        ReportType::Analytics,
        ReportType::Audit,
        ReportType::Compliance,
    ];

    /// Option label in the generate form
    pub fn generate_label(&self) -> &'static str {
        match self {
            ReportType::Reconciliation => "Reconciliation Summary",
            ReportType::Exceptions => "Exception Report",
            ReportType::Analytics => "Analytics Report",
            ReportType::Audit => "Audit Trail",
            ReportType::Compliance => "Compliance Report",
        }
    }
}

impl Default for ReportType {
    fn default() -> Self {
        ReportType::Reconciliation
    }
}

impl std::str::FromStr for ReportType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reconciliation" => Ok(ReportType::Reconciliation),
            "exceptions" => Ok(ReportType::Exceptions),
            "analytics" => Ok(ReportType::Analytics),
            "audit" => Ok(ReportType::Audit),
            "compliance" => Ok(ReportType::Compliance),
            _ => Err(format!("Invalid report type: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportType::Reconciliation => write!(f, "reconciliation"),
            ReportType::Exceptions => write!(f, "exceptions"),
            ReportType::Analytics => write!(f, "analytics"),
            ReportType::Audit => write!(f, "audit"),
            ReportType::Compliance => write!(f, "compliance"),
        }
    }
}

impl Badge for ReportType {
    fn label(&self) -> &str {
        match self {
            ReportType::Reconciliation => "Reconciliation",
            ReportType::Exceptions => "Exceptions",
            ReportType::Analytics => "Analytics",
            ReportType::Audit => "Audit",
            ReportType::Compliance => "Compliance",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ReportType::Reconciliation => BLUE,
            ReportType::Exceptions => RED,
            ReportType::Analytics => PURPLE,
            ReportType::Audit => GRAY,
            ReportType::Compliance => GREEN,
        }
    }
}

/// Report generation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Completed,
    Generating,
    Failed,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Completed => write!(f, "completed"),
            ReportStatus::Generating => write!(f, "generating"),
            ReportStatus::Failed => write!(f, "failed"),
        }
    }
}

impl Badge for ReportStatus {
    fn label(&self) -> &str {
        match self {
            ReportStatus::Completed => "Completed",
            ReportStatus::Generating => "Generating",
            ReportStatus::Failed => "Failed",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            ReportStatus::Completed => GREEN,
            ReportStatus::Generating => YELLOW,
            ReportStatus::Failed => RED,
        }
    }
}

/// Output format offered by the generate form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Xlsx,
    Pdf,
    Csv,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [ReportFormat::Xlsx, ReportFormat::Pdf, ReportFormat::Csv];

    pub fn label(&self) -> &'static str {
        match self {
            ReportFormat::Xlsx => "Excel (.xlsx)",
            ReportFormat::Pdf => "PDF",
            ReportFormat::Csv => "CSV",
        }
    }
}

impl Default for ReportFormat {
    fn default() -> Self {
        ReportFormat::Xlsx
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xlsx" => Ok(ReportFormat::Xlsx),
            "pdf" => Ok(ReportFormat::Pdf),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Xlsx => write!(f, "xlsx"),
            ReportFormat::Pdf => write!(f, "pdf"),
            ReportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Account status of a dashboard user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Inactive,
}

impl std::str::FromStr for UserStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            _ => Err(format!("Invalid user status: {}", s)),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "Active"),
            UserStatus::Inactive => write!(f, "Inactive"),
        }
    }
}

impl Badge for UserStatus {
    fn label(&self) -> &str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            UserStatus::Active => GREEN,
            UserStatus::Inactive => GRAY,
        }
    }
}

/// Role badge; roles are free text so unknown roles get a neutral style
#[derive(Debug, Clone, Copy)]
pub struct RoleBadge<'a>(pub &'a str);

impl Badge for RoleBadge<'_> {
    fn label(&self) -> &str {
        match self.0 {
            "Reconciliation Manager" => "Manager",
            other => other,
        }
    }

    fn badge_class(&self) -> &'static str {
        match self.0 {
            "Admin" => RED,
            "Reconciliation Manager" => BLUE,
            "Analyst" => GREEN,
            "Auditor" => PURPLE,
            _ => GRAY,
        }
    }
}

/// Audit entry severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::str::FromStr for Severity {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!("Invalid severity: {}", s)),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "Info"),
            Severity::Warning => write!(f, "Warning"),
            Severity::Error => write!(f, "Error"),
        }
    }
}

impl Badge for Severity {
    fn label(&self) -> &str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            Severity::Info => BLUE,
            Severity::Warning => YELLOW,
            Severity::Error => RED,
        }
    }
}
