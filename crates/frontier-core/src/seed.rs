//! Static records every page starts from

use rust_decimal::Decimal;

use crate::models::{AuditLogEntry, Report, Rule, SystemSetting, Transaction, User};
use crate::types::{ReportStatus, ReportType, RuleType, Severity, TransactionStatus, UserStatus};

fn transaction(
    id: &str,
    date: &str,
    cents: i64,
    description: &str,
    source: &str,
    status: TransactionStatus,
    reference: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        date: date.to_string(),
        amount: Decimal::new(cents, 2),
        description: description.to_string(),
        source: source.to_string(),
        status,
        reference: reference.to_string(),
    }
}

pub fn transactions() -> Vec<Transaction> {
    vec![
        transaction(
            "TXN001",
            "2024-06-27",
            125000,
            "Credit Card Payment - Visa ****4532",
            "Credit Card",
            TransactionStatus::Matched,
            "REF123456",
        ),
        transaction(
            "TXN002",
            "2024-06-27",
            75050,
            "ACH Transfer - ABC Corp",
            "Bank Transfer",
            TransactionStatus::Pending,
            "ACH789012",
        ),
        transaction(
            "TXN003",
            "2024-06-26",
            210000,
            "Wire Transfer - XYZ Ltd",
            "Wire",
            TransactionStatus::Exception,
            "WIRE345678",
        ),
        transaction(
            "TXN004",
            "2024-06-26",
            45075,
            "Online Payment - PayPal",
            "Online Payment",
            TransactionStatus::Matched,
            "PP901234",
        ),
        transaction(
            "TXN005",
            "2024-06-25",
            320000,
            "Merchant Settlement",
            "Settlement",
            TransactionStatus::Pending,
            "SET567890",
        ),
    ]
}

pub fn rules() -> Vec<Rule> {
    let rule = |id: &str,
                name: &str,
                description: &str,
                conditions: &str,
                priority: i32,
                is_active: bool,
                match_count: u64,
                rule_type: RuleType| Rule {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        conditions: conditions.to_string(),
        priority,
        is_active,
        match_count,
        rule_type,
    };

    vec![
        rule(
            "RULE001",
            "Credit Card Amount Match",
            "Match transactions by exact amount and date within 3 days",
            "Amount = Exact AND Date ± 3 days",
            1,
            true,
            1542,
            RuleType::Automatic,
        ),
        rule(
            "RULE002",
            "Reference Number Match",
            "Match by reference number with fuzzy matching",
            "Reference Number = Fuzzy Match (95% confidence)",
            2,
            true,
            832,
            RuleType::Automatic,
        ),
        rule(
            "RULE003",
            "Manual Review Required",
            "Flag for manual review when amount > $10,000",
            "Amount > $10,000",
            3,
            true,
            23,
            RuleType::Manual,
        ),
        rule(
            "RULE004",
            "Merchant Settlement",
            "Auto-match merchant settlement batches",
            "Source = Settlement AND Description contains \"BATCH\"",
            4,
            false,
            156,
            RuleType::Automatic,
        ),
    ]
}

pub fn reports() -> Vec<Report> {
    let report = |id: &str,
                  name: &str,
                  report_type: ReportType,
                  period: &str,
                  last_generated: &str,
                  status: ReportStatus,
                  size: &str,
                  records: u64| Report {
        id: id.to_string(),
        name: name.to_string(),
        report_type,
        period: period.to_string(),
        last_generated: last_generated.to_string(),
        status,
        size: size.to_string(),
        records,
    };

    vec![
        report(
            "RPT001",
            "Daily Reconciliation Summary",
            ReportType::Reconciliation,
            "Daily",
            "2024-06-27 09:00:00",
            ReportStatus::Completed,
            "2.1 MB",
            15420,
        ),
        report(
            "RPT002",
            "Exception Report",
            ReportType::Exceptions,
            "Real-time",
            "2024-06-27 10:30:00",
            ReportStatus::Completed,
            "156 KB",
            52,
        ),
        report(
            "RPT003",
            "Monthly Transaction Volume",
            ReportType::Analytics,
            "Monthly",
            "2024-06-01 08:00:00",
            ReportStatus::Completed,
            "8.7 MB",
            245000,
        ),
        report(
            "RPT004",
            "Audit Trail Report",
            ReportType::Audit,
            "Weekly",
            "2024-06-26 18:00:00",
            ReportStatus::Completed,
            "1.8 MB",
            3420,
        ),
        report(
            "RPT005",
            "Compliance Summary",
            ReportType::Compliance,
            "Quarterly",
            "2024-06-27 11:15:00",
            ReportStatus::Generating,
            "N/A",
            0,
        ),
        report(
            "RPT006",
            "Performance Metrics",
            ReportType::Analytics,
            "Daily",
            "2024-06-26 23:59:00",
            ReportStatus::Failed,
            "N/A",
            0,
        ),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id: &str,
                name: &str,
                email: &str,
                role: &str,
                status: UserStatus,
                last_login: &str,
                permissions: &[&str]| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status,
        last_login: last_login.to_string(),
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    };

    vec![
        user(
            "USR001",
            "John Smith",
            "john.smith@company.com",
            "Admin",
            UserStatus::Active,
            "2024-06-27 09:15:00",
            &["Full Access"],
        ),
        user(
            "USR002",
            "Sarah Johnson",
            "sarah.johnson@company.com",
            "Reconciliation Manager",
            UserStatus::Active,
            "2024-06-27 08:30:00",
            &["View Reports", "Manage Rules", "Process Transactions"],
        ),
        user(
            "USR003",
            "Mike Davis",
            "mike.davis@company.com",
            "Analyst",
            UserStatus::Active,
            "2024-06-26 16:45:00",
            &["View Reports", "Export Data"],
        ),
        user(
            "USR004",
            "Lisa Wong",
            "lisa.wong@company.com",
            "Auditor",
            UserStatus::Inactive,
            "2024-06-25 11:20:00",
            &["View Reports", "Audit Trail"],
        ),
    ]
}

pub fn audit_log() -> Vec<AuditLogEntry> {
    let entry = |timestamp: &str, user: &str, action: &str, details: &str, severity: Severity| {
        AuditLogEntry {
            timestamp: timestamp.to_string(),
            user: user.to_string(),
            action: action.to_string(),
            details: details.to_string(),
            severity,
        }
    };

    vec![
        entry(
            "2024-06-27 10:30:15",
            "john.smith@company.com",
            "Created matching rule",
            "Rule: Credit Card Amount Match",
            Severity::Info,
        ),
        entry(
            "2024-06-27 09:45:22",
            "sarah.johnson@company.com",
            "Processed transaction batch",
            "Batch ID: BATCH_20240627_001 (2,450 transactions)",
            Severity::Info,
        ),
        entry(
            "2024-06-27 09:12:03",
            "system",
            "Authentication failure",
            "Failed login attempt from IP: 192.168.1.100",
            Severity::Warning,
        ),
        entry(
            "2024-06-26 18:30:45",
            "mike.davis@company.com",
            "Exported reconciliation report",
            "Report: Monthly_Reconciliation_June2024.xlsx",
            Severity::Info,
        ),
    ]
}

pub fn system_settings() -> Vec<SystemSetting> {
    [
        ("Auto-reconciliation", "Enabled", "Processing"),
        ("Match tolerance", "±$0.05", "Processing"),
        ("Batch size", "10,000 transactions", "Performance"),
        ("Retention period", "7 years", "Compliance"),
        ("Encryption level", "AES-256", "Security"),
        ("Session timeout", "30 minutes", "Security"),
    ]
    .into_iter()
    .map(|(key, value, category)| SystemSetting {
        key: key.to_string(),
        value: value.to_string(),
        category: category.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let txn: HashSet<_> = transactions().into_iter().map(|t| t.id).collect();
        assert_eq!(txn.len(), 5);
        let rules: HashSet<_> = rules().into_iter().map(|r| r.id).collect();
        assert_eq!(rules.len(), 4);
        let reports: HashSet<_> = reports().into_iter().map(|r| r.id).collect();
        assert_eq!(reports.len(), 6);
        let users: HashSet<_> = users().into_iter().map(|u| u.id).collect();
        assert_eq!(users.len(), 4);
    }

    #[test]
    fn test_seed_amounts() {
        let txns = transactions();
        assert_eq!(txns[1].amount.to_string(), "750.50");
        assert!(txns[2].needs_review());
    }
}
