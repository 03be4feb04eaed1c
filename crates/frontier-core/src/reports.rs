//! Report list and the simulated report actions

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::filter::RecordFilter;
use crate::models::Report;
use crate::notification::{Notification, NotificationSink};
use crate::types::{ReportFormat, ReportStatus, ReportType};

/// Quick stats shown above the report list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub total: usize,
    pub completed: usize,
    pub generating: usize,
    pub failed: usize,
}

/// Generate form input; accepted as-is since nothing is generated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, rename = "type")]
    pub report_type: ReportType,
    /// Report date (YYYY-MM-DD), optional
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    records: Vec<Report>,
}

impl ReportStore {
    pub fn new(records: Vec<Report>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Report] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Report> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn filter(&self, filter: &RecordFilter<ReportType>) -> Vec<&Report> {
        filter.apply(&self.records)
    }

    pub fn stats(&self) -> ReportStats {
        self.records.iter().fold(
            ReportStats {
                total: self.records.len(),
                ..ReportStats::default()
            },
            |mut stats, r| {
                match r.status {
                    ReportStatus::Completed => stats.completed += 1,
                    ReportStatus::Generating => stats.generating += 1,
                    ReportStatus::Failed => stats.failed += 1,
                }
                stats
            },
        )
    }

    /// Look up a report that can be opened or downloaded
    pub fn available(&self, id: &str) -> CoreResult<&Report> {
        let report = self
            .get(id)
            .ok_or_else(|| CoreError::ReportNotFound { id: id.to_string() })?;
        if !report.is_available() {
            return Err(CoreError::ReportUnavailable {
                id: id.to_string(),
                status: report.status.to_string(),
            });
        }
        Ok(report)
    }

    /// Simulated generation; the list is not changed
    pub fn generate(&self, request: &GenerateRequest, sink: &mut dyn NotificationSink) {
        log::debug!(
            "Report generation requested: type={} format={} date={:?}",
            request.report_type,
            request.format,
            request.date
        );
        sink.notify(Notification::new(
            "Report Generation",
            "New report generation has been started. You'll be notified when complete.",
        ));
    }

    /// Returns false (and stays silent) unless the report is completed
    pub fn view(&self, id: &str, sink: &mut dyn NotificationSink) -> bool {
        match self.available(id) {
            Ok(report) => {
                sink.notify(Notification::new(
                    "Opening Report",
                    format!("Report \"{}\" is opening in a new window.", report.name),
                ));
                true
            }
            Err(e) => {
                log::debug!("View ignored: {}", e);
                false
            }
        }
    }

    /// Returns false (and stays silent) unless the report is completed
    pub fn download(&self, id: &str, sink: &mut dyn NotificationSink) -> bool {
        match self.available(id) {
            Ok(report) => {
                sink.notify(Notification::new(
                    "Download Started",
                    format!("Report \"{}\" download has been initiated.", report.name),
                ));
                true
            }
            Err(e) => {
                log::debug!("Download ignored: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::notification::NotificationBuffer;
    use crate::seed;

    fn store() -> ReportStore {
        ReportStore::new(seed::reports())
    }

    #[test]
    fn test_stats() {
        let stats = store().stats();
        assert_eq!(
            stats,
            ReportStats {
                total: 6,
                completed: 4,
                generating: 1,
                failed: 1
            }
        );
    }

    #[test]
    fn test_filter_analytics() {
        let store = store();
        let result = store.filter(&RecordFilter::new("", CategoryFilter::Only(ReportType::Analytics)));
        let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["RPT003", "RPT006"]);
    }

    #[test]
    fn test_view_completed_report() {
        let store = store();
        let mut buffer = NotificationBuffer::new();
        assert!(store.view("RPT001", &mut buffer));
        let items = buffer.into_vec();
        assert_eq!(items[0].title, "Opening Report");
        assert_eq!(
            items[0].description,
            "Report \"Daily Reconciliation Summary\" is opening in a new window."
        );
    }

    #[test]
    fn test_download_completed_report() {
        let store = store();
        let mut buffer = NotificationBuffer::new();
        assert!(store.download("RPT002", &mut buffer));
        let items = buffer.into_vec();
        assert_eq!(items[0].title, "Download Started");
        assert_eq!(items[0].description, "Report \"Exception Report\" download has been initiated.");
    }

    #[test]
    fn test_unavailable_reports_are_silent() {
        let store = store();
        let mut buffer = NotificationBuffer::new();
        assert!(!store.view("RPT005", &mut buffer));
        assert!(!store.download("RPT006", &mut buffer));
        assert!(!store.view("RPT404", &mut buffer));
        assert!(buffer.is_empty());

        assert!(matches!(store.available("RPT404"), Err(CoreError::ReportNotFound { .. })));
        assert!(matches!(store.available("RPT005"), Err(CoreError::ReportUnavailable { .. })));
    }

    #[test]
    fn test_generate_only_notifies() {
        let store = store();
        let mut buffer = NotificationBuffer::new();
        let request = GenerateRequest {
            report_type: ReportType::Compliance,
            date: Some("2024-06-30".to_string()),
            format: ReportFormat::Pdf,
        };
        store.generate(&request, &mut buffer);
        assert_eq!(store.len(), 6);
        assert_eq!(buffer.into_vec()[0].title, "Report Generation");
    }

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.report_type, ReportType::Reconciliation);
        assert_eq!(request.format, ReportFormat::Xlsx);
        assert!(request.date.is_none());
    }
}
