//! Transaction store backing the transactions page

use rust_decimal::Decimal;
use serde::Serialize;

use crate::filter::RecordFilter;
use crate::models::Transaction;
use crate::notification::{Notification, NotificationSink};
use crate::types::TransactionStatus;

/// Per-status record counts shown above the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub matched: usize,
    pub pending: usize,
    pub exception: usize,
}

impl StatusCounts {
    pub fn get(&self, status: TransactionStatus) -> usize {
        match status {
            TransactionStatus::Matched => self.matched,
            TransactionStatus::Pending => self.pending,
            TransactionStatus::Exception => self.exception,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    records: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new(records: Vec<Transaction>) -> Self {
        Self { records }
    }

    pub fn all(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Search description and reference, narrowed by status
    pub fn filter(&self, filter: &RecordFilter<TransactionStatus>) -> Vec<&Transaction> {
        filter.apply(&self.records)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.records.iter().fold(StatusCounts::default(), |mut counts, t| {
            match t.status {
                TransactionStatus::Matched => counts.matched += 1,
                TransactionStatus::Pending => counts.pending += 1,
                TransactionStatus::Exception => counts.exception += 1,
            }
            counts
        })
    }

    pub fn total_amount(&self) -> Decimal {
        self.records.iter().map(|t| t.amount).sum()
    }

    /// Simulated file import; nothing is read or added
    pub fn import_file(&self, sink: &mut dyn NotificationSink) {
        sink.notify(Notification::new(
            "File Upload",
            "Transaction file processing initiated. You'll be notified when complete.",
        ));
    }
}
