//! Matching rule store with create, toggle and delete
//!
//! Rules carry no evaluation logic; the store only keeps the list the
//! rules page edits. Every successful mutation emits a notification,
//! failed validation emits exactly one destructive notification and
//! leaves the list untouched.

use crate::error::{CoreError, CoreResult};
use crate::filter::RecordFilter;
use crate::models::{Rule, RuleDraft};
use crate::notification::{Notification, NotificationSink};
use crate::types::RuleType;

const ID_PREFIX: &str = "RULE";

#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    records: Vec<Rule>,
}

impl RuleStore {
    pub fn new(records: Vec<Rule>) -> Self {
        Self { records }
    }

    /// Rules in insertion order
    pub fn all(&self) -> &[Rule] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Display order: ascending priority, ties keep insertion order
    pub fn sorted_by_priority(&self) -> Vec<&Rule> {
        let mut rules: Vec<&Rule> = self.records.iter().collect();
        rules.sort_by_key(|r| r.priority);
        rules
    }

    /// Filtered view in display order
    pub fn filter(&self, filter: &RecordFilter<RuleType>) -> Vec<&Rule> {
        self.sorted_by_priority()
            .into_iter()
            .filter(|r| filter.matches(*r))
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_active).count()
    }

    pub fn inactive_count(&self) -> usize {
        self.records.len() - self.active_count()
    }

    /// One past the highest numeric suffix, so ids stay unique after deletes
    pub fn next_id(&self) -> String {
        let next = self
            .records
            .iter()
            .filter_map(|r| r.id.strip_prefix(ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u32>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        format!("{}{:03}", ID_PREFIX, next)
    }

    pub fn create(&mut self, draft: RuleDraft, sink: &mut dyn NotificationSink) -> CoreResult<Rule> {
        if !draft.is_complete() {
            sink.notify(Notification::destructive(
                "Validation Error",
                "Please fill in all required fields.",
            ));
            return Err(CoreError::ValidationError {
                message: "Please fill in all required fields.".to_string(),
            });
        }

        let rule = Rule {
            id: self.next_id(),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            conditions: draft.conditions.trim().to_string(),
            priority: draft.priority,
            is_active: true,
            match_count: 0,
            rule_type: draft.rule_type,
        };
        log::debug!("Created rule {} with priority {}", rule.id, rule.priority);

        sink.notify(Notification::new(
            "Rule Created",
            format!("Matching rule \"{}\" has been created successfully.", rule.name),
        ));
        self.records.push(rule.clone());
        Ok(rule)
    }

    /// Flip the active flag; `None` when the id is absent
    pub fn toggle(&mut self, id: &str, sink: &mut dyn NotificationSink) -> Option<&Rule> {
        let rule = self.records.iter_mut().find(|r| r.id == id)?;
        rule.is_active = !rule.is_active;

        let state = if rule.is_active { "enabled" } else { "disabled" };
        sink.notify(Notification::new(
            "Rule Updated",
            format!("Rule \"{}\" has been {}.", rule.name, state),
        ));
        Some(&*rule)
    }

    /// Remove by id; `None` when the id is absent
    pub fn delete(&mut self, id: &str, sink: &mut dyn NotificationSink) -> Option<Rule> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let rule = self.records.remove(index);

        sink.notify(Notification::new(
            "Rule Deleted",
            format!("Rule \"{}\" has been deleted.", rule.name),
        ));
        Some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use crate::models::DEFAULT_RULE_PRIORITY;
    use crate::notification::{NotificationBuffer, NotificationVariant};
    use crate::seed;

    fn store() -> RuleStore {
        RuleStore::new(seed::rules())
    }

    fn draft(name: &str, description: &str) -> RuleDraft {
        RuleDraft {
            name: name.to_string(),
            description: description.to_string(),
            ..RuleDraft::default()
        }
    }

    #[test]
    fn test_create_with_empty_name_is_rejected() {
        let mut store = store();
        let before = store.all().to_vec();
        let mut buffer = NotificationBuffer::new();

        let result = store.create(draft("", "Some description"), &mut buffer);

        assert!(matches!(result, Err(CoreError::ValidationError { .. })));
        assert_eq!(store.all(), before.as_slice());
        let items = buffer.into_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Validation Error");
        assert_eq!(items[0].variant, NotificationVariant::Destructive);
    }

    #[test]
    fn test_create_with_whitespace_description_is_rejected() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        assert!(store.create(draft("Name", "   "), &mut buffer).is_err());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_applies_defaults() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();

        let rule = store.create(draft("Batch Match", "Match batches"), &mut buffer).unwrap();

        assert_eq!(rule.id, "RULE005");
        assert!(rule.is_active);
        assert_eq!(rule.match_count, 0);
        assert_eq!(rule.priority, DEFAULT_RULE_PRIORITY);
        assert_eq!(rule.rule_type, RuleType::Automatic);
        assert_eq!(store.len(), 5);

        let items = buffer.into_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Rule Created");
        assert!(items[0].description.contains("Batch Match"));
    }

    #[test]
    fn test_ids_unique_after_delete() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        store.delete("RULE002", &mut buffer);

        let first = store.create(draft("A", "a"), &mut buffer).unwrap();
        let second = store.create(draft("B", "b"), &mut buffer).unwrap();
        assert_eq!(first.id, "RULE005");
        assert_eq!(second.id, "RULE006");

        store.delete("RULE006", &mut buffer);
        store.delete("RULE005", &mut buffer);
        store.delete("RULE004", &mut buffer);
        let third = store.create(draft("C", "c"), &mut buffer).unwrap();
        assert_eq!(third.id, "RULE004");
        assert!(store.all().iter().filter(|r| r.id == third.id).count() == 1);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        let original = store.get("RULE004").unwrap().is_active;

        let enabled = store.toggle("RULE004", &mut buffer).unwrap().is_active;
        assert_ne!(enabled, original);
        store.toggle("RULE004", &mut buffer);
        assert_eq!(store.get("RULE004").unwrap().is_active, original);

        let items = buffer.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Rule \"Merchant Settlement\" has been enabled.");
        assert_eq!(items[1].description, "Rule \"Merchant Settlement\" has been disabled.");
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        assert!(store.toggle("RULE999", &mut buffer).is_none());
        assert!(buffer.is_empty());
        assert_eq!(store.active_count(), 3);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = store();
        let before = store.all().to_vec();
        let mut buffer = NotificationBuffer::new();

        assert!(store.delete("RULE999", &mut buffer).is_none());
        assert_eq!(store.all(), before.as_slice());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_delete_removes_rule() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        let removed = store.delete("RULE001", &mut buffer).unwrap();
        assert_eq!(removed.name, "Credit Card Amount Match");
        assert!(store.get("RULE001").is_none());
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_sorted_by_priority_is_stable() {
        let mut store = store();
        let mut buffer = NotificationBuffer::new();
        let mut urgent = draft("Urgent", "first");
        urgent.priority = 1;
        store.create(urgent, &mut buffer).unwrap();

        let order: Vec<&str> = store.sorted_by_priority().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["RULE001", "RULE005", "RULE002", "RULE003", "RULE004"]);
    }

    #[test]
    fn test_filter_by_type() {
        let store = store();
        let manual = store.filter(&RecordFilter::new("", CategoryFilter::Only(RuleType::Manual)));
        assert_eq!(manual.len(), 1);
        assert_eq!(manual[0].id, "RULE003");

        let by_condition = store.filter(&RecordFilter::new("fuzzy", CategoryFilter::All));
        assert_eq!(by_condition[0].id, "RULE002");
    }

    #[test]
    fn test_counts() {
        let store = store();
        assert_eq!(store.active_count(), 3);
        assert_eq!(store.inactive_count(), 1);
    }
}
