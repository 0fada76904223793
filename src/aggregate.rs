//! Grouping of task records by container instance.

use std::collections::HashMap;

use crate::models::TaskRecord;

/// Grouping key for records the store returned without an instance id.
pub const UNASSIGNED_INSTANCE: &str = "undefined";

/// A full task snapshot partitioned by instance id.
///
/// Each group preserves the order its records had in the source sequence.
/// Key iteration order is not part of the contract;
/// [`ClusterView::ordered_groups`] provides a stable (sorted) order for
/// rendering. Built fresh on every render pass, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterView {
    groups: HashMap<String, Vec<TaskRecord>>,
}

impl ClusterView {
    /// Partition records by their `ec2Instance` field in a single pass.
    ///
    /// A record with no instance id groups under [`UNASSIGNED_INSTANCE`].
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let mut groups: HashMap<String, Vec<TaskRecord>> = HashMap::new();
        for record in records {
            let key = record
                .ec2_instance
                .clone()
                .unwrap_or_else(|| UNASSIGNED_INSTANCE.to_string());
            groups.entry(key).or_default().push(record);
        }
        Self { groups }
    }

    /// All groups in a stable order (sorted by instance id).
    pub fn ordered_groups(&self) -> Vec<(&str, &[TaskRecord])> {
        let mut groups: Vec<(&str, &[TaskRecord])> = self
            .groups
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
            .collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(arn: &str, instance: Option<&str>) -> TaskRecord {
        TaskRecord {
            task_arn: arn.to_string(),
            ec2_instance: instance.map(str::to_string),
            ..TaskRecord::default()
        }
    }

    fn group<'a>(view: &'a ClusterView, instance_id: &str) -> Option<Vec<&'a str>> {
        view.ordered_groups()
            .into_iter()
            .find(|(id, _)| *id == instance_id)
            .map(|(_, records)| records.iter().map(|r| r.task_arn.as_str()).collect())
    }

    #[test]
    fn test_groups_partition_input_exactly() {
        let records = vec![
            record("t1", Some("i-a")),
            record("t2", Some("i-b")),
            record("t3", Some("i-a")),
            record("t4", None),
        ];
        let view = ClusterView::from_records(records.clone());

        let mut grouped_arns: Vec<String> = view
            .ordered_groups()
            .iter()
            .flat_map(|(_, records)| records.iter().map(|r| r.task_arn.clone()))
            .collect();
        grouped_arns.sort();

        let mut input_arns: Vec<String> = records.iter().map(|r| r.task_arn.clone()).collect();
        input_arns.sort();

        assert_eq!(grouped_arns, input_arns);
    }

    #[test]
    fn test_single_instance_keeps_source_order() {
        let records = vec![
            record("t1", Some("i-a")),
            record("t2", Some("i-a")),
            record("t3", Some("i-a")),
        ];
        let view = ClusterView::from_records(records);

        assert_eq!(view.ordered_groups().len(), 1);
        assert_eq!(group(&view, "i-a").unwrap(), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_empty_input_yields_empty_view() {
        let view = ClusterView::from_records(Vec::new());
        assert!(view.ordered_groups().is_empty());
    }

    #[test]
    fn test_missing_instance_id_groups_under_undefined() {
        let records = vec![record("t1", None), record("t2", Some("i-a"))];
        let view = ClusterView::from_records(records);

        assert_eq!(view.ordered_groups().len(), 2);
        assert_eq!(group(&view, UNASSIGNED_INSTANCE).unwrap(), vec!["t1"]);
    }

    #[test]
    fn test_group_membership_is_key_equality() {
        let records = vec![
            record("t1", Some("i-a")),
            record("t2", Some("i-b")),
            record("t3", Some("i-a")),
        ];
        let view = ClusterView::from_records(records);

        let ids: std::collections::HashSet<&str> =
            view.ordered_groups().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, ["i-a", "i-b"].into_iter().collect());
        assert_eq!(group(&view, "i-a").unwrap(), vec!["t1", "t3"]);
        assert_eq!(group(&view, "i-b").unwrap(), vec!["t2"]);
    }
}
