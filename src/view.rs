//! Presentation units for the dashboard.
//!
//! Each unit is a pure function from a data snapshot to a [`Node`] tree.
//! Nothing here performs I/O; activating a control is the job of the
//! dispatcher, and translating the tree to terminal output is the job of
//! the render module.

use crate::aggregate::ClusterView;
use crate::models::TaskRecord;

/// A mutation a control can trigger through the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetProtection { task_arn: String, enabled: bool },
}

/// An operator-facing control embedded in the view.
///
/// A control without an action is an inert placeholder: visible, but wired
/// to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub label: String,
    pub action: Option<Action>,
}

impl Control {
    fn wired(label: &str, action: Action) -> Self {
        Self {
            label: label.to_string(),
            action: Some(action),
        }
    }

    fn inert(label: &str) -> Self {
        Self {
            label: label.to_string(),
            action: None,
        }
    }

    pub fn is_wired(&self) -> bool {
        self.action.is_some()
    }
}

/// Abstract presentation tree, independent of the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Cluster {
        children: Vec<Node>,
    },
    Instance {
        instance_id: String,
        children: Vec<Node>,
    },
    Task {
        task_arn: String,
        children: Vec<Node>,
    },
    Field {
        label: String,
        value: String,
    },
    Controls(Vec<Control>),
    /// Rendered as nothing.
    Empty,
}

impl Node {
    fn field(label: &str, value: impl Into<String>) -> Self {
        Node::Field {
            label: label.to_string(),
            value: value.into(),
        }
    }

    /// Controls with a dispatch target, in tree order.
    pub fn wired_controls(&self) -> Vec<&Control> {
        let mut found = Vec::new();
        self.collect_wired(&mut found);
        found
    }

    fn collect_wired<'a>(&'a self, found: &mut Vec<&'a Control>) {
        match self {
            Node::Cluster { children }
            | Node::Instance { children, .. }
            | Node::Task { children, .. } => {
                for child in children {
                    child.collect_wired(found);
                }
            }
            Node::Controls(controls) => {
                found.extend(controls.iter().filter(|c| c.is_wired()));
            }
            Node::Field { .. } | Node::Empty => {}
        }
    }
}

/// Task unit: one task's fields plus its protection controls.
///
/// The four health toggles are rendered as inert placeholders; they have no
/// dispatch target.
pub fn task_card(record: &TaskRecord) -> Node {
    let display = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    let mut children = vec![
        Node::field(
            "Protection",
            if record.protection_enabled() {
                "enabled"
            } else {
                "disabled"
            },
        ),
        Node::field("Expires", display(&record.task_protection_expiry)),
        Node::Controls(vec![
            Control::wired(
                "enable",
                Action::SetProtection {
                    task_arn: record.task_arn.clone(),
                    enabled: true,
                },
            ),
            Control::wired(
                "disable",
                Action::SetProtection {
                    task_arn: record.task_arn.clone(),
                    enabled: false,
                },
            ),
        ]),
        Node::field("Remote health", display(&record.remote_health)),
        Node::Controls(vec![Control::inert("Enable"), Control::inert("Disable")]),
        Node::field("Local health", display(&record.local_health)),
        Node::Controls(vec![Control::inert("Enable"), Control::inert("Disable")]),
    ];

    if !record.errors.is_empty() {
        children.push(Node::field("Errors", record.errors.join("; ")));
    }

    Node::Task {
        task_arn: record.task_arn.clone(),
        children,
    }
}

/// Instance unit: an instance heading over its tasks, in source order.
///
/// An absent or empty task list renders as an empty placeholder, never an
/// error.
pub fn instance_card(instance_id: &str, tasks: Option<&[TaskRecord]>) -> Node {
    match tasks {
        None => Node::Empty,
        Some([]) => Node::Empty,
        Some(tasks) => Node::Instance {
            instance_id: instance_id.to_string(),
            children: tasks.iter().map(task_card).collect(),
        },
    }
}

/// Cluster unit: the whole snapshot, one instance unit per group.
pub fn cluster_card(records: &[TaskRecord]) -> Node {
    let view = ClusterView::from_records(records.to_vec());
    Node::Cluster {
        children: view
            .ordered_groups()
            .into_iter()
            .map(|(instance_id, tasks)| instance_card(instance_id, Some(tasks)))
            .collect(),
    }
}
