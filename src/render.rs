//! Console adapter for the presentation tree.
//!
//! Translates a [`Node`] tree into colored terminal text. This is the only
//! place that knows the concrete display surface; the units in the view
//! module stay surface-agnostic.

use colored::Colorize;

use crate::view::{Control, Node};

/// Render a presentation tree to terminal text.
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out
}

fn write_node(node: &Node, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    match node {
        Node::Cluster { children } => {
            out.push_str(&format!("{}\n", "Cluster Overview".bold()));
            out.push_str(&format!("{}\n", "-".repeat(40)));
            if children.is_empty() {
                out.push_str(&format!("  {} No tasks registered\n", "✓".green()));
                return;
            }
            for child in children {
                write_node(child, indent, out);
            }
        }
        Node::Instance { instance_id, children } => {
            out.push('\n');
            out.push_str(&format!(
                "{}{} {}\n",
                pad,
                "Instance:".blue().bold(),
                instance_id.bold()
            ));
            for child in children {
                write_node(child, indent + 1, out);
            }
        }
        Node::Task { task_arn, children } => {
            out.push_str(&format!("{}{} {}\n", pad, "Task:".cyan(), task_arn));
            for child in children {
                write_node(child, indent + 1, out);
            }
        }
        Node::Field { label, value } => {
            let colored_value = match (label.as_str(), value.as_str()) {
                ("Protection", "enabled") => value.green().to_string(),
                ("Protection", _) => value.yellow().to_string(),
                (_, "Unhealthy") => value.red().to_string(),
                (_, "Healthy") => value.green().to_string(),
                ("Errors", _) => value.red().to_string(),
                _ => value.clone(),
            };
            out.push_str(&format!("{}{}: {}\n", pad, label, colored_value));
        }
        Node::Controls(controls) => {
            let rendered: Vec<String> = controls.iter().map(render_control).collect();
            out.push_str(&format!("{}{}\n", pad, rendered.join(" ")));
        }
        Node::Empty => {}
    }
}

fn render_control(control: &Control) -> String {
    if control.is_wired() {
        format!("[{}]", control.label.bright_cyan())
    } else {
        format!("({})", control.label).bright_black().to_string()
    }
}
