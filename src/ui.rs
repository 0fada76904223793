//! Interactive control prompt.

use colored::Colorize;
use dialoguer::{Select, theme::ColorfulTheme};
use tracing::debug;

use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::models::UpdateRequest;
use crate::view::{Action, Control, Node};

/// Offers the wired controls of a rendered tree for dispatch.
///
/// The view is not re-rendered after a dispatch; the prompt only reminds
/// the operator that a fresh run is needed to observe the new state. Inert
/// controls are not offered.
pub struct ControlPrompt<'a> {
    controls: Vec<&'a Control>,
}

impl<'a> ControlPrompt<'a> {
    pub fn new(tree: &'a Node) -> Self {
        Self {
            controls: tree.wired_controls(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Prompt, dispatch, repeat. Escape exits.
    pub async fn run(&self, dispatcher: &Dispatcher<'_>) -> Result<()> {
        let items: Vec<String> = self.controls.iter().map(|c| describe(c)).collect();

        loop {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Dispatch a control (Esc to quit)")
                .items(&items)
                .default(0)
                .interact_opt()?;

            let Some(index) = selection else {
                println!("{}", "No control selected. Exiting.".yellow());
                return Ok(());
            };

            match &self.controls[index].action {
                Some(Action::SetProtection { task_arn, enabled }) => {
                    debug!(task_arn = %task_arn, enabled = enabled, "control activated");
                    dispatcher
                        .update_task(task_arn, &UpdateRequest::protection(*enabled))
                        .await;
                    println!(
                        "{}",
                        "Update dispatched. Re-run taskdash to observe the new state."
                            .bright_black()
                    );
                }
                None => {}
            }
        }
    }
}

fn describe(control: &Control) -> String {
    match &control.action {
        Some(Action::SetProtection { task_arn, enabled }) => {
            let verb = if *enabled { "Enable" } else { "Disable" };
            format!("{} protection · {}", verb, task_arn)
        }
        None => control.label.clone(),
    }
}
