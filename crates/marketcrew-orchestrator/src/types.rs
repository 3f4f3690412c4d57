use serde::{Deserialize, Serialize};

/// A unit of instructed work.
///
/// The instruction is a template. It may reference crew inputs and the
/// outputs of strictly earlier tasks in the same crew by name, e.g.
/// `{{ product_details }}` or `{{ competitor_analysis }}`. Referencing
/// anything else fails rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub instruction_template: String,
    /// Appended to the rendered instruction when set.
    #[serde(default)]
    pub expected_output: Option<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, instruction_template: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instruction_template: instruction_template.into(),
            expected_output: None,
        }
    }

    pub fn with_expected_output(mut self, expected: impl Into<String>) -> Self {
        self.expected_output = Some(expected.into());
        self
    }
}

/// The result of one crew member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutput {
    pub task_id: String,
    pub agent_role: String,
    pub output: String,
}

/// The result of a whole crew: every member's output, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewOutput {
    pub task_outputs: Vec<TaskOutput>,
}

impl CrewOutput {
    /// The last member's output.
    pub fn final_output(&self) -> &str {
        self.task_outputs
            .last()
            .map(|t| t.output.as_str())
            .unwrap_or_default()
    }

    pub fn output_of(&self, task_id: &str) -> Option<&str> {
        self.task_outputs
            .iter()
            .find(|t| t.task_id == task_id)
            .map(|t| t.output.as_str())
    }
}
