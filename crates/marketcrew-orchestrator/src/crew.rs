use crate::types::{CrewOutput, Task, TaskOutput};
use marketcrew_agent::Agent;
use marketcrew_core::{CrewError, CrewResult, TraceSink};
use minijinja::{Environment, UndefinedBehavior};
use std::collections::{BTreeMap, HashSet};
use std::time::Instant;
use tracing::{error, info};

/// One agent/task pair in a crew.
#[derive(Debug, Clone)]
pub struct CrewMember {
    pub agent: Agent,
    pub task: Task,
}

/// An ordered chain of agent/task pairs.
///
/// Members run strictly in declaration order. Each member's instruction is
/// rendered against the crew inputs plus the outputs of the members before
/// it, keyed by task id. There is no dependency resolution: the declared
/// order is the execution order.
#[derive(Debug, Clone)]
pub struct Crew {
    name: String,
    members: Vec<CrewMember>,
}

impl Crew {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member.
    pub fn member(mut self, agent: Agent, task: Task) -> Self {
        self.members.push(CrewMember { agent, task });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[CrewMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn validate(&self) -> CrewResult<()> {
        if self.members.is_empty() {
            return Err(CrewError::Empty);
        }
        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.task.id.as_str()) {
                return Err(CrewError::DuplicateTask(member.task.id.clone()));
            }
        }
        Ok(())
    }

    /// Run every member in order and return all outputs.
    ///
    /// Aborts on the first render or backend failure; nothing after the
    /// failing member runs. Trace text goes to `trace` only.
    pub async fn run(
        &self,
        inputs: &BTreeMap<String, String>,
        trace: &mut dyn TraceSink,
    ) -> CrewResult<CrewOutput> {
        self.validate()?;

        // No builtin globals: every name must be an input or an earlier output.
        let mut env = Environment::empty();
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let mut context = inputs.clone();
        let mut task_outputs = Vec::with_capacity(self.members.len());

        info!(crew = %self.name, members = self.members.len(), "Crew: starting");

        for (position, member) in self.members.iter().enumerate() {
            let task_id = member.task.id.as_str();
            let role = member.agent.role();

            let instruction = render_instruction(&env, &member.task, &context).map_err(|reason| {
                error!(crew = %self.name, position, task_id, reason = %reason, "Render failed");
                CrewError::Render {
                    position,
                    task_id: task_id.to_string(),
                    reason,
                }
            })?;

            trace.write(&format!(" [DEBUG]: == Working Agent: {role}\n"));
            trace.write(&format!(" [INFO]: == Starting Task: {task_id}\n"));
            trace.write("\n\n> Entering new CrewAgentExecutor chain...\n");

            info!(crew = %self.name, position, task_id, role, "Executing task");
            let start = Instant::now();

            let output = member.agent.execute(&instruction).await.map_err(|source| {
                error!(crew = %self.name, position, task_id, error = %source, "Task failed");
                CrewError::Backend {
                    position,
                    task_id: task_id.to_string(),
                    source,
                }
            })?;

            trace.write(&format!("Final Answer: {output}\n"));
            trace.write("\n> Finished chain.\n");
            trace.write(&format!(" [DEBUG]: == [{role}] Task output: {output}\n\n"));

            info!(
                crew = %self.name,
                position,
                task_id,
                duration_ms = start.elapsed().as_millis() as u64,
                "Task completed"
            );

            context.insert(task_id.to_string(), output.clone());
            task_outputs.push(TaskOutput {
                task_id: task_id.to_string(),
                agent_role: role.to_string(),
                output,
            });
        }

        info!(crew = %self.name, "Crew: complete");
        Ok(CrewOutput { task_outputs })
    }
}

fn render_instruction(
    env: &Environment<'_>,
    task: &Task,
    context: &BTreeMap<String, String>,
) -> Result<String, String> {
    let mut instruction = env
        .render_str(&task.instruction_template, context)
        .map_err(|e| e.to_string())?;
    if let Some(expected) = &task.expected_output {
        instruction.push_str("\n\nExpected output: ");
        instruction.push_str(expected);
    }
    Ok(instruction)
}
