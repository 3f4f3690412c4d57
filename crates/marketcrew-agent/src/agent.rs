use crate::backends::TextGenerator;
use marketcrew_core::BackendResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Identity of an agent: who it is and what it is after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: String,
    pub goal: String,
    pub backstory: String,
}

impl AgentProfile {
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// Bind this profile to a text capability.
    pub fn bind(self, backend: Arc<dyn TextGenerator>) -> Agent {
        Agent {
            profile: self,
            backend,
        }
    }
}

/// Everything the text capability sees for one task.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub role: &'a str,
    pub goal: &'a str,
    pub backstory: &'a str,
    pub instruction: &'a str,
}

/// An actor bound to a text capability. Cheap to clone and shared read-only
/// by every task that references it.
#[derive(Clone)]
pub struct Agent {
    profile: AgentProfile,
    backend: Arc<dyn TextGenerator>,
}

impl Agent {
    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }

    pub fn role(&self) -> &str {
        &self.profile.role
    }

    /// Run one rendered instruction through the bound capability.
    pub async fn execute(&self, instruction: &str) -> BackendResult<String> {
        let request = GenerationRequest {
            role: &self.profile.role,
            goal: &self.profile.goal,
            backstory: &self.profile.backstory,
            instruction,
        };
        self.backend.generate_text(&request).await
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("role", &self.profile.role)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct EchoBackend {
        seen: Mutex<Vec<(String, String, String, String)>>,
    }

    #[async_trait]
    impl TextGenerator for EchoBackend {
        async fn generate_text(&self, request: &GenerationRequest<'_>) -> BackendResult<String> {
            self.seen.lock().push((
                request.role.to_string(),
                request.goal.to_string(),
                request.backstory.to_string(),
                request.instruction.to_string(),
            ));
            Ok(format!("{} says: {}", request.role, request.instruction))
        }
    }

    #[tokio::test]
    async fn test_execute_forwards_identity_and_instruction() {
        let backend = Arc::new(EchoBackend::default());
        let agent = AgentProfile::new("Senior Photographer", "Take photos", "Shoots ads")
            .bind(backend.clone());

        let out = agent.execute("describe a photo").await.unwrap();
        assert_eq!(out, "Senior Photographer says: describe a photo");

        let seen = backend.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, "Take photos");
        assert_eq!(seen[0].2, "Shoots ads");
    }

    #[test]
    fn test_agent_debug_hides_backend() {
        let agent = AgentProfile::new("Analyst", "g", "b").bind(Arc::new(EchoBackend::default()));
        let dbg = format!("{agent:?}");
        assert!(dbg.contains("Analyst"));
    }
}
