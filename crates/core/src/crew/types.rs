use serde::{Deserialize, Serialize};

/// Role description for one crew agent.
///
/// `goal` and `backstory` may contain `{topic}` and `{as_of}` placeholders,
/// interpolated at prompt-assembly time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    /// Display name (e.g. "Web Researcher").
    pub name: String,
    /// Professional role handed to the model.
    pub role: String,
    /// What the agent is trying to achieve.
    pub goal: String,
    /// Persona framing that shapes the agent's voice.
    pub backstory: String,
}

/// One unit of crew work, executed in declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    /// What the agent must do. May contain placeholders.
    pub description: String,
    /// The shape of the output the task should produce.
    pub expected_output: String,
}
