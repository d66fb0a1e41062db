use super::types::{AgentSpec, TaskSpec};

/// Substitute `{topic}` and `{as_of}` placeholders in descriptor text.
pub fn interpolate(template: &str, topic: &str, as_of: &str) -> String {
    template.replace("{topic}", topic).replace("{as_of}", as_of)
}

/// Build the system preamble for an agent from its descriptor.
pub fn build_preamble(agent: &AgentSpec, topic: &str, as_of: &str) -> String {
    let parts = vec![
        format!("You are {}, a {}.", agent.name, agent.role),
        format!("Goal: {}", interpolate(&agent.goal, topic, as_of)),
        format!("Backstory: {}", interpolate(&agent.backstory, topic, as_of)),
    ];

    parts.join("\n\n")
}

/// Build the prompt for one task, chaining in the previous task's output.
pub fn build_task_prompt(
    task: &TaskSpec,
    topic: &str,
    as_of: &str,
    prior_output: Option<&str>,
) -> String {
    let mut parts = Vec::new();

    if let Some(context) = prior_output {
        parts.push(format!("# Context from the previous task\n{}", context));
    }

    parts.push(format!(
        "# Task\n{}",
        interpolate(&task.description, topic, as_of)
    ));
    parts.push(format!("# Expected output\n{}", task.expected_output));

    parts.join("\n\n")
}

/// Banner prepended to the finished report before rendering.
pub fn report_header(topic: &str, as_of: &str) -> String {
    format!("# {topic} \u{2014} Report\n\nLast updated: {as_of}\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_agent() -> AgentSpec {
        AgentSpec {
            name: "Web Researcher".to_string(),
            role: "Web Research Specialist".to_string(),
            goal: "Find recent information about {topic}.".to_string(),
            backstory: "You report as of {as_of}.".to_string(),
        }
    }

    #[test]
    fn test_interpolate_both_placeholders() {
        let result = interpolate("{topic} on {as_of}", "AI Agents", "2026-08-06");
        assert_eq!(result, "AI Agents on 2026-08-06");
    }

    #[test]
    fn test_interpolate_without_placeholders() {
        assert_eq!(interpolate("plain text", "t", "d"), "plain text");
    }

    #[test]
    fn test_preamble_contains_role_and_interpolated_goal() {
        let preamble = build_preamble(&fixture_agent(), "AI Agents", "2026-08-06");
        assert!(preamble.contains("You are Web Researcher, a Web Research Specialist."));
        assert!(preamble.contains("Goal: Find recent information about AI Agents."));
        assert!(preamble.contains("Backstory: You report as of 2026-08-06."));
    }

    #[test]
    fn test_task_prompt_without_context() {
        let task = TaskSpec {
            description: "Research {topic}.".to_string(),
            expected_output: "A list of insights.".to_string(),
        };
        let prompt = build_task_prompt(&task, "AI Agents", "2026-08-06", None);
        assert!(prompt.starts_with("# Task\nResearch AI Agents."));
        assert!(prompt.contains("# Expected output\nA list of insights."));
        assert!(!prompt.contains("# Context"));
    }

    #[test]
    fn test_task_prompt_chains_prior_output() {
        let task = TaskSpec {
            description: "Analyze the findings.".to_string(),
            expected_output: "A ranked table.".to_string(),
        };
        let prompt = build_task_prompt(&task, "t", "d", Some("finding one"));
        assert!(prompt.starts_with("# Context from the previous task\nfinding one"));
        assert!(prompt.contains("# Task\nAnalyze the findings."));
    }

    #[test]
    fn test_report_header_format() {
        let header = report_header("NYC Real Estate Market", "2026-08-06");
        assert!(header.starts_with("# NYC Real Estate Market \u{2014} Report"));
        assert!(header.contains("Last updated: 2026-08-06"));
        assert!(header.ends_with("\n\n"));
    }
}
