//! The fixed research crew: four agents and their four tasks, in pipeline
//! order. `agents()[i]` executes `tasks()[i]`.

use super::types::{AgentSpec, TaskSpec};

/// The crew's agents in execution order: researcher, analyst, writer,
/// proofreader.
pub fn agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec {
            name: "Web Researcher".to_string(),
            role: "Web Research Specialist".to_string(),
            goal: "To find the most recent, impactful, and relevant information about \
                   {topic}. This includes identifying key use cases, challenges, and \
                   statistics to provide a foundation for deeper analysis."
                .to_string(),
            backstory: "You are a former investigative journalist known for your ability \
                        to uncover technology breakthroughs and market insights. With \
                        years of experience, you excel at identifying actionable data \
                        and trends."
                .to_string(),
        },
        AgentSpec {
            name: "Trend Analyst".to_string(),
            role: "Insight Synthesizer".to_string(),
            goal: "To analyze research findings, extract significant trends, and rank \
                   them by industry impact, growth potential, and uniqueness. Provide \
                   actionable insights for decision-makers."
                .to_string(),
            backstory: "You are a seasoned strategy consultant who transitioned into \
                        {topic} analysis. With an eye for patterns, you specialize in \
                        translating raw data into clear, actionable insights."
                .to_string(),
        },
        AgentSpec {
            name: "Report Writer".to_string(),
            role: "Narrative Architect".to_string(),
            goal: "To craft a detailed, professional report that communicates research \
                   findings and analysis effectively. Focus on clarity, logical flow, \
                   and engagement."
                .to_string(),
            backstory: "Once a technical writer for a renowned journal, you are now \
                        dedicated to creating industry-leading reports. You blend \
                        storytelling with data to ensure your work is both informative \
                        and captivating."
                .to_string(),
        },
        AgentSpec {
            name: "Proofreader".to_string(),
            role: "Polisher of Excellence".to_string(),
            goal: "To refine the report for grammatical accuracy, readability, and \
                   formatting, ensuring it meets professional publication standards."
                .to_string(),
            backstory: "An award-winning editor turned proofreader, you specialize in \
                        perfecting written content. Your sharp eye for detail ensures \
                        every document is flawless."
                .to_string(),
        },
    ]
}

/// The crew's tasks, paired one-to-one with [`agents`].
pub fn tasks() -> Vec<TaskSpec> {
    vec![
        TaskSpec {
            description: "Conduct web-based research to identify 5-7 key insights about \
                          {topic} as of {as_of}. Use only recent and credible sources \
                          (prefer last 6-12 months). Include the source URL for every \
                          insight. Prefer primary sources, government/official stats, \
                          and reputable media."
                .to_string(),
            expected_output: "A structured list of 5-7 insights with a short summary and \
                              a URL for each."
                .to_string(),
        },
        TaskSpec {
            description: "Analyze the findings (with citations) and rank trends by \
                          importance and impact; flag any stale sources."
                .to_string(),
            expected_output: "A table ranking trends by impact, with concise \
                              descriptions and source URLs."
                .to_string(),
        },
        TaskSpec {
            description: "Draft a professional report on {topic} as of {as_of}. \
                          Include: Introduction, Trends Overview, Analysis, \
                          Recommendations. Retain footnote-style citations for all \
                          referenced facts/figures."
                .to_string(),
            expected_output: "A structured draft with clear flow and in-text or \
                              footnote citations."
                .to_string(),
        },
        TaskSpec {
            description: "Refine the draft for grammatical accuracy, coherence, and \
                          formatting. Ensure the final document is polished and ready \
                          for publication."
                .to_string(),
            expected_output: "A professional, polished report free of grammatical \
                              errors and inconsistencies. Format the document for easy \
                              readability."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agents_and_tasks_pair_up() {
        assert_eq!(agents().len(), tasks().len());
    }

    #[test]
    fn test_pipeline_order() {
        let names: Vec<String> = agents().into_iter().map(|a| a.name).collect();
        assert_eq!(
            names,
            vec!["Web Researcher", "Trend Analyst", "Report Writer", "Proofreader"]
        );
    }

    #[test]
    fn test_research_task_carries_placeholders() {
        let research = &tasks()[0];
        assert!(research.description.contains("{topic}"));
        assert!(research.description.contains("{as_of}"));
    }
}
