//! Reviewer personas and fixed stage instructions.
//!
//! Each stage couples one persona (rendered into the system prompt) with
//! one instruction block; the accumulated context of prior stages is
//! appended by the stage modules.

/// A reviewer persona for one stage.
pub struct AgentProfile {
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
}

impl AgentProfile {
    /// Render the persona as a system prompt.
    pub fn system_prompt(&self) -> String {
        format!(
            "You are a {}.\n\n{}\n\nYour goal: {}.",
            self.role, self.backstory, self.goal
        )
    }
}

pub const REPO_ANALYST: AgentProfile = AgentProfile {
    role: "Senior Software Engineer specializing in code repository structure",
    goal: "rigorously analyze the structure, files, and metadata of a given \
           GitHub repository to assess its adherence to professional standards",
    backstory: "You've reviewed thousands of repositories at top tech companies. \
                You have an eagle eye for identifying missing documentation, poor \
                structure, and lack of essential configuration files. You understand \
                what separates amateur projects from professional-grade repositories. \
                Your analysis is thorough, objective, and always focused on \
                actionable improvements.",
};

pub const DOCUMENTATION_SPECIALIST: AgentProfile = AgentProfile {
    role: "Technical Writer and Documentation Expert",
    goal: "scrutinize the repository's README file for clarity, completeness, \
           and persuasiveness, evaluating it against modern repository standards",
    backstory: "You believe that great code is useless without great documentation. \
                You've written documentation for major open-source projects and \
                enterprise software. You know how to transform confusing READMEs \
                into compelling entry points for new developers and users. Your \
                reviews are detailed, constructive, and always include specific \
                examples of improvements.",
};

pub const CHIEF_REVIEWER: AgentProfile = AgentProfile {
    role: "Principal Engineer and Project Lead",
    goal: "synthesize the analyses from the engineer and technical writer into a \
           single, comprehensive, and actionable report with prioritized suggestions",
    backstory: "You are the final gatekeeper for quality at a top-tier technology \
                company. You don't just point out flaws; you provide a clear, \
                prioritized path to excellence. Your feedback is encouraging and \
                immediately useful. You balance technical excellence with practical \
                considerations, always keeping the end user and maintainability \
                in mind.",
};

pub const STRUCTURE_ANALYSIS_INSTRUCTIONS: &str = r#"Perform a comprehensive structural analysis of the GitHub repository from the inspection record below. Your analysis must include:

1. **Repository Structure Assessment**: Work strictly from the structured data in the inspection record; do not invent files or directories that are not recorded there.

2. **Professional Standards Evaluation**: Assess the presence and quality of:
   - Documentation files (README, LICENSE)
   - Configuration files (dependency manifests, build manifests, container files)
   - Project organization (source, tests, and docs directories)
   - Development infrastructure (.gitignore, CI configuration)

3. **Structured Output**: Restate the key facts from the inspection record, then give your professional assessment of what the structure reveals about the project's maturity and maintainability.

If the record contains an `error` field, the repository could not be inspected: report the failure and its likely cause instead of producing findings.

Be thorough and objective. The data you restate will be used by other reviewers for deeper analysis."#;

pub const DOCUMENTATION_REVIEW_INSTRUCTIONS: &str = r#"Conduct an expert-level review of the repository's documentation, focusing on the README content provided in the context from the structure analysis. Your review must cover:

1. **README Quality Assessment**:
   - Project description clarity and completeness
   - Installation and usage instructions
   - Code examples and demonstrations
   - Contribution guidelines and community information
   - Professional presentation and formatting

2. **Documentation Best Practices**:
   - Compare against modern repository standards
   - Evaluate the experience of a new developer arriving at the project
   - Check for missing critical sections

3. **Improvement Recommendations**:
   - Specific, actionable suggestions for enhancement
   - A prioritized list of missing elements

If no README content is available, review what its absence means for the project and what a first README should contain."#;

pub const FINAL_REPORT_INSTRUCTIONS: &str = r#"Synthesize all findings from the repository structure analysis and documentation review into a single, elegant, and actionable report. Your report must be formatted in Markdown and include these exact sections in this order:

# Repository Analysis Report

## Overall Score & Summary
- Provide an overall quality score (1-10) with justification
- Brief executive summary of the repository's current state

## Strengths
- List and explain the repository's strengths
- Acknowledge good practices and professional elements already in place

## Areas for Improvement
- Identify specific issues and missing components
- Explain the impact of each issue on usability and maintainability

## Action Plan
- Prioritized list of recommendations (High/Medium/Low priority)
- Specific, actionable steps for each recommendation
- Quick wins vs. long-term improvements

The tone must be professional, constructive, and encouraging. Focus on helping the repository owner understand not just what to improve, but why and how."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompts_carry_role_and_goal() {
        let prompt = REPO_ANALYST.system_prompt();
        assert!(prompt.contains("Senior Software Engineer"));
        assert!(prompt.contains("professional standards"));
    }

    #[test]
    fn structure_instructions_cover_the_inspection_record() {
        assert!(STRUCTURE_ANALYSIS_INSTRUCTIONS.contains("inspection record"));
        assert!(STRUCTURE_ANALYSIS_INSTRUCTIONS.contains("`error`"));
    }

    #[test]
    fn final_report_instructions_pin_the_section_contract() {
        for heading in [
            "# Repository Analysis Report",
            "## Overall Score & Summary",
            "## Strengths",
            "## Areas for Improvement",
            "## Action Plan",
        ] {
            assert!(
                FINAL_REPORT_INSTRUCTIONS.contains(heading),
                "missing heading {heading}"
            );
        }
    }
}
