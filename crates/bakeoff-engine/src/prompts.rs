use bakeoff_core::AgentResponse;

pub const IDEA_PROMPT: &str = r#"
Give me the most promising idea in edTech b2c web application I can make in 2025 in France,
taking into account country culture and policies evolution.
Give me only the idea, no other text.
"#;

pub const ELABORATION_PREFIX: &str = "I want to do this application : ";

pub const ELABORATION_SUFFIX: &str = ". Give me details on the central feature to focus on.\n";

pub const QUESTION_PROMPT: &str = r#"Generate a challenging question that can serve as a comprehensive benchmark to compare different AI language models. The question should:

1. Be intellectually demanding and require deep analytical thinking
2. Have multiple layers of complexity that allow for nuanced responses
3. Test reasoning, creativity, knowledge synthesis, and critical thinking
4. Be specific enough to allow for meaningful comparison between models
5. Be open-ended enough to showcase each model's unique strengths

The question should be in a domain that requires:
- Multi-step reasoning
- Integration of knowledge from multiple fields
- Creative problem-solving
- Ethical considerations or trade-offs
- Real-world application

Return only the question text, nothing else."#;

pub const ANALYSIS_PREAMBLE: &str =
    "Provide a complete analysis of this question. Give the most advanced answer you are able to provide.";

pub const ANALYSIS_RUBRIC: &str = r#"Your answer should demonstrate:
- Deep analytical thinking and reasoning
- Creative problem-solving approaches
- Integration of knowledge across multiple domains
- Careful consideration of ethical implications and trade-offs
- Practical, real-world relevance

Structure your answer clearly and justify each conclusion."#;

pub const JUDGE_PREAMBLE: &str =
    "You are an expert AI evaluator. Analyze and judge the following responses to a benchmark question.";

pub const JUDGE_RUBRIC: &str = r#"EVALUATION CRITERIA:
- Accuracy and factual correctness
- Depth of analysis and reasoning
- Creativity and innovation in approach
- Completeness of response
- Clarity and structure
- Practical applicability
- Handling of complexity and nuance
- Evidence of critical thinking

REQUIRED OUTPUT FORMAT (JSON):
{
  "rankings": [
    {
      "agentName": "Agent Name",
      "provider": "Provider",
      "score": 95,
      "strengths": ["specific strength 1", "specific strength 2", "specific strength 3"],
      "weaknesses": ["specific weakness 1", "specific weakness 2"],
      "rationale": "Detailed explanation of why this agent scored this way, highlighting specific aspects of their response"
    }
  ],
  "overallAnalysis": "Summary of key differences between responses, patterns observed, and insights about each model's capabilities"
}

Score each response from 0-100. Rank from highest to lowest score. Be specific and detailed in your analysis. Return only valid JSON."#;

/// Second chain prompt: the first reply embedded verbatim.
pub fn elaboration_prompt(idea: &str) -> String {
    format!("{ELABORATION_PREFIX}{idea}{ELABORATION_SUFFIX}")
}

/// The prompt every benchmarked agent receives.
pub fn analysis_prompt(question: &str) -> String {
    format!("{ANALYSIS_PREAMBLE}\n\nQUESTION:\n{question}\n\n{ANALYSIS_RUBRIC}")
}

/// The judge prompt, listing responses as `<n>. <agent> (<provider>):`.
pub fn judge_prompt(question: &str, responses: &[AgentResponse]) -> String {
    let listed = responses
        .iter()
        .enumerate()
        .map(|(i, r)| format!("\n{}. {} ({}):\n{}\n", i + 1, r.agent_name, r.provider, r.response))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{JUDGE_PREAMBLE}\n\nQUESTION:\n{question}\n\nRESPONSES TO EVALUATE:\n{listed}\n\n{JUDGE_RUBRIC}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idea_prompt_targets_edtech_in_france() {
        assert!(IDEA_PROMPT.contains("most promising idea in edTech b2c"));
        assert!(IDEA_PROMPT.contains("2025 in France"));
    }

    #[test]
    fn elaboration_embeds_idea_right_after_prefix() {
        let prompt = elaboration_prompt("flashcards for the bac");
        assert!(prompt.starts_with("I want to do this application : flashcards for the bac"));
    }

    #[test]
    fn analysis_prompt_carries_rubric_and_question() {
        let prompt = analysis_prompt("How should cities price congestion?");
        for needle in [
            "complete analysis of this question",
            "most advanced answer you are able to provide",
            "Deep analytical thinking and reasoning",
            "Creative problem-solving approaches",
            "ethical implications and trade-offs",
            "How should cities price congestion?",
        ] {
            assert!(prompt.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn judge_prompt_labels_each_response() {
        let responses = vec![
            AgentResponse {
                agent_name: "OpenAI gpt-4o-mini".into(),
                provider: "OpenAI".into(),
                response: "first".into(),
            },
            AgentResponse {
                agent_name: "Deepseek deepseek-chat".into(),
                provider: "Deepseek".into(),
                response: "second".into(),
            },
        ];

        let prompt = judge_prompt("Q?", &responses);
        assert!(prompt.contains("QUESTION:\nQ?"));
        assert!(prompt.contains("1. OpenAI gpt-4o-mini (OpenAI):\nfirst"));
        assert!(prompt.contains("2. Deepseek deepseek-chat (Deepseek):\nsecond"));
        assert!(prompt.contains("\"overallAnalysis\""));
        assert!(prompt.ends_with("Return only valid JSON."));
    }
}
