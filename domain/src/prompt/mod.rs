//! Prompt templates for each agent role

use crate::task::request::{TaskKind, TaskRequest};

/// Templates for the system and user prompts sent to hosted models
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for reasoning agents
    pub fn reasoning_system() -> &'static str {
        r#"You are a careful reasoner answering a single task.
Think through the problem before answering, but reply with the answer only.
Be concise and direct. Do not hedge or add caveats unless they change the answer."#
    }

    /// System prompt for extraction agents
    pub fn extraction_system() -> &'static str {
        r#"You extract structured facts from the given input.
Reply with only the extracted facts, one per line, in the order they appear.
Never invent facts that are not present in the input."#
    }

    /// System prompt for verification agents
    pub fn verification_system() -> &'static str {
        r#"You verify a candidate answer embedded in the task input.
Judge correctness only; style does not matter.
Reply with the corrected answer if the candidate is wrong, or the candidate unchanged if it is right."#
    }

    /// System prompt for summarization agents
    pub fn summarization_system() -> &'static str {
        r#"You condense the given input into a short summary.
Keep every load-bearing fact and drop everything else.
Reply with the summary only."#
    }

    /// User prompt carrying the task payload
    pub fn task_prompt(request: &TaskRequest) -> String {
        let instruction = match request.kind {
            TaskKind::Answer => "Answer the following:",
            TaskKind::Summarize => "Summarize the following:",
            TaskKind::Extract => "Extract the facts from the following:",
            TaskKind::Verify => "Verify the candidate answer in the following:",
            TaskKind::Classify => "Classify the following:",
        };

        format!("{}\n\n{}", instruction, request.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_prompt_embeds_payload() {
        let request = TaskRequest::new(TaskKind::Summarize, "long article text");
        let prompt = PromptTemplate::task_prompt(&request);

        assert!(prompt.starts_with("Summarize"));
        assert!(prompt.contains("long article text"));
    }

    #[test]
    fn test_role_prompts_are_distinct() {
        let prompts = [
            PromptTemplate::reasoning_system(),
            PromptTemplate::extraction_system(),
            PromptTemplate::verification_system(),
            PromptTemplate::summarization_system(),
        ];
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
