//! Console output formatting for task results

use consilium_domain::{TaskOutcome, TaskResult};

/// Formats a [`TaskResult`] for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Human-readable summary of the result.
    pub fn format(result: &TaskResult) -> String {
        let mut out = String::new();

        match &result.outcome {
            TaskOutcome::Single(response) => {
                if response.success {
                    out.push_str(&format!(
                        "Agent: {} (score {:.2})\n\n{}\n",
                        response.agent, response.score, response.payload
                    ));
                } else {
                    out.push_str(&format!(
                        "Agent {} failed: {}\n",
                        response.agent,
                        response.error_detail()
                    ));
                }
            }
            TaskOutcome::Consensus(consensus) => {
                out.push_str(&format!(
                    "Agreement: {} (confidence {:.2})\n",
                    consensus.agreement, consensus.confidence
                ));
                for contributor in &consensus.contributors {
                    out.push_str(&format!(
                        "  - {} (score {:.2})\n",
                        contributor.agent, contributor.score
                    ));
                }
                if consensus.agreement.has_answer() {
                    out.push_str(&format!("\n{}\n", consensus.payload));
                } else {
                    out.push_str("\nNo agent produced an answer.\n");
                }
            }
            TaskOutcome::Failed { reason } => {
                out.push_str(&format!("All agents failed: {}\n", reason));
            }
        }

        out.push_str(&format!("\nElapsed: {}ms", result.elapsed_ms));
        out
    }

    /// Full result serialized as pretty JSON.
    pub fn format_json(result: &TaskResult) -> String {
        serde_json::to_string_pretty(result)
            .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
    }
}
