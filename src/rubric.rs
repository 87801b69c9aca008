// src/rubric.rs
use serde::Deserialize;

use crate::providers::ChatMessage;

/// How much work the evaluator model is asked to do.
///
/// `Minimal` is the wired default: the model returns only `reasoning` and
/// `suggestions`, and the total score is reconstructed locally by summing the
/// "earned/possible" fractions in the reasoning. `High` additionally asks the
/// model for its own numeric `score` field.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Minimal,
    High,
}

impl EffortLevel {
    /// Value passed to the provider's `reasoning_effort` option.
    pub fn reasoning_effort(&self) -> &'static str {
        match self {
            EffortLevel::Minimal => "minimal",
            EffortLevel::High => "high",
        }
    }
}

/// The fixed grading rubric, embedded verbatim in every evaluator request.
/// Four weighted criteria summing to a maximum of 10 points.
pub const RUBRIC: &str = r#"Rubric: Evaluating AI Prompts for Consistency and Skill Preservation (Max Score: 10)

This rubric assesses a user's prompt based on four weighted criteria. The total score is out of 10. The weighting emphasizes that Clarity and Collaborative Framing are the most crucial elements.

---
**Criterion 1: Clarity & Specificity (Max Score: 3)**
**Objective:** The prompt should be unambiguous and precise, leaving no room for misinterpretation by the AI.

* **Excellent (Score: 3):** The prompt is crystal clear. It uses precise language, defines all key terms, and explicitly states the desired outcome.
* **Good (Score: 2):** The prompt is generally clear but contains minor ambiguities or relies on the AI to infer some meaning.
* **Needs Improvement (Score: 1):** The prompt is vague, overly broad, or confusing, forcing the AI to make significant assumptions.

---
**Criterion 2: Contextual Sufficiency (Max Score: 2)**
**Objective:** The prompt must provide all necessary background information for the AI to perform the task effectively.

* **Excellent (Score: 2):** The prompt includes all relevant context, such as the user's goal, the target audience, and specific examples.
* **Good (Score: 1):** The prompt provides some background but is missing key details, requiring the AI to make assumptions.
* **Needs Improvement (Score: 0):** The prompt lacks critical context, leading to a generic or incorrect response.

---
**Criterion 3: Constraint & Format Definition (Max Score: 2)**
**Objective:** The prompt should guide the AI on the structure, style, and boundaries of the desired output.

* **Excellent (Score: 2):** The prompt clearly defines the desired output format (e.g., JSON, list), tone, length, and what to include or exclude.
* **Good (Score: 1):** The prompt gives some general guidance (e.g., "be concise") but lacks specific formatting rules.
* **Needs Improvement (Score: 0):** The prompt gives the AI total freedom over the output, leading to inconsistent results.

---
**Criterion 4: Collaborative Framing & Skill Preservation (Max Score: 3)**
**Objective:** The prompt should use the AI as a tool to augment the user's thinking process, not replace it.

* **Excellent (Score: 3):** The prompt is framed as a collaboration. It asks the AI to critique the user's work, explain a concept, or break down a problem into steps, empowering the user. (e.g., "Critique my approach...").
* **Good (Score: 2):** The prompt asks for a partial solution or a template that the user must complete, still requiring significant cognitive effort. (e.g., "Give me a function template...").
* **Needs Improvement (Score: 1):** The prompt directly asks for the complete, final answer, outsourcing the entire problem-solving process. (e.g., "Write the complete code...").
"#;

/// Sentinel the model is told to emit when either the rubric or the answer
/// is missing, instead of failing the call.
pub const MISSING_INPUT_SENTINEL: &str =
    r#"{"reasoning":"Rubric or answer missing.","suggestions":"Provide both rubric and answer."}"#;

/// Builds the system instruction for the given effort level.
///
/// Both variants share the same grading instructions and rubric; the only
/// difference is whether the model reports its own score field.
pub fn build_system_prompt(effort: EffortLevel) -> String {
    let contract = match effort {
        EffortLevel::Minimal => {
            r#"{
  "reasoning": string, // A brief explanation, walking through each rubric criterion with its earned points (e.g. "Clarity 2/3").
  "suggestions": string // One concrete suggestion for improvement.
}"#
        }
        EffortLevel::High => {
            r#"{
  "score": number, // A numerical score from 1-10.
  "reasoning": string, // A brief explanation, walking through each rubric criterion with its earned points (e.g. "Clarity 2/3").
  "suggestions": string // One concrete suggestion for improvement.
}"#
        }
    };

    format!(
        r#"You are an expert evaluator. Your task is to assess a user's text based on a given rubric.
Grade each rubric criterion, citing the points earned out of the points possible.
You MUST respond with a single-line valid JSON object. Do not include any text outside of the JSON object.

The JSON object must have exactly this structure:
{contract}

If the rubric or the answer is missing, respond with exactly:
{MISSING_INPUT_SENTINEL}

The rubric is:

{RUBRIC}"#
    )
}

/// Builds the user message embedding the text under evaluation and the
/// rubric between labeled delimiters.
pub fn build_user_message(prompt: &str) -> String {
    format!("Please evaluate the following text:\n\n---TEXT---\n{prompt}\n\n---RUBRIC---\n{RUBRIC}")
}

/// The full two-message exchange sent to the provider.
pub fn build_messages(prompt: &str, effort: EffortLevel) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(build_system_prompt(effort)),
        ChatMessage::user(build_user_message(prompt)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_contract_excludes_score() {
        let system = build_system_prompt(EffortLevel::Minimal);
        assert!(!system.contains("\"score\""));
        assert!(system.contains("\"reasoning\""));
        assert!(system.contains("\"suggestions\""));
    }

    #[test]
    fn high_contract_includes_score() {
        let system = build_system_prompt(EffortLevel::High);
        assert!(system.contains("\"score\""));
    }

    #[test]
    fn system_prompt_carries_sentinel_and_rubric() {
        let system = build_system_prompt(EffortLevel::Minimal);
        assert!(system.contains(MISSING_INPUT_SENTINEL));
        assert!(system.contains("Criterion 4: Collaborative Framing"));
    }

    #[test]
    fn user_message_uses_labeled_delimiters() {
        let msg = build_user_message("Write the complete code for a binary search");
        assert!(msg.contains("---TEXT---"));
        assert!(msg.contains("---RUBRIC---"));
        assert!(msg.contains("Write the complete code for a binary search"));
        // The rubric follows the text section
        assert!(msg.find("---TEXT---").unwrap() < msg.find("---RUBRIC---").unwrap());
    }

    #[test]
    fn messages_are_system_then_user() {
        let messages = build_messages("hello", EffortLevel::Minimal);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
    }
}
