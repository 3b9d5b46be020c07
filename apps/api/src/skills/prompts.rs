// Prompt constants for LLM-backed skill extraction.
// Reuses the JSON-only system prompt from llm_client::prompts.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as SKILLS_EXTRACT_SYSTEM;

/// Upper bound on skills accepted from an LLM reply.
pub const LLM_MAX_SKILLS: usize = 5;

/// Skill extraction prompt. Replace `{text}` before sending.
pub const SKILLS_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract exactly 5 relevant technical skills from the text below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "skills": [
    {"name": "Python", "value": 70}
  ],
  "confidence": 0.8
}

Rules:
- Each skill name is a single, common keyword (e.g. Python, React, SQL, Machine Learning, Git).
- "value" is an integer estimate of proficiency from 0 to 100.
- "confidence" is a number between 0 and 1 describing how well the text supports the list.

Text:
{text}"#;

/// Renders the extraction prompt for `text`.
pub fn build_extract_prompt(text: &str) -> String {
    SKILLS_EXTRACT_PROMPT_TEMPLATE.replace("{text}", text)
}
