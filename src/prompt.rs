//! Prompt assembly for a brainstorming request.
//!
//! The prompt is a fixed sequence of newline-separated sections. Optional
//! sections are dropped entirely when their input is blank or, for technique
//! and persona context, when the name is not in the catalog. User text is
//! embedded verbatim with no escaping.

use crate::catalog;
use crate::error::{BrainstormError, Result};

const PREAMBLE: &str = "You are an expert business strategist and brainstorming facilitator.";

const CLOSING_INSTRUCTIONS: [&str; 7] = [
    "Please provide a comprehensive analysis using the specified technique. Structure your response in markdown format with:",
    "1. A brief summary of the challenge",
    "2. Application of the brainstorming technique with detailed analysis",
    "3. Key insights and recommendations",
    "4. Action items or next steps",
    "",
    "Use headers, bullet points, and formatting to make the output clear and actionable.",
];

/// Returns the value only if it has non-whitespace content.
fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Compose the prompt sent to the generation service.
///
/// `technique` and `issue` must be non-blank; everything else is optional.
pub fn build_prompt(
    technique: &str,
    business_area: Option<&str>,
    persona: Option<&str>,
    issue: &str,
    assumptions: Option<&str>,
) -> Result<String> {
    if technique.trim().is_empty() || issue.trim().is_empty() {
        return Err(BrainstormError::missing_fields());
    }

    let mut parts: Vec<String> = vec![
        PREAMBLE.to_string(),
        format!(
            "Apply the {} brainstorming technique to analyze the following business challenge.",
            technique
        ),
        String::new(),
    ];

    if let Some(context) = catalog::technique_context(technique) {
        parts.push(format!("Technique Context: {}", context));
        parts.push(String::new());
    }

    if let Some(area) = provided(business_area) {
        parts.push(format!(
            "Business Context: Focus on the {} industry/sector.",
            area
        ));
        parts.push(String::new());
    }

    if let Some((name, style)) =
        provided(persona).and_then(|p| catalog::persona_perspective(p).map(|s| (p, s)))
    {
        parts.push(format!(
            "Perspective: Approach this challenge as {} would, {}.",
            name, style
        ));
        parts.push(String::new());
    }

    parts.push("Challenge/Issue:".to_string());
    parts.push(issue.to_string());
    parts.push(String::new());

    if let Some(text) = provided(assumptions) {
        parts.push("Assumptions and Constraints:".to_string());
        parts.push(text.to_string());
        parts.push(String::new());
    }

    parts.extend(CLOSING_INSTRUCTIONS.iter().map(|line| line.to_string()));

    Ok(parts.join("\n"))
}
