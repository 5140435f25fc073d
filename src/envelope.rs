//! Wire types for the Gemini `generateContent` call, plus the response
//! locator that digs the model's free-text payload out of the envelope.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::config::GenerationParams;

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(rename = "topK", skip_serializing_if = "Option::is_none")]
    pub top_k: Option<i32>,
    #[serde(rename = "topP", skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<i32>,
}

/// Wrap a prompt into the request body the API expects. Pure construction,
/// no failure modes.
pub fn build_request(prompt: String, params: &GenerationParams) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: Some(GenerationConfig {
            temperature: params.temperature,
            top_k: params.top_k,
            top_p: params.top_p,
            max_output_tokens: params.max_output_tokens,
        }),
    }
}

type LocateStrategy = fn(&Value) -> Option<&str>;

/// Ordered fallback paths through the response envelope. The API has shipped
/// more than one nesting for the candidate text; first success wins.
const LOCATE_STRATEGIES: &[(&str, LocateStrategy)] = &[
    ("candidates[0].content.parts[0].text", candidate_content_parts_text),
    ("candidates[0].content.text", candidate_content_text),
    ("candidates[0].text", candidate_text),
];

/// Resolve the model's free-text payload from a decoded response envelope.
///
/// Any shape mismatch along a path skips that path rather than erroring;
/// `None` means no path resolved and is a normal outcome for malformed or
/// empty model output.
pub fn locate_candidate_text(envelope: &Value) -> Option<&str> {
    for &(name, strategy) in LOCATE_STRATEGIES {
        if let Some(text) = strategy(envelope) {
            debug!(target: "quizgen::envelope", path = name, text_len = text.len(), "located candidate text");
            return Some(text);
        }
    }
    debug!(target: "quizgen::envelope", "no candidate text found in envelope");
    None
}

fn first_candidate(envelope: &Value) -> Option<&Value> {
    envelope.get("candidates")?.as_array()?.first()
}

fn candidate_content_parts_text(envelope: &Value) -> Option<&str> {
    first_candidate(envelope)?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
}

fn candidate_content_text(envelope: &Value) -> Option<&str> {
    first_candidate(envelope)?.get("content")?.get("text")?.as_str()
}

fn candidate_text(envelope: &Value) -> Option<&str> {
    first_candidate(envelope)?.get("text")?.as_str()
}
