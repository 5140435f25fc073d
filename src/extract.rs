//! Payload extraction: pull the most plausible JSON question payload out of a
//! model response that may wrap it in prose or markdown fencing.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

/// A single pattern strategy. `wrap` means the match is object-shaped and
/// must be enclosed in `[...]` before parsing.
struct PatternStrategy {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
    wrap: bool,
}

// All patterns match greedily across newlines.
static ARRAY_OF_OBJECTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[\s*\{.*\}\s*\]").unwrap());
static ADJACENT_QUESTION_OBJECTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)\{\s*"question".*\}\s*,\s*\{\s*"question".*\}"#).unwrap());
static SINGLE_QUESTION_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)\{\s*"question".*\}"#).unwrap());

/// Ordered from most to least structured; the first pattern that matches
/// anything wins, and later patterns are never consulted.
static STRATEGIES: &[PatternStrategy] = &[
    PatternStrategy { name: "array_of_objects", regex: &ARRAY_OF_OBJECTS, wrap: false },
    PatternStrategy { name: "adjacent_question_objects", regex: &ADJACENT_QUESTION_OBJECTS, wrap: true },
    PatternStrategy { name: "single_question_object", regex: &SINGLE_QUESTION_OBJECT, wrap: true },
];

/// Locate and parse the question payload inside free text.
///
/// Returns the parsed records, or `None` when no strategy produced valid
/// JSON. Malformed JSON is a normal "no extractable payload" outcome, never a
/// panic.
pub fn extract_records(text: &str) -> Option<Vec<Map<String, Value>>> {
    let trimmed = text.trim();

    // Fast path: the whole response is already the array we asked for.
    if trimmed.starts_with('[') {
        if let Ok(records) = serde_json::from_str::<Vec<Map<String, Value>>>(trimmed) {
            debug!(target: "quizgen::extract", count = records.len(), "parsed trimmed text as array");
            return Some(records);
        }
    }

    let (strategy, matched) = STRATEGIES
        .iter()
        .find_map(|s| s.regex.find(text).map(|m| (s, m.as_str())))?;

    let candidate = if strategy.wrap {
        format!("[{matched}]")
    } else {
        matched.to_string()
    };

    match serde_json::from_str::<Vec<Map<String, Value>>>(&candidate) {
        Ok(records) => {
            debug!(
                target: "quizgen::extract",
                strategy = strategy.name,
                count = records.len(),
                "extracted question payload"
            );
            Some(records)
        }
        Err(e) => {
            // No further fallback once a pattern has matched.
            debug!(target: "quizgen::extract", strategy = strategy.name, error = %e, "matched payload failed to parse");
            None
        }
    }
}
