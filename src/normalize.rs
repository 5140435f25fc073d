//! Question normalization: turn loosely-typed records extracted from model
//! output into validated [`McQuestion`] values.
//!
//! Every record is processed independently; one malformed record never sinks
//! the batch.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::question::McQuestion;

/// Field names the correct-answer indicator has been observed under.
const ANSWER_KEYS: &[&str] = &[
    "correctAnswerIndex",
    "correct_answer_index",
    "correctAnswer",
    "answer",
];

/// Normalize a batch of extracted records, dropping any that cannot be made
/// into a valid question. Order of surviving records is preserved.
pub fn normalize_records(records: &[Map<String, Value>]) -> Vec<McQuestion> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let question = normalize_record(record);
            if question.is_none() {
                warn!(target: "quizgen::normalize", index = i, "dropping invalid question record");
            }
            question
        })
        .collect()
}

fn normalize_record(record: &Map<String, Value>) -> Option<McQuestion> {
    let question = record.get("question")?.as_str()?.trim();
    if question.is_empty() {
        return None;
    }

    let options = resolve_options(record.get("options")?)?;

    let raw_index = resolve_answer_index(record).unwrap_or(0);
    // Out-of-range indices are clamped rather than dropped; negative values
    // clamp to 0.
    let index = raw_index.clamp(0, options.len() as i64 - 1) as usize;

    debug!(
        target: "quizgen::normalize",
        option_count = options.len(),
        answer_index = index,
        "normalized question record"
    );

    Some(McQuestion {
        question: question.to_string(),
        options,
        correct_answer_index: index,
    })
}

type OptionsStrategy = fn(&Value) -> Option<Vec<String>>;

/// Resolve the options field, which the model emits in several shapes: a
/// plain sequence, a letter-keyed mapping, or an arbitrary mapping with text
/// values mixed in. First strategy yielding at least two options wins.
fn resolve_options(value: &Value) -> Option<Vec<String>> {
    const STRATEGIES: &[OptionsStrategy] = &[
        options_from_sequence,
        options_from_letter_map,
        options_from_any_map,
    ];

    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(value).filter(|opts| opts.len() >= 2))
}

fn options_from_sequence(value: &Value) -> Option<Vec<String>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
    )
}

fn options_from_letter_map(value: &Value) -> Option<Vec<String>> {
    let map = value.as_object()?;
    if !map.keys().all(|k| is_letter_key(k)) {
        return None;
    }

    let mut pairs = Vec::with_capacity(map.len());
    for (key, item) in map {
        // A non-text value disqualifies the whole strategy; the filtered
        // fallback below still gets a chance.
        pairs.push((key.clone(), item.as_str()?.to_string()));
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    Some(pairs.into_iter().map(|(_, text)| text).collect())
}

fn options_from_any_map(value: &Value) -> Option<Vec<String>> {
    let map = value.as_object()?;
    let mut pairs: Vec<(&String, &str)> = map
        .iter()
        .filter_map(|(key, item)| item.as_str().map(|text| (key, text)))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    Some(pairs.into_iter().map(|(_, text)| text.to_string()).collect())
}

fn is_letter_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Resolve the correct-answer indicator: an integer, a numeric string, or a
/// single letter A-D. `None` if no known field resolves; the caller defaults
/// to 0.
fn resolve_answer_index(record: &Map<String, Value>) -> Option<i64> {
    let value = ANSWER_KEYS.iter().find_map(|key| record.get(*key))?;

    value
        .as_i64()
        .or_else(|| answer_from_numeric_string(value))
        .or_else(|| answer_from_letter(value))
}

fn answer_from_numeric_string(value: &Value) -> Option<i64> {
    value.as_str()?.trim().parse::<i64>().ok()
}

fn answer_from_letter(value: &Value) -> Option<i64> {
    let text = value.as_str()?.trim();
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter @ 'A'..='D'), None) => Some(letter as i64 - 'A' as i64),
        _ => None,
    }
}
