use quizgen::extract::extract_records;
use serde_json::json;

const WELL_FORMED_ARRAY: &str = r#"[
  {
    "question": "What color is the sky?",
    "options": ["Blue", "Green", "Red", "Yellow"],
    "correctAnswerIndex": 0
  },
  {
    "question": "At what temperature does water boil?",
    "options": ["50C", "75C", "100C", "150C"],
    "correctAnswerIndex": 2
  }
]"#;

#[test]
fn pure_array_round_trips_unchanged() {
    let records = extract_records(WELL_FORMED_ARRAY).expect("array should extract");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["question"], json!("What color is the sky?"));
    assert_eq!(records[1]["correctAnswerIndex"], json!(2));
}

#[test]
fn array_with_surrounding_whitespace_round_trips() {
    let text = format!("\n\n  {}  \n", WELL_FORMED_ARRAY);
    let records = extract_records(&text).expect("array should extract");
    assert_eq!(records.len(), 2);
}

#[test]
fn array_inside_markdown_fence_and_prose() {
    let text = format!(
        "Sure! Here are the questions you asked for:\n```json\n{}\n```\nLet me know if you need more.",
        WELL_FORMED_ARRAY
    );
    let records = extract_records(&text).expect("fenced array should extract");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["options"].as_array().unwrap().len(), 4);
}

#[test]
fn adjacent_objects_without_brackets_are_wrapped() {
    let text = r#"Here you go:
{ "question": "Q1?", "options": ["a", "b"], "correctAnswerIndex": 0 },
{ "question": "Q2?", "options": ["c", "d"], "correctAnswerIndex": 1 }"#;
    let records = extract_records(text).expect("adjacent objects should extract");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["question"], json!("Q2?"));
}

#[test]
fn single_object_is_wrapped_into_an_array() {
    let text = r#"Only one came out:
{ "question": "Lonely?", "options": ["yes", "no"], "correctAnswerIndex": 0 }"#;
    let records = extract_records(text).expect("single object should extract");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["question"], json!("Lonely?"));
}

#[test]
fn plain_prose_yields_none() {
    assert!(extract_records("I could not generate any questions for this document.").is_none());
}

#[test]
fn matched_but_malformed_json_yields_none() {
    // The array pattern matches but the payload has a trailing comma blob
    // that is not valid JSON; there is no further fallback after a match.
    let text = r#"[ { "question": "Broken?", "options": [ } ]"#;
    assert!(extract_records(text).is_none());
}

#[test]
fn empty_text_yields_none() {
    assert!(extract_records("").is_none());
    assert!(extract_records("   \n  ").is_none());
}
