use quizgen::normalize::normalize_records;
use serde_json::{json, Map, Value};

fn records(value: Value) -> Vec<Map<String, Value>> {
    serde_json::from_value(value).expect("test fixture must be an array of objects")
}

#[test]
fn well_formed_record_passes_through() {
    let questions = normalize_records(&records(json!([
        {
            "question": "What color is the sky?",
            "options": ["Blue", "Green", "Red", "Yellow"],
            "correctAnswerIndex": 0
        }
    ])));
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "What color is the sky?");
    assert_eq!(questions[0].options.len(), 4);
    assert_eq!(questions[0].correct_answer_index, 0);
    assert_eq!(questions[0].correct_option(), "Blue");
}

#[test]
fn record_missing_question_is_dropped_others_kept_in_order() {
    let questions = normalize_records(&records(json!([
        { "question": "First?", "options": ["a", "b"], "correctAnswerIndex": 0 },
        { "options": ["x", "y"], "correctAnswerIndex": 1 },
        { "question": "Third?", "options": ["c", "d"], "correctAnswerIndex": 1 }
    ])));
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question, "First?");
    assert_eq!(questions[1].question, "Third?");
}

#[test]
fn blank_question_is_dropped() {
    let questions = normalize_records(&records(json!([
        { "question": "   ", "options": ["a", "b"], "correctAnswerIndex": 0 }
    ])));
    assert!(questions.is_empty());
}

#[test]
fn letter_keyed_options_are_taken_in_ascending_key_order() {
    let questions = normalize_records(&records(json!([
        {
            "question": "Ordered?",
            "options": { "D": "w", "B": "y", "A": "x", "C": "z" },
            "correctAnswerIndex": 0
        }
    ])));
    assert_eq!(questions[0].options, vec!["x", "y", "z", "w"]);
}

#[test]
fn arbitrary_map_options_filter_to_text_values() {
    let questions = normalize_records(&records(json!([
        {
            "question": "Mixed?",
            "options": { "opt1": "first", "opt2": 42, "opt3": "third", "opt4": null },
            "correctAnswerIndex": 0
        }
    ])));
    assert_eq!(questions[0].options, vec!["first", "third"]);
}

#[test]
fn sequence_options_skip_non_text_entries() {
    let questions = normalize_records(&records(json!([
        { "question": "Sparse?", "options": ["a", 1, "b", true], "correctAnswerIndex": 1 }
    ])));
    assert_eq!(questions[0].options, vec!["a", "b"]);
    assert_eq!(questions[0].correct_answer_index, 1);
}

#[test]
fn fewer_than_two_options_drops_the_record() {
    let questions = normalize_records(&records(json!([
        { "question": "One option?", "options": ["only"], "correctAnswerIndex": 0 },
        { "question": "No options?", "options": [], "correctAnswerIndex": 0 },
        { "question": "Numbers only?", "options": [1, 2, 3], "correctAnswerIndex": 0 }
    ])));
    assert!(questions.is_empty());
}

#[test]
fn letter_answer_maps_to_index() {
    let questions = normalize_records(&records(json!([
        { "question": "Letter?", "options": ["a", "b", "c", "d"], "correctAnswerIndex": "C" }
    ])));
    assert_eq!(questions[0].correct_answer_index, 2);
}

#[test]
fn numeric_string_answer_is_parsed() {
    let questions = normalize_records(&records(json!([
        { "question": "Stringy?", "options": ["a", "b", "c", "d"], "correctAnswerIndex": "2" }
    ])));
    assert_eq!(questions[0].correct_answer_index, 2);
}

#[test]
fn out_of_range_answer_clamps_to_last_option() {
    let questions = normalize_records(&records(json!([
        { "question": "Clamped?", "options": ["a", "b", "c", "d"], "correctAnswerIndex": 9 }
    ])));
    assert_eq!(questions[0].correct_answer_index, 3);
}

#[test]
fn negative_answer_clamps_to_zero() {
    let questions = normalize_records(&records(json!([
        { "question": "Negative?", "options": ["a", "b", "c"], "correctAnswerIndex": -2 }
    ])));
    assert_eq!(questions[0].correct_answer_index, 0);
}

#[test]
fn unresolvable_answer_defaults_to_zero() {
    let questions = normalize_records(&records(json!([
        { "question": "Garbage?", "options": ["a", "b"], "correctAnswerIndex": "maybe" },
        { "question": "Missing?", "options": ["a", "b"] }
    ])));
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].correct_answer_index, 0);
    assert_eq!(questions[1].correct_answer_index, 0);
}

#[test]
fn alternate_answer_field_names_are_recognized() {
    let questions = normalize_records(&records(json!([
        { "question": "Snake?", "options": ["a", "b", "c"], "correct_answer_index": 2 },
        { "question": "Short?", "options": ["a", "b", "c"], "answer": "B" }
    ])));
    assert_eq!(questions[0].correct_answer_index, 2);
    assert_eq!(questions[1].correct_answer_index, 1);
}

#[test]
fn more_than_four_options_are_tolerated() {
    let questions = normalize_records(&records(json!([
        {
            "question": "Wide?",
            "options": ["a", "b", "c", "d", "e", "f"],
            "correctAnswerIndex": 5
        }
    ])));
    assert_eq!(questions[0].options.len(), 6);
    assert_eq!(questions[0].correct_answer_index, 5);
}
