use serde::{Deserialize, Serialize};

/// A validated multiple-choice question.
///
/// Instances are only built by the normalizer from untrusted model output;
/// after construction `correct_answer_index` is always in range for
/// `options`, and `options` holds at least two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswerIndex")]
    pub correct_answer_index: usize,
}

impl McQuestion {
    /// Letter label (A, B, C, ...) for the option at `index`.
    pub fn option_label(index: usize) -> char {
        (b'A' + (index % 26) as u8) as char
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_answer_index]
    }
}
