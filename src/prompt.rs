//! Prompt construction: document sanitation, truncation, and the MCQ
//! instruction wrapper sent to the model.

use crate::config::GeminiConfig;

/// Normalize raw document text before it goes into a prompt.
///
/// Strips a leading byte-order mark, folds CRLF/CR line endings to `\n`, and
/// replaces tabs with single spaces. Total; never fails.
pub fn sanitize(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\t', " ")
}

/// Truncate to at most `max_chars` characters, never splitting a character,
/// appending a `...` continuation marker when anything was cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut out = text[..byte_idx].to_string();
            out.push_str("...");
            out
        }
        None => text.to_string(),
    }
}

/// Build the full instruction prompt for the given document content.
///
/// The requested JSON shape here is what the extractor and normalizer are
/// written against; keep the two in sync when changing it.
pub fn build_prompt(document: &str, config: &GeminiConfig) -> String {
    let content = truncate(&sanitize(document), config.max_content_chars);

    format!(
        "Based on the following document content, generate {count} multiple-choice questions (MCQs).\n\
         For each question:\n\
         1. Create a clear question based on important information in the document\n\
         2. Provide exactly 4 options (labeled A, B, C, D)\n\
         3. Make sure only one option is correct\n\
         4. Indicate which option is correct\n\
         \n\
         Format your response as a JSON array of objects with this structure:\n\
         [\n\
         {{\n\
           \"question\": \"The question text here?\",\n\
           \"options\": [\"Option A\", \"Option B\", \"Option C\", \"Option D\"],\n\
           \"correctAnswerIndex\": 0\n\
         }}\n\
         ]\n\
         \n\
         Document content:\n\
         {content}",
        count = config.question_count,
        content = content,
    )
}
