//! Core generation API: wraps a low-level transport with prompt construction
//! and resilient response extraction/normalization.
//!
//! The pipeline is strictly sequential: build prompt, build envelope, one
//! network call, then locate / extract / normalize with local fallbacks at
//! each stage. Only exhaustion of all strategies surfaces an error.

use std::fmt::Debug;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::config::GeminiConfig;
use crate::envelope::{self, GenerateContentRequest};
use crate::error::{GenerateError, GeminiError};
use crate::extract;
use crate::normalize;
use crate::prompt;
use crate::question::McQuestion;

/// Low-level transport abstraction.
///
/// Implementors perform a single POST of the request envelope and return the
/// raw response body. Everything above the wire (locating, extracting,
/// normalizing) is handled by [`QuizGenerator`].
#[async_trait]
pub trait GenerateTransport: Send + Sync + Debug {
    /// The only method that implementations must provide
    async fn execute(&self, request: &GenerateContentRequest) -> Result<String, GeminiError>;

    /// Clone this transport into a boxed trait object
    fn clone_box(&self) -> Box<dyn GenerateTransport>;
}

impl Clone for Box<dyn GenerateTransport> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[async_trait]
impl GenerateTransport for Box<dyn GenerateTransport> {
    async fn execute(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        self.as_ref().execute(request).await
    }

    fn clone_box(&self) -> Box<dyn GenerateTransport> {
        self.as_ref().clone_box()
    }
}

/// Quiz generator that wraps a [`GenerateTransport`] and turns document text
/// into validated questions.
///
/// Stateless between calls; concurrent calls on the same instance are safe.
/// Dropping the future returned by [`generate_questions`] aborts the
/// in-flight request.
///
/// [`generate_questions`]: QuizGenerator::generate_questions
#[derive(Debug, Clone)]
pub struct QuizGenerator<T: GenerateTransport> {
    transport: T,
    config: GeminiConfig,
}

impl<T: GenerateTransport> QuizGenerator<T> {
    pub fn new(transport: T, config: GeminiConfig) -> Self {
        info!(
            model = %config.model,
            max_content_chars = config.max_content_chars,
            "Creating new QuizGenerator"
        );
        Self { transport, config }
    }

    /// Get a reference to the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Generate multiple-choice questions from raw document text.
    ///
    /// Transport failures are returned immediately without any parse attempt.
    /// A successful call whose response yields nothing usable returns
    /// [`GenerateError::UnparsableResponse`] (nothing extractable) or
    /// [`GenerateError::NoQuestions`] (records extracted, none valid); both
    /// answer true to [`GenerateError::is_parse_failure`].
    #[instrument(target = "quizgen::core", skip(self, document_text), fields(content_len = document_text.len()))]
    pub async fn generate_questions(
        &self,
        document_text: &str,
    ) -> Result<Vec<McQuestion>, GenerateError> {
        if document_text.trim().is_empty() {
            warn!(target: "quizgen::core", "rejecting empty document before network call");
            return Err(GenerateError::EmptyInput);
        }

        let prompt = prompt::build_prompt(document_text, &self.config);
        let request = envelope::build_request(prompt, &self.config.generation);

        let body = self.transport.execute(&request).await.map_err(|e| match e {
            // A bad endpoint is a configuration problem, not a network one.
            GeminiError::Endpoint(message) => GenerateError::Config(message),
            other => GenerateError::Network(other),
        })?;

        let envelope: Value = serde_json::from_str(&body).map_err(|e| {
            debug!(target: "quizgen::core", error = %e, "response body is not JSON");
            GenerateError::UnparsableResponse
        })?;

        let text =
            envelope::locate_candidate_text(&envelope).ok_or(GenerateError::UnparsableResponse)?;
        let records = extract::extract_records(text).ok_or(GenerateError::UnparsableResponse)?;

        let questions = normalize::normalize_records(&records);
        if questions.is_empty() {
            warn!(
                target: "quizgen::core",
                record_count = records.len(),
                "no records survived normalization"
            );
            return Err(GenerateError::NoQuestions);
        }

        info!(target: "quizgen::core", count = questions.len(), "generated questions");
        Ok(questions)
    }
}
