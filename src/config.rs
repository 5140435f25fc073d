use std::env;
use std::time::Duration;

/// Trait for types that can retrieve their API key from environment variables.
pub trait KeyFromEnv {
    /// The environment variable name for this client's API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking environment variables first, then .env file
    fn find_key() -> Option<String> {
        // First try to load .env file (silently fail if not found)
        let _ = dotenvy::dotenv();

        env::var(Self::KEY_NAME).ok()
    }
}

/// Sampling parameters forwarded to the model in `generationConfig`.
///
/// Every field is optional on the wire; the defaults match what the service
/// was originally tuned with for quiz generation.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    pub temperature: Option<f32>,
    pub top_k: Option<i32>,
    pub top_p: Option<f32>,
    pub max_output_tokens: Option<i32>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: Some(0.2),
            top_k: Some(40),
            top_p: Some(0.95),
            max_output_tokens: Some(1024),
        }
    }
}

/// Configuration for the Gemini quiz generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    /// Document text beyond this many characters is truncated before
    /// prompting. Deployment profiles range from 2_000 (short-context) to
    /// 10_000 (default); a single knob, not two behaviors.
    pub max_content_chars: usize,
    /// How many questions the prompt asks the model for.
    pub question_count: usize,
    /// Soft deadline for the whole HTTP exchange.
    pub timeout: Duration,
    pub generation: GenerationParams,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.0-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_content_chars: 10_000,
            question_count: 5,
            timeout: Duration::from_secs(30),
            generation: GenerationParams::default(),
        }
    }
}

impl GeminiConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}
