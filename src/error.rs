use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("no document content to generate questions from")]
    EmptyInput,
    #[error("invalid client configuration: {0}")]
    Config(String),
    #[error("Gemini API error: {0}")]
    Network(#[from] GeminiError),
    #[error("could not extract any questions from the model response")]
    UnparsableResponse,
    #[error("response parsed but no usable questions survived validation")]
    NoQuestions,
}

impl GenerateError {
    /// True for failures where the transport succeeded but nothing usable came
    /// back. Callers use this to decide between a plain retry and retrying
    /// with shorter content.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::UnparsableResponse | Self::NoQuestions)
    }
}

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("request timed out")]
    Timeout,
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
    #[error("invalid endpoint: {0}")]
    Endpoint(String),
}
