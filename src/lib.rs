pub mod clients;
pub mod config;
pub mod core;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod prompt;
pub mod question;

// Convenient re-exports
pub use config::{GeminiConfig, GenerationParams};
pub use core::{GenerateTransport, QuizGenerator};
pub use error::{GenerateError, GeminiError};
pub use question::McQuestion;
