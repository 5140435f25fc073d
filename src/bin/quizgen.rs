use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizgen::clients::gemini::GeminiClient;
use quizgen::config::{GeminiConfig, KeyFromEnv};
use quizgen::{McQuestion, QuizGenerator};

/// Generate a multiple-choice quiz from a text document.
#[derive(Debug, Parser)]
#[command(name = "quizgen", version, about)]
struct Args {
    /// Input text file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Gemini model to use
    #[arg(long, default_value = "gemini-2.0-flash")]
    model: String,

    /// Maximum document characters sent to the model
    #[arg(long, default_value_t = 10_000)]
    max_chars: usize,

    /// Number of questions to request
    #[arg(long, default_value_t = 5)]
    questions: usize,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Print which option is correct
    #[arg(long)]
    show_answers: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let document = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let api_key = GeminiClient::find_key()
        .with_context(|| format!("{} is not set", GeminiClient::KEY_NAME))?;

    let config = GeminiConfig {
        model: args.model.clone(),
        max_content_chars: args.max_chars,
        question_count: args.questions,
        timeout: Duration::from_secs(args.timeout),
        ..GeminiConfig::with_api_key(api_key)
    };

    let generator = QuizGenerator::new(GeminiClient::new(config.clone()), config);
    let questions = generator.generate_questions(&document).await?;

    for (number, question) in questions.iter().enumerate() {
        print_question(number + 1, question, args.show_answers);
    }

    Ok(())
}

fn print_question(number: usize, question: &McQuestion, show_answer: bool) {
    println!("{}. {}", number, question.question);
    for (index, option) in question.options.iter().enumerate() {
        let marker = if show_answer && index == question.correct_answer_index {
            " (correct)"
        } else {
            ""
        };
        println!("   {}. {}{}", McQuestion::option_label(index), option, marker);
    }
    println!();
}
