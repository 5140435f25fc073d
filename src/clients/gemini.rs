use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, error, info, instrument, warn};

use crate::config::{GeminiConfig, KeyFromEnv};
use crate::core::GenerateTransport;
use crate::envelope::GenerateContentRequest;
use crate::error::GeminiError;

/// HTTP transport for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl KeyFromEnv for GeminiClient {
    const KEY_NAME: &'static str = "GEMINI_API_KEY";
}

impl GeminiClient {
    /// Create a new Gemini client with full configuration
    pub fn new(config: GeminiConfig) -> Self {
        info!(model = %config.model, "Creating new Gemini client");
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> Result<Url, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        // The API takes its key as a query parameter.
        Url::parse_with_params(&url, &[("key", self.config.api_key.as_str())])
            .map_err(|e| GeminiError::Endpoint(e.to_string()))
    }
}

#[async_trait]
impl GenerateTransport for GeminiClient {
    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn execute(&self, request: &GenerateContentRequest) -> Result<String, GeminiError> {
        let url = self.endpoint()?;

        debug!("Sending request to Gemini API");
        let response = self
            .client
            .post(url)
            .timeout(self.config.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!("Gemini API request timed out");
                    GeminiError::Timeout
                } else {
                    error!(error = %e, "HTTP request failed");
                    GeminiError::Http(e.to_string())
                }
            })?;

        debug!(status = %response.status(), "Received response from Gemini API");

        if response.status() == 429 {
            warn!("Gemini API rate limit exceeded");
            return Err(GeminiError::RateLimit);
        }

        if response.status() == 401 || response.status() == 403 {
            error!("Gemini API authentication failed");
            return Err(GeminiError::Authentication);
        }

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Gemini API error");
            return Err(GeminiError::Api(error_text));
        }

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read Gemini response body");
            GeminiError::Http(e.to_string())
        })?;

        info!(response_len = body.len(), "Successfully received Gemini response");
        Ok(body)
    }

    fn clone_box(&self) -> Box<dyn GenerateTransport> {
        Box::new(self.clone())
    }
}
