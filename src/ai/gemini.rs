//! Gemini `generateContent` implementation of [`TextModel`].

use crate::{ai::TextModel, error::Result, net};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

/// Production endpoint of the Gemini API.
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Model used for recommendations and summaries.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

/// Response body for `generateContent`; only the text path is read.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// [`TextModel`] backed by the Gemini `generateContent` endpoint.
///
/// Each [`generate`](TextModel::generate) call issues exactly one POST with
/// the API key in the `x-goog-api-key` header and reads the first text part
/// of the first candidate from the response. A missing candidate or text
/// part is a successful empty reply, not an error.
///
/// # Examples
///
/// ```rust,no_run
/// use onestop::ai::{AiLibrarian, gemini::GeminiModel};
///
/// let librarian = AiLibrarian::new(GeminiModel::new("my-api-key"));
/// ```
pub struct GeminiModel {
    api_key: String,
    api_base: String,
    model: String,
}

impl GeminiModel {
    /// Creates a model client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the API base URL. Used by tests to point at a local server.
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Overrides the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|_| crate::Error::model(&self.model, "API key is not header-safe"))?,
        );

        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response: GenerateResponse = net::post_json(&self.model, &url, headers, &body).await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        Ok(text)
    }
}
