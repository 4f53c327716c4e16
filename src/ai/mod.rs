//! The AI librarian: recommendation and summary lookups against a
//! generative-text service.
//!
//! [`AiLibrarian`] is total from the caller's perspective: every invocation
//! resolves to a displayable string, never an error. Missing configuration
//! and service failures each map to a fixed fallback; the underlying cause
//! is logged and discarded. The service itself sits behind the [`TextModel`]
//! trait, with [`gemini::GeminiModel`] as the production implementation.
//!
//! # Examples
//!
//! ```rust,no_run
//! use onestop::ai::AiLibrarian;
//! use onestop::Library;
//!
//! # async fn example() {
//! let library = Library::seeded();
//! let librarian = AiLibrarian::from_env();
//!
//! let reply = librarian
//!     .recommend("something with towers", library.catalog())
//!     .await;
//! println!("{}", reply);
//! # }
//! ```

use crate::{error::Result, types::Manga};
use async_trait::async_trait;

pub mod gemini;

/// Fallback shown when no API key is configured.
pub const NO_KEY_MESSAGE: &str =
    "AI features require an API Key. Please configure it to get smart recommendations.";

/// Fallback shown when the service replies without usable text.
pub const EMPTY_REPLY_MESSAGE: &str =
    "I couldn't find a specific recommendation, but try exploring our Top Rated section!";

/// Fallback shown when the service call fails.
pub const UNAVAILABLE_MESSAGE: &str =
    "The AI librarian is currently taking a nap. Please try again later.";

/// A single-shot text-generation backend.
///
/// One prompt in, one completion out. No streaming, no multi-turn state, no
/// retry; implementations issue exactly one request per call. An `Ok` with
/// an empty string means the service answered but produced no usable text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Identifier of the underlying model, used for diagnostics.
    fn model_id(&self) -> &str;

    /// Generates a completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Caller-facing recommendation and summary component.
///
/// Holds an optional [`TextModel`]; when none is configured every operation
/// short-circuits to its no-key fallback without touching the network.
/// Concurrent calls are independent and share no mutable state.
pub struct AiLibrarian {
    model: Option<Box<dyn TextModel>>,
}

impl AiLibrarian {
    /// Environment variable holding the service credential.
    pub const API_KEY_VAR: &'static str = "GEMINI_API_KEY";

    /// Builds the librarian from the environment.
    ///
    /// Reads [`API_KEY_VAR`](Self::API_KEY_VAR) once; if it is unset or
    /// empty the librarian is disabled and all calls take the no-key path.
    pub fn from_env() -> Self {
        match std::env::var(Self::API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Self::new(gemini::GeminiModel::new(key)),
            _ => Self::disabled(),
        }
    }

    /// Builds the librarian over an explicit model.
    pub fn new(model: impl TextModel + 'static) -> Self {
        Self {
            model: Some(Box::new(model)),
        }
    }

    /// Builds a librarian with no backing model.
    pub fn disabled() -> Self {
        Self { model: None }
    }

    /// Returns `true` if a model is configured.
    pub fn is_enabled(&self) -> bool {
        self.model.is_some()
    }

    /// Asks for a recommendation matching the query against the catalog.
    ///
    /// The prompt embeds the literal query and one bullet line per catalog
    /// entry (title plus comma-joined genres) in catalog order, with no
    /// truncation or deduplication. Exactly one service call is made; the
    /// reply text is returned verbatim. Every failure mode resolves to one
    /// of the fixed fallback strings; this method never errors.
    pub async fn recommend(&self, query: &str, catalog: &[Manga]) -> String {
        let Some(model) = &self.model else {
            return NO_KEY_MESSAGE.to_string();
        };

        let prompt = recommendation_prompt(query, catalog);
        match model.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => EMPTY_REPLY_MESSAGE.to_string(),
            Err(e) => {
                tracing::warn!(
                    model = model.model_id(),
                    error = %e,
                    "recommendation request failed"
                );
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }

    /// Condenses a series description into a short promotional tagline.
    ///
    /// Same single-call contract as [`recommend`](Self::recommend), but the
    /// no-key, empty-reply, and failure paths all echo the original
    /// description unchanged instead of an error message.
    pub async fn summarize(&self, title: &str, description: &str) -> String {
        let Some(model) = &self.model else {
            return description.to_string();
        };

        let prompt = summary_prompt(title, description);
        match model.generate(&prompt).await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => description.to_string(),
            Err(e) => {
                tracing::warn!(
                    model = model.model_id(),
                    error = %e,
                    "summary request failed"
                );
                description.to_string()
            }
        }
    }
}

fn recommendation_prompt(query: &str, catalog: &[Manga]) -> String {
    let listing = catalog
        .iter()
        .map(|m| format!("- {} ({})", m.title, m.genres_joined()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert manga librarian for \"OneStop Manga Reader\".\n\
         User Query: \"{}\"\n\
         \n\
         Available Manga Library:\n\
         {}\n\
         \n\
         Task: Recommend the best match from the library based on the user's query.\n\
         If nothing fits perfectly, recommend the closest match.\n\
         Provide a brief, exciting 1-sentence reason why.\n\
         Format: \"I recommend [Manga Title] because [Reason].\"",
        query, listing
    )
}

fn summary_prompt(title: &str, description: &str) -> String {
    format!(
        "Summarize this manga description into a catchy 10-word tagline for a banner ad:\n\
         \n\
         Title: {}\n\
         Description: {}",
        title, description
    )
}
