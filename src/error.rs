//! Error types and result handling for OneStop operations.
//!
//! All fallible operations return a [`Result<T>`], a type alias for
//! `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! - **Network Errors**: connection issues, timeouts, HTTP transport errors
//! - **JSON Errors**: serialization/deserialization failures
//! - **Model Errors**: generative-text service errors with context
//! - **Not Found**: missing catalog entries or chapters
//!
//! Note that errors from the recommendation path never reach callers of
//! [`AiLibrarian`](crate::ai::AiLibrarian): that component converts every
//! failure into a fixed fallback string at its boundary. The variants here
//! are the currency of the lower layers ([`TextModel`](crate::ai::TextModel),
//! [`net`](crate::net), [`Library::chapters`](crate::Library::chapters)).

use thiserror::Error;

/// Type alias for Results with OneStop errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all OneStop operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest), including
    /// connection timeouts, DNS resolution failures, and transport errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization and deserialization errors.
    ///
    /// Wraps errors from serde_json when parsing responses from the
    /// generative-text service or serializing request bodies.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generative-text service errors with contextual information.
    ///
    /// Produced when the service responds with a non-success status or a
    /// payload the client cannot use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use onestop::Error;
    ///
    /// let error = Error::model("gemini-2.5-flash", "HTTP 503");
    /// ```
    #[error("Model error [{model}]: {message}")]
    Model { model: String, message: String },

    /// Resource not found errors.
    ///
    /// ```rust
    /// use onestop::Error;
    ///
    /// let error = Error::not_found("Manga with id 'm99'");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic error messages.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Creates a model error with the model identifier and message.
    pub fn model(model: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Model {
            model: model.into(),
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
