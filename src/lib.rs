//! # OneStop - In-memory manga catalog, reader model, and AI librarian
//!
//! OneStop is the data-and-logic core of a manga browsing and reading
//! application. It holds a catalog seeded from fixtures entirely in process
//! memory and provides multi-criteria filtering, a deterministic chapter
//! generator for the paginated reader, an explicit application-state object,
//! and an async recommendation client backed by a generative-text service.
//!
//! ## Features
//!
//! - **Catalog Filtering**: Conjunctive text/status/genre filtering with a
//!   fluent builder, pure and order-preserving
//! - **AI Librarian**: Single-shot recommendations and taglines with fixed
//!   fallbacks for missing configuration and service failures
//! - **Reader Model**: Deterministic per-series chapter lists with
//!   reading-order navigation helpers
//! - **Explicit State**: Catalog mutation, session, and theme routed through
//!   named operations instead of ambient globals
//!
//! ## Quick Start
//!
//! ### Filtering the catalog
//!
//! ```rust
//! use onestop::prelude::*;
//!
//! let library = Library::seeded();
//!
//! let results = library
//!     .filter()
//!     .query("tower")
//!     .status(Status::Ongoing)
//!     .genre("Fantasy")
//!     .run();
//!
//! assert!(results.iter().all(|m| m.status == Status::Ongoing));
//! ```
//!
//! ### Asking the AI librarian
//!
//! ```rust,no_run
//! use onestop::prelude::*;
//! use onestop::ai::AiLibrarian;
//!
//! #[tokio::main]
//! async fn main() {
//!     let library = Library::seeded();
//!     let librarian = AiLibrarian::from_env();
//!
//!     // Always resolves to a displayable string, even without a key
//!     // or when the service is down.
//!     let reply = librarian
//!         .recommend("an action series about hunters", library.catalog())
//!         .await;
//!     println!("{}", reply);
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`]: Core data structures for series, chapters, filters, sessions
//! - [`filter`]: The catalog filter and its fluent builder
//! - [`ai`]: The AI librarian and the [`TextModel`](ai::TextModel) seam
//! - [`library`]: The application-state object
//! - [`chapters`]: Deterministic chapter generation and reader navigation
//! - [`fixtures`]: Seed catalog and demo users
//! - [`net`]: HTTP plumbing for the service call
//! - [`error`]: Error handling

pub mod ai;
pub mod chapters;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod library;
pub mod net;
pub mod types;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and traits so a single
/// `use onestop::prelude::*;` covers typical usage.
pub mod prelude {
    pub use crate::{
        ai::{AiLibrarian, TextModel},
        filter::{CatalogExt, FilterBuilder},
        library::Library,
        types::{
            Chapter, FilterCriteria, FilterCriteriaBuilder, Manga, MangaDraft, MangaDraftBuilder,
            Status, StatusFilter, Theme, User, UserRole,
        },
    };
}

// Re-export main types at crate root for direct access
pub use ai::AiLibrarian;
pub use error::{Error, Result};
pub use filter::{CatalogExt, FilterBuilder};
pub use library::Library;
pub use types::{Chapter, FilterCriteria, Manga, MangaDraft, Status, StatusFilter, Theme};
