//! Core data types for the catalog, chapters, filters, and sessions.
//!
//! This module defines the fundamental data structures used throughout OneStop:
//!
//! - [`Manga`] - A catalog entry for one manga series
//! - [`Chapter`] - A single readable installment with its page images
//! - [`Status`] - Publication status of a series
//! - [`FilterCriteria`] - Combined text/status/genre filter state
//! - [`MangaDraft`] - Payload for the upload flow
//! - [`User`], [`UserRole`], [`Theme`] - Session state types
//!
//! # Examples
//!
//! ```rust
//! use onestop::types::{FilterCriteriaBuilder, Status, StatusFilter};
//!
//! let criteria = FilterCriteriaBuilder::default()
//!     .query("solo")
//!     .status(StatusFilter::Only(Status::Ongoing))
//!     .genres(vec!["Fantasy".to_string()])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(criteria.query, "solo");
//! ```

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry for one manga series.
///
/// Each entry has an identifier unique within the catalog and carries the
/// metadata the browsing surfaces render. Entries are immutable once created
/// as far as this crate is concerned; the view/like counters belong to a
/// future backend and are never mutated here.
///
/// # Examples
///
/// ```rust
/// use onestop::types::{Manga, Status};
/// use chrono::Utc;
///
/// let manga = Manga {
///     id: "m1".to_string(),
///     title: "Solo Leveling: Reawakened".to_string(),
///     author: "Chugong".to_string(),
///     description: "The weakest hunter grows stronger.".to_string(),
///     cover_url: "https://example.com/cover.jpg".to_string(),
///     genres: vec!["Action".to_string(), "Fantasy".to_string()],
///     status: Status::Ongoing,
///     rating: 4.9,
///     views: 1_250_000,
///     likes: 45_000,
///     updated_at: Utc::now(),
///     uploader_id: "u1".to_string(),
/// };
///
/// assert_eq!(manga.status, Status::Ongoing);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manga {
    /// Unique identifier within the catalog
    pub id: String,

    /// Main title
    pub title: String,

    /// Author name
    pub author: String,

    /// Plot summary
    pub description: String,

    /// Cover image URL
    pub cover_url: String,

    /// Genre tags, in display order
    #[serde(default)]
    pub genres: Vec<String>,

    /// Publication status
    pub status: Status,

    /// Average rating, 0.0 to 5.0
    pub rating: f64,

    /// View counter
    pub views: u64,

    /// Like counter
    pub likes: u64,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Identifier of the uploading user
    pub uploader_id: String,
}

impl Manga {
    /// Returns the genre list joined with `", "`, the form used in
    /// recommendation prompts and genre badges.
    pub fn genres_joined(&self) -> String {
        self.genres.join(", ")
    }
}

/// Publication status of a series.
///
/// This is a closed enumeration; the serialized form matches the strings
/// used by the catalog fixtures (`"Ongoing"`, `"Completed"`, `"Hiatus"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Ongoing,
    Completed,
    Hiatus,
}

impl Status {
    /// All statuses, in the order the filter UI presents them.
    pub const ALL: [Status; 3] = [Status::Ongoing, Status::Completed, Status::Hiatus];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Ongoing => "Ongoing",
            Status::Completed => "Completed",
            Status::Hiatus => "Hiatus",
        };
        f.write_str(s)
    }
}

impl FromStr for Status {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ongoing" => Ok(Status::Ongoing),
            "Completed" => Ok(Status::Completed),
            "Hiatus" => Ok(Status::Hiatus),
            other => Err(crate::Error::Other(format!("Unknown status: {}", other))),
        }
    }
}

/// Status selector for the catalog filter.
///
/// [`StatusFilter::All`] is the sentinel that disables the status criterion;
/// [`StatusFilter::Only`] admits entries whose status equals the selected
/// variant exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// No status filtering
    #[default]
    All,
    /// Only entries with this exact status
    Only(Status),
}

impl StatusFilter {
    /// Returns `true` if an entry with the given status passes this selector.
    pub fn admits(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        StatusFilter::Only(status)
    }
}

/// A single readable installment of a series.
///
/// Chapters contain the actual readable content in the form of page image
/// URLs, ordered for display. Numbers are positive and unique per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Unique identifier, derived from the owning series id and number
    pub id: String,

    /// Owning series identifier
    pub manga_id: String,

    /// Chapter title
    pub title: String,

    /// Sequential chapter number, starting at 1
    pub number: u32,

    /// Page image URLs, in reading order
    #[serde(default)]
    pub pages: Vec<String>,

    /// View counter
    pub views: u64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Combined filter state applied to the catalog.
///
/// The three criteria combine conjunctively: an entry must satisfy every
/// active criterion to appear in the result. Each criterion has a neutral
/// value (empty query, [`StatusFilter::All`], empty genre set) that excludes
/// nothing.
///
/// # Builder Usage
///
/// ```rust
/// use onestop::types::{FilterCriteriaBuilder, Status};
///
/// let criteria = FilterCriteriaBuilder::default()
///     .query("tower")
///     .status(Status::Ongoing)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into), default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title or author
    pub query: String,

    /// Status selector; [`StatusFilter::All`] disables the criterion
    pub status: StatusFilter,

    /// Required genre tags; the entry must contain every one of them
    pub genres: Vec<String>,
}

impl From<&str> for FilterCriteria {
    /// Creates criteria that filter by text query only.
    ///
    /// ```rust
    /// use onestop::types::{FilterCriteria, StatusFilter};
    ///
    /// let criteria: FilterCriteria = "one piece".into();
    /// assert_eq!(criteria.query, "one piece");
    /// assert_eq!(criteria.status, StatusFilter::All);
    /// ```
    fn from(query: &str) -> Self {
        FilterCriteria {
            query: query.to_string(),
            ..Default::default()
        }
    }
}

impl From<String> for FilterCriteria {
    fn from(query: String) -> Self {
        FilterCriteria {
            query,
            ..Default::default()
        }
    }
}

/// Payload for creating a new catalog entry through the upload flow.
///
/// Only the fields the upload form collects are present; identifier, author,
/// counters, and timestamps are filled in by
/// [`Library::add`](crate::Library::add).
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct MangaDraft {
    pub title: String,
    pub description: String,
    #[builder(default)]
    pub genres: Vec<String>,
    #[builder(default = "Status::Ongoing")]
    pub status: Status,
    /// Cover image URL; a deterministic placeholder is generated when absent
    #[builder(default)]
    pub cover_url: Option<String>,
}

/// Role attached to a session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Uploader,
    Admin,
}

/// A logged-in user of the reader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub avatar_url: String,
    pub role: UserRole,
    /// Favorited series ids
    #[serde(default)]
    pub favorites: Vec<String>,
}

/// UI color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
