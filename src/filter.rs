//! Catalog filtering and a fluent filter builder.
//!
//! The filter is a pure function of the catalog and a [`FilterCriteria`]:
//! it never mutates its input, preserves catalog order, and combines its
//! three criteria (text query, status, genre set) conjunctively. Recomputing
//! it on every criterion change is cheap at catalog scale, so no caching
//! layer sits in front of it.
//!
//! # Examples
//!
//! ```rust
//! use onestop::prelude::*;
//!
//! let library = Library::seeded();
//!
//! let ongoing_fantasy = library
//!     .filter()
//!     .status(Status::Ongoing)
//!     .genre("Fantasy")
//!     .run();
//!
//! for manga in &ongoing_fantasy {
//!     assert_eq!(manga.status, Status::Ongoing);
//!     assert!(manga.genres.iter().any(|g| g == "Fantasy"));
//! }
//! ```

use crate::{
    library::Library,
    types::{FilterCriteria, Manga, StatusFilter},
};

/// Applies filter criteria to a catalog, returning the matching subset.
///
/// The result preserves catalog order and contains clones of exactly the
/// entries for which [`matches`] holds. An empty catalog or an impossible
/// criteria combination yields an empty vector; no error path exists.
///
/// # Examples
///
/// ```rust
/// use onestop::filter;
/// use onestop::types::FilterCriteria;
///
/// let catalog = onestop::fixtures::seed_catalog();
///
/// // Neutral criteria are the identity filter
/// let all = filter::apply(&catalog, &FilterCriteria::default());
/// assert_eq!(all.len(), catalog.len());
///
/// let by_author = filter::apply(&catalog, &"chugong".into());
/// assert!(by_author.iter().all(|m| m.author.to_lowercase().contains("chugong")));
/// ```
pub fn apply(catalog: &[Manga], criteria: &FilterCriteria) -> Vec<Manga> {
    catalog
        .iter()
        .filter(|entry| matches(entry, criteria))
        .cloned()
        .collect()
}

/// Returns `true` if a single entry satisfies every active criterion.
///
/// - **Text**: an empty query excludes nothing; otherwise the lower-cased
///   query must be a substring of the lower-cased title or author.
/// - **Status**: [`StatusFilter::All`] excludes nothing; otherwise the
///   entry's status must equal the selected variant exactly.
/// - **Genres**: an empty set excludes nothing; otherwise every selected
///   tag must appear in the entry's genre list (containment, not equality).
pub fn matches(entry: &Manga, criteria: &FilterCriteria) -> bool {
    if !criteria.query.is_empty() {
        let query = criteria.query.to_lowercase();
        let in_title = entry.title.to_lowercase().contains(&query);
        let in_author = entry.author.to_lowercase().contains(&query);
        if !in_title && !in_author {
            return false;
        }
    }

    if !criteria.status.admits(entry.status) {
        return false;
    }

    criteria
        .genres
        .iter()
        .all(|wanted| entry.genres.iter().any(|g| g == wanted))
}

/// A fluent filter builder over a [`Library`]'s catalog.
///
/// Started from [`Library::filter()`]; chain criteria and finish with
/// [`run()`](FilterBuilder::run) to get the matching entries, or
/// [`criteria()`](FilterBuilder::criteria) to get just the built
/// [`FilterCriteria`] for use with lower-level APIs.
///
/// # Examples
///
/// ```rust
/// use onestop::prelude::*;
///
/// let library = Library::seeded();
///
/// let results = library
///     .filter()
///     .query("the")
///     .status(Status::Ongoing)
///     .run();
/// ```
pub struct FilterBuilder<'a> {
    library: &'a Library,
    criteria: FilterCriteria,
}

impl<'a> FilterBuilder<'a> {
    pub(crate) fn new(library: &'a Library) -> Self {
        Self {
            library,
            criteria: FilterCriteria::default(),
        }
    }

    /// Sets the free-text query, matched case-insensitively against title
    /// and author.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.criteria.query = query.into();
        self
    }

    /// Restricts results to a single publication status.
    pub fn status(mut self, status: impl Into<StatusFilter>) -> Self {
        self.criteria.status = status.into();
        self
    }

    /// Adds one required genre tag. May be called repeatedly; every added
    /// tag must be present on a matching entry.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.criteria.genres.push(genre.into());
        self
    }

    /// Replaces the required genre set.
    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.criteria.genres = genres;
        self
    }

    /// Executes the filter and returns the matching entries in catalog order.
    pub fn run(self) -> Vec<Manga> {
        apply(self.library.catalog(), &self.criteria)
    }

    /// Returns the built criteria without executing the filter.
    pub fn criteria(self) -> FilterCriteria {
        self.criteria
    }
}

/// Extension trait providing the ranked views the browsing surfaces consume.
///
/// These sorts operate on owned result vectors, so they compose naturally
/// with [`apply`] and [`FilterBuilder::run`].
///
/// # Examples
///
/// ```rust
/// use onestop::prelude::*;
///
/// let library = Library::seeded();
/// let trending = library.filter().run().trending();
///
/// for pair in trending.windows(2) {
///     assert!(pair[0].views >= pair[1].views);
/// }
/// ```
pub trait CatalogExt {
    /// Sorts by rating, highest first. Ties keep their relative order.
    fn top_rated(self) -> Self;

    /// Sorts by view count, highest first.
    fn trending(self) -> Self;

    /// Sorts by last-update timestamp, newest first.
    fn recently_updated(self) -> Self;
}

impl CatalogExt for Vec<Manga> {
    fn top_rated(mut self) -> Self {
        self.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        self
    }

    fn trending(mut self) -> Self {
        self.sort_by(|a, b| b.views.cmp(&a.views));
        self
    }

    fn recently_updated(mut self) -> Self {
        self.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self
    }
}
