//! The application-state object: catalog, session, and theme.
//!
//! [`Library`] replaces ambient global state with an explicit object the
//! surrounding application passes to whatever needs it. All mutation goes
//! through named operations ([`add`](Library::add), [`login`](Library::login),
//! [`logout`](Library::logout), [`toggle_theme`](Library::toggle_theme)),
//! which together with `&mut self` keeps single-writer discipline without
//! global variables.
//!
//! # Examples
//!
//! ```rust
//! use onestop::prelude::*;
//!
//! let mut library = Library::seeded();
//! assert_eq!(library.len(), 5);
//!
//! library.login_admin();
//! let draft = MangaDraftBuilder::default()
//!     .title("My New Series")
//!     .description("A fresh upload.")
//!     .genres(vec!["Comedy".to_string()])
//!     .build()
//!     .unwrap();
//!
//! let added = library.add(draft);
//! assert_eq!(library.catalog()[0].id, added.id);
//! ```

use crate::{
    chapters,
    error::Result,
    filter::FilterBuilder,
    fixtures,
    types::{Chapter, Manga, MangaDraft, Theme, User},
};
use chrono::Utc;

/// In-memory application state: the catalog plus session and theme.
///
/// The catalog is an owned, ordered collection; new uploads are prepended so
/// the newest entry is always first, matching the browsing surfaces.
pub struct Library {
    catalog: Vec<Manga>,
    user: Option<User>,
    theme: Theme,
    next_seq: u64,
}

impl Library {
    /// Creates a library over the given catalog.
    ///
    /// The upload id counter is seeded past the highest numeric `m{n}` id
    /// already present, so generated ids never collide with the catalog.
    pub fn new(catalog: Vec<Manga>) -> Self {
        let next_seq = catalog
            .iter()
            .filter_map(|m| m.id.strip_prefix('m'))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            catalog,
            user: None,
            theme: Theme::default(),
            next_seq,
        }
    }

    /// Creates a library seeded with the fixture catalog.
    ///
    /// ```rust
    /// use onestop::Library;
    ///
    /// let library = Library::seeded();
    /// assert!(library.get("m1").is_some());
    /// ```
    pub fn seeded() -> Self {
        Self::new(fixtures::seed_catalog())
    }

    /// Returns the full catalog in its current order.
    pub fn catalog(&self) -> &[Manga] {
        &self.catalog
    }

    /// Looks up a catalog entry by id.
    pub fn get(&self, id: &str) -> Option<&Manga> {
        self.catalog.iter().find(|m| m.id == id)
    }

    /// Returns the number of catalog entries.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    /// Returns `true` if the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Starts a fluent filter over the catalog.
    ///
    /// ```rust
    /// use onestop::prelude::*;
    ///
    /// let library = Library::seeded();
    /// let romance = library.filter().genre("Romance").run();
    /// ```
    pub fn filter(&self) -> FilterBuilder<'_> {
        FilterBuilder::new(self)
    }

    /// Adds a new entry from an upload draft, prepending it to the catalog.
    ///
    /// The id comes from the library's monotonic counter, never from the
    /// wall clock, so rapid consecutive uploads cannot collide. Author and
    /// uploader are taken from the session user, with guest defaults when
    /// nobody is logged in. Returns a clone of the stored entry.
    pub fn add(&mut self, draft: MangaDraft) -> Manga {
        let id = format!("m{}", self.next_seq);
        self.next_seq += 1;

        let cover_url = draft
            .cover_url
            .unwrap_or_else(|| format!("https://picsum.photos/seed/{}/400/600", id));

        let manga = Manga {
            author: self
                .user
                .as_ref()
                .map_or_else(|| "Unknown".to_string(), |u| u.username.clone()),
            uploader_id: self
                .user
                .as_ref()
                .map_or_else(|| "guest".to_string(), |u| u.id.clone()),
            id,
            title: draft.title,
            description: draft.description,
            cover_url,
            genres: draft.genres,
            status: draft.status,
            rating: 0.0,
            views: 0,
            likes: 0,
            updated_at: Utc::now(),
        };

        self.catalog.insert(0, manga.clone());
        manga
    }

    /// Returns the generated chapter list for a catalog entry.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`](crate::Error::NotFound) if no entry has the
    /// given id.
    pub fn chapters(&self, id: &str) -> Result<Vec<Chapter>> {
        if self.get(id).is_none() {
            return Err(crate::Error::not_found(format!("Manga with id '{}'", id)));
        }
        Ok(chapters::generate(id))
    }

    /// Starts a session for the given user.
    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Starts a session as the fixture admin (the demo login).
    pub fn login_admin(&mut self) {
        self.login(fixtures::admin_user());
    }

    /// Ends the current session, if any.
    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Returns the session user, if logged in.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the current UI theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips between light and dark themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
