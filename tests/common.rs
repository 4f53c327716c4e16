//! Common test utilities and fixtures
//!
//! Shared catalog builders used across the test modules.

use chrono::{Duration, Utc};
use onestop::types::{Manga, Status};

/// Builds a minimal catalog entry for filter tests.
#[allow(dead_code)]
pub fn entry(id: &str, title: &str, author: &str, status: Status, genres: &[&str]) -> Manga {
    Manga {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        description: format!("Description of {}", title),
        cover_url: format!("https://example.com/{}.jpg", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        status,
        rating: 4.0,
        views: 1_000,
        likes: 100,
        updated_at: Utc::now() - Duration::days(1),
        uploader_id: "u1".to_string(),
    }
}

/// A five-entry catalog where exactly two entries ("a" and "d") are both
/// Ongoing and tagged Fantasy.
#[allow(dead_code)]
pub fn scenario_catalog() -> Vec<Manga> {
    vec![
        entry("a", "Blade of Dawn", "Aoki", Status::Ongoing, &["Fantasy", "Action"]),
        entry("b", "City Lights", "Mori", Status::Completed, &["Romance", "Drama"]),
        entry("c", "Star Courier", "Aoki", Status::Ongoing, &["Sci-Fi"]),
        entry("d", "Grimoire Club", "Sato", Status::Ongoing, &["Comedy", "Fantasy"]),
        entry("e", "Hollow Keep", "Inoue", Status::Hiatus, &["Fantasy", "Horror"]),
    ]
}
