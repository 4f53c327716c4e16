//! Static fixture data the catalog is seeded from.
//!
//! Until a real backend exists the application starts from this mock data:
//! five series, the canonical genre list, and the admin user the demo login
//! uses. [`Library::seeded`](crate::Library::seeded) wraps [`seed_catalog`].

use crate::types::{Manga, Status, User, UserRole};
use chrono::{Duration, Utc};

/// The canonical genre tags, in the order the filter UI presents them.
pub const GENRES: [&str; 12] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Isekai",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
    "Thriller",
];

/// Builds the five-series mock catalog.
///
/// Timestamps are relative to the call so "recently updated" views behave
/// sensibly; everything else is fixed.
pub fn seed_catalog() -> Vec<Manga> {
    let now = Utc::now();

    vec![
        Manga {
            id: "m1".to_string(),
            title: "Solo Leveling: Reawakened".to_string(),
            description: "In a world where hunters must battle deadly monsters to protect \
                the human race from certain annihilation, a notoriously weak hunter named \
                Sung Jinwoo finds himself in a seemingly endless struggle for survival."
                .to_string(),
            author: "Chugong".to_string(),
            cover_url: "https://picsum.photos/seed/solo/400/600".to_string(),
            genres: vec!["Action".to_string(), "Fantasy".to_string()],
            status: Status::Ongoing,
            rating: 4.9,
            views: 1_250_000,
            likes: 45_000,
            updated_at: now,
            uploader_id: "u1".to_string(),
        },
        Manga {
            id: "m2".to_string(),
            title: "The Beginning After The End".to_string(),
            description: "King Grey has unrivaled strength, wealth, and prestige in a world \
                governed by martial ability. However, solitude lingers closely behind those \
                with great power."
                .to_string(),
            author: "TurtleMe".to_string(),
            cover_url: "https://picsum.photos/seed/tbate/400/600".to_string(),
            genres: vec![
                "Adventure".to_string(),
                "Isekai".to_string(),
                "Magic".to_string(),
            ],
            status: Status::Ongoing,
            rating: 4.8,
            views: 980_000,
            likes: 32_000,
            updated_at: now - Duration::days(1),
            uploader_id: "u2".to_string(),
        },
        Manga {
            id: "m3".to_string(),
            title: "Omniscient Reader".to_string(),
            description: "Dokja was an average office worker whose sole interest was reading \
                his favorite web novel 'Three Ways to Survive the Apocalypse'."
                .to_string(),
            author: "singNsong".to_string(),
            cover_url: "https://picsum.photos/seed/orv/400/600".to_string(),
            genres: vec!["Fantasy".to_string(), "Action".to_string()],
            status: Status::Ongoing,
            rating: 4.9,
            views: 1_100_000,
            likes: 50_000,
            updated_at: now - Duration::days(2),
            uploader_id: "u1".to_string(),
        },
        Manga {
            id: "m4".to_string(),
            title: "Lore Olympus".to_string(),
            description: "Witness what the gods do after dark. The friendships and the lies, \
                the gossip and the wild parties, and of course, forbidden love."
                .to_string(),
            author: "Rachel Smythe".to_string(),
            cover_url: "https://picsum.photos/seed/lore/400/600".to_string(),
            genres: vec!["Romance".to_string(), "Drama".to_string()],
            status: Status::Completed,
            rating: 4.7,
            views: 2_000_000,
            likes: 80_000,
            updated_at: now - Duration::days(7),
            uploader_id: "u3".to_string(),
        },
        Manga {
            id: "m5".to_string(),
            title: "Tower of God".to_string(),
            description: "Reach the top, and everything will be yours. At the top of the \
                tower exists everything in this world, and all of it can be yours."
                .to_string(),
            author: "SIU".to_string(),
            cover_url: "https://picsum.photos/seed/tog/400/600".to_string(),
            genres: vec!["Fantasy".to_string(), "Adventure".to_string()],
            status: Status::Ongoing,
            rating: 4.6,
            views: 3_000_000,
            likes: 95_000,
            updated_at: now,
            uploader_id: "u3".to_string(),
        },
    ]
}

/// The fixture admin account used by the demo login.
pub fn admin_user() -> User {
    User {
        id: "admin_thorat".to_string(),
        username: "ThoratShreyash".to_string(),
        email: "thoratshreyash3@gmail.com".to_string(),
        avatar_url: "https://ui-avatars.com/api/?name=TS&background=22c55e&color=fff".to_string(),
        role: UserRole::Admin,
        favorites: vec!["m1".to_string(), "m3".to_string()],
    }
}
