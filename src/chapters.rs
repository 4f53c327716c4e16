//! Deterministic chapter generation and reading-order helpers.
//!
//! Chapter lists are generated on demand per series rather than stored: the
//! same series id always produces the same list, with identifiers derived
//! from the series id and chapter number. The list comes back in display
//! order (newest chapter first); the reading-order helpers below resolve
//! "read first", "next", and "previous" for the reader.
//!
//! # Examples
//!
//! ```rust
//! use onestop::chapters;
//!
//! let list = chapters::generate("m1");
//! assert_eq!(list.len(), 10);
//! assert_eq!(list[0].id, "cm1-10");
//!
//! let first = chapters::first_to_read(&list).unwrap();
//! assert_eq!(first.number, 1);
//! ```

use crate::types::Chapter;
use chrono::{Duration, Utc};

/// Number of chapters generated per series.
pub const CHAPTER_COUNT: u32 = 10;

/// Number of page images per generated chapter.
pub const PAGES_PER_CHAPTER: u32 = 4;

/// Generates the chapter list for a series, newest first.
///
/// Chapters are numbered `CHAPTER_COUNT` down to 1 with ids of the form
/// `c{series_id}-{number}`. Page URLs and view counters are derived
/// deterministically from the chapter id, and creation timestamps step back
/// one day per position. The generator accepts any id; whether the series
/// exists is the caller's concern.
pub fn generate(series_id: &str) -> Vec<Chapter> {
    let now = Utc::now();

    (0..CHAPTER_COUNT)
        .map(|i| {
            let number = CHAPTER_COUNT - i;
            let id = format!("c{}-{}", series_id, number);

            let pages = (1..=PAGES_PER_CHAPTER)
                .map(|page| {
                    format!(
                        "https://picsum.photos/seed/{}-{}-{}/800/1200",
                        series_id, number, page
                    )
                })
                .collect();

            Chapter {
                views: seeded_views(&id),
                id,
                manga_id: series_id.to_string(),
                title: format!("Episode {}", number),
                number,
                pages,
                created_at: now - Duration::days(i as i64),
            }
        })
        .collect()
}

/// Returns the chapter the "Read First Chapter" action opens: the lowest
/// numbered chapter in the list.
pub fn first_to_read(chapters: &[Chapter]) -> Option<&Chapter> {
    chapters.iter().min_by_key(|c| c.number)
}

/// Returns the chapter following `current` in reading order, if any.
pub fn next_after<'a>(chapters: &'a [Chapter], current: &Chapter) -> Option<&'a Chapter> {
    chapters.iter().find(|c| c.number == current.number + 1)
}

/// Returns the chapter preceding `current` in reading order, if any.
pub fn previous_before<'a>(chapters: &'a [Chapter], current: &Chapter) -> Option<&'a Chapter> {
    current
        .number
        .checked_sub(1)
        .and_then(|wanted| chapters.iter().find(|c| c.number == wanted))
}

/// Deterministic stand-in for a view counter, folded from the chapter id.
fn seeded_views(id: &str) -> u64 {
    let hash = id
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325u64, |acc, b| {
            (acc ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
        });
    hash % 10_000
}
