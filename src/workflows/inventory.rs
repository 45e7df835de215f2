//! Record operations over an in-memory collection. Callers load the
//! collection, pass it through one of these, and save what comes back.

use crate::domain::models::{format_rating, AnimeEntry, SearchField};

/// Replacement values for an entry; `None` keeps the current value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EntryUpdate {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub episodes: Option<String>,
    pub rating: Option<f64>,
}

impl EntryUpdate {
    fn apply_to(self, entry: &mut AnimeEntry) {
        if let Some(title) = self.title {
            entry.title = title;
        }
        if let Some(genre) = self.genre {
            entry.genre = genre;
        }
        if let Some(episodes) = self.episodes {
            entry.episodes = episodes;
        }
        if let Some(rating) = self.rating {
            entry.rating = rating;
        }
    }
}

/// Reads a 1-based position the way the menu accepts it: leading
/// whitespace and a `+` are skipped, then the leading digits are taken
/// ("2abc" is 2). Returns the 0-based index when it falls inside `len`.
pub fn resolve_position(input: &str, len: usize) -> Option<usize> {
    let rest = input.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let position: usize = digits.parse().ok()?;

    if position >= 1 && position <= len {
        Some(position - 1)
    } else {
        None
    }
}

pub fn add(mut entries: Vec<AnimeEntry>, entry: AnimeEntry) -> Vec<AnimeEntry> {
    entries.push(entry);
    entries
}

/// Merges `update` into the entry at `index`. Out-of-range indexes leave
/// the collection untouched.
pub fn update(mut entries: Vec<AnimeEntry>, index: usize, update: EntryUpdate) -> Vec<AnimeEntry> {
    if let Some(entry) = entries.get_mut(index) {
        update.apply_to(entry);
    }
    entries
}

/// Removes the entry at `index`, shifting later entries down by one.
pub fn delete(mut entries: Vec<AnimeEntry>, index: usize) -> (Vec<AnimeEntry>, Option<AnimeEntry>) {
    if index < entries.len() {
        let removed = entries.remove(index);
        (entries, Some(removed))
    } else {
        (entries, None)
    }
}

/// Title and genre match case-insensitive substrings; episodes and rating
/// must equal the keyword exactly as displayed.
pub fn search(entries: &[AnimeEntry], field: SearchField, keyword: &str) -> Vec<AnimeEntry> {
    let needle = keyword.to_lowercase();
    entries
        .iter()
        .filter(|entry| match field {
            SearchField::Title => entry.title.to_lowercase().contains(&needle),
            SearchField::Genre => entry.genre.to_lowercase().contains(&needle),
            SearchField::Episodes => entry.episodes == keyword,
            SearchField::Rating => format_rating(entry.rating) == keyword,
        })
        .cloned()
        .collect()
}
