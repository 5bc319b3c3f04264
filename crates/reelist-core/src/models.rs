use serde::{Deserialize, Serialize};

/// A movie the user has rated and added to the watched list.
///
/// Immutable once added, except for deletion. Keyed by IMDb id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub imdb_rating: f32,
    /// Runtime in minutes, parsed from the detail record's runtime text.
    pub runtime: u32,
    /// User's own rating, 1-10.
    pub user_rating: u8,
}

/// Aggregate figures for the watched-list summary card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f32,
    pub avg_user_rating: f32,
    pub avg_runtime: f32,
}

impl WatchedSummary {
    pub fn of(entries: &[WatchedEntry]) -> Self {
        let count = entries.len();
        if count == 0 {
            return Self {
                count: 0,
                avg_imdb_rating: 0.0,
                avg_user_rating: 0.0,
                avg_runtime: 0.0,
            };
        }
        let n = count as f32;
        Self {
            count,
            avg_imdb_rating: entries.iter().map(|e| e.imdb_rating).sum::<f32>() / n,
            avg_user_rating: entries.iter().map(|e| e.user_rating as f32).sum::<f32>() / n,
            avg_runtime: entries.iter().map(|e| e.runtime as f32).sum::<f32>() / n,
        }
    }
}

/// Remove the entry with the given IMDb id, leaving every other entry
/// (including same-titled ones) in place.
pub fn remove_entry(entries: &mut Vec<WatchedEntry>, imdb_id: &str) {
    entries.retain(|e| e.imdb_id != imdb_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(imdb_id: &str, title: &str, rating: u8, runtime: u32) -> WatchedEntry {
        WatchedEntry {
            imdb_id: imdb_id.into(),
            title: title.into(),
            year: "1988".into(),
            poster: None,
            imdb_rating: 7.0,
            runtime,
            user_rating: rating,
        }
    }

    #[test]
    fn summary_of_empty_list_is_zeroed() {
        let summary = WatchedSummary::of(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.avg_user_rating, 0.0);
        assert_eq!(summary.avg_runtime, 0.0);
    }

    #[test]
    fn summary_averages() {
        let entries = vec![entry("tt1", "A", 8, 100), entry("tt2", "B", 6, 140)];
        let summary = WatchedSummary::of(&entries);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.avg_user_rating, 7.0);
        assert_eq!(summary.avg_runtime, 120.0);
        assert!((summary.avg_imdb_rating - 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn remove_entry_deletes_exactly_one_even_with_duplicate_titles() {
        let mut entries = vec![
            entry("tt0095016", "Die Hard", 9, 132),
            entry("tt0099423", "Die Hard", 7, 124),
        ];
        remove_entry(&mut entries, "tt0095016");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].imdb_id, "tt0099423");
    }

    #[test]
    fn remove_entry_with_unknown_id_is_a_noop() {
        let mut entries = vec![entry("tt1", "A", 8, 100)];
        remove_entry(&mut entries, "tt999");
        assert_eq!(entries.len(), 1);
    }
}
