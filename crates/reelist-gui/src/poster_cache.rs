//! Poster image cache.
//!
//! Posters are downloaded once per IMDb id to the platform data dir and
//! rendered from disk afterwards. The in-memory map tracks what each slot
//! is doing so the views can draw a placeholder while a download runs.

use std::collections::HashMap;
use std::path::PathBuf;

/// State of a poster image for a given movie.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping IMDb ids to their poster state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, imdb_id: &str) -> Option<&PosterState> {
        self.states.get(imdb_id)
    }
}

/// Directory for cached poster images.
pub fn posters_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "reelist")
        .map(|dirs| dirs.data_dir().join("posters"))
        .unwrap_or_else(|| PathBuf::from("posters"))
}

/// Expected file path for a poster image.
pub fn poster_path(imdb_id: &str) -> PathBuf {
    posters_dir().join(format!("{imdb_id}.jpg"))
}

/// Download a poster and save it to disk. Returns the saved path.
pub async fn fetch_poster(imdb_id: String, url: String) -> Result<PathBuf, String> {
    let dir = posters_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = poster_path(&imdb_id);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
