use std::path::PathBuf;

use iced::widget::{button, column, container, row, text, text_input};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use reelist_api::omdb::{MovieDetail, MovieSummary, OmdbClient, OmdbError};
use reelist_core::config::AppConfig;
use reelist_core::models::{self, WatchedEntry, WatchedSummary};
use reelist_core::search::{
    SearchError, SearchLifecycle, FETCH_FAILED_MESSAGE, NOT_FOUND_MESSAGE,
};
use reelist_core::store::{JsonFileStore, WatchedStore};

use crate::keyboard::{self, Shortcut};
use crate::poster_cache::{self, PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;
use crate::window_state::WindowState;

const SEARCH_INPUT_ID: &str = "search";

/// Application state: one screen, one message enum.
pub struct Reelist {
    client: OmdbClient,
    store: Box<dyn WatchedStore + Send + Sync>,
    query: String,
    search: SearchLifecycle<MovieSummary>,
    detail: Option<DetailPane>,
    watched: Vec<WatchedEntry>,
    posters: PosterCache,
    colors: ColorScheme,
    window_state: WindowState,
}

/// State of the detail pane for the currently selected movie.
pub struct DetailPane {
    pub imdb_id: String,
    pub movie: Option<MovieDetail>,
    pub error: Option<String>,
    /// User's chosen rating; 0 = not rated yet.
    pub rating: u8,
}

impl DetailPane {
    fn new(imdb_id: String) -> Self {
        Self {
            imdb_id,
            movie: None,
            error: None,
            rating: 0,
        }
    }
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    SearchSubmitted,
    SearchCompleted {
        generation: u64,
        result: Result<Vec<MovieSummary>, SearchError>,
    },
    MovieSelected(String),
    DetailLoaded {
        imdb_id: String,
        result: Result<Box<MovieDetail>, String>,
    },
    CloseDetail,
    RatingChanged(u8),
    AddToWatched,
    DeleteWatched(String),
    Shortcut(Shortcut),
    PosterLoaded {
        imdb_id: String,
        result: Result<PathBuf, String>,
    },
    WindowEvent(window::Event),
}

impl Reelist {
    pub fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load config, using defaults: {e}");
            AppConfig::default()
        });

        let store_path = AppConfig::ensure_watched_path().unwrap_or_else(|e| {
            tracing::error!("cannot prepare data dir: {e}");
            AppConfig::watched_path()
        });
        let store: Box<dyn WatchedStore + Send + Sync> = Box::new(JsonFileStore::new(store_path));
        let watched = store.load().unwrap_or_else(|e| {
            tracing::error!("failed to load watched list: {e}");
            Vec::new()
        });

        let mut app = Self {
            client: OmdbClient::new(config.api.omdb_key.clone()),
            store,
            query: String::new(),
            search: SearchLifecycle::new(),
            detail: None,
            watched,
            posters: PosterCache::default(),
            colors: theme::resolve(config.appearance.mode),
            window_state: WindowState::load(),
        };

        let requests: Vec<(String, Option<String>)> = app
            .watched
            .iter()
            .map(|e| (e.imdb_id.clone(), e.poster.clone()))
            .collect();
        let posters = app.batch_request_posters(requests);
        (app, posters)
    }

    pub fn title(&self) -> String {
        match self.detail.as_ref().and_then(|pane| pane.movie.as_ref()) {
            Some(movie) => format!("Movie | {}", movie.title),
            None => String::from("Reelist"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                // A new search always closes whatever detail was open.
                self.detail = None;
                match self.search.begin(&self.query) {
                    Some(generation) => {
                        let client = self.client.clone();
                        let query = self.query.clone();
                        Task::perform(
                            async move {
                                client.search(&query).await.map_err(|e| match e {
                                    OmdbError::NotFound(_) => SearchError::NotFound,
                                    other => SearchError::Failed(other.to_string()),
                                })
                            },
                            move |result| Message::SearchCompleted { generation, result },
                        )
                    }
                    None => Task::none(),
                }
            }
            Message::SearchSubmitted => {
                // Enter inside the focused search field clears the query.
                self.update(Message::QueryChanged(String::new()))
            }
            Message::SearchCompleted { generation, result } => {
                self.search.resolve(generation, result);
                let requests: Vec<(String, Option<String>)> = self
                    .search
                    .results()
                    .iter()
                    .map(|m| (m.imdb_id.clone(), m.poster_url().map(str::to_owned)))
                    .collect();
                self.batch_request_posters(requests)
            }
            Message::MovieSelected(imdb_id) => {
                // Selecting the open movie again closes the pane.
                if self
                    .detail
                    .as_ref()
                    .is_some_and(|pane| pane.imdb_id == imdb_id)
                {
                    self.detail = None;
                    return Task::none();
                }
                self.detail = Some(DetailPane::new(imdb_id.clone()));
                let client = self.client.clone();
                let lookup_id = imdb_id.clone();
                Task::perform(
                    async move {
                        client
                            .lookup(&lookup_id)
                            .await
                            .map(Box::new)
                            .map_err(|e| detail_error_message(&e))
                    },
                    move |result| Message::DetailLoaded {
                        imdb_id: imdb_id.clone(),
                        result,
                    },
                )
            }
            Message::DetailLoaded { imdb_id, result } => {
                let Some(pane) = self.detail.as_mut() else {
                    return Task::none();
                };
                if pane.imdb_id != imdb_id {
                    // The user already moved on to another movie.
                    tracing::debug!("dropping detail for superseded selection {imdb_id}");
                    return Task::none();
                }
                match result {
                    Ok(movie) => {
                        let poster = movie.poster_url().map(str::to_owned);
                        pane.movie = Some(*movie);
                        self.request_poster(imdb_id, poster.as_deref())
                    }
                    Err(message) => {
                        pane.error = Some(message);
                        Task::none()
                    }
                }
            }
            Message::CloseDetail => {
                self.detail = None;
                Task::none()
            }
            Message::RatingChanged(rating) => {
                if let Some(pane) = self.detail.as_mut() {
                    pane.rating = rating;
                }
                Task::none()
            }
            Message::AddToWatched => {
                let Some(pane) = self.detail.as_ref() else {
                    return Task::none();
                };
                let Some(movie) = pane.movie.as_ref() else {
                    return Task::none();
                };
                if pane.rating == 0 || self.watched_rating(&pane.imdb_id).is_some() {
                    return Task::none();
                }
                let entry = watched_entry(movie, pane.rating);
                let request = (entry.imdb_id.clone(), entry.poster.clone());
                self.watched.push(entry);
                self.persist_watched();
                self.request_poster(request.0, request.1.as_deref())
            }
            Message::DeleteWatched(imdb_id) => {
                models::remove_entry(&mut self.watched, &imdb_id);
                self.persist_watched();
                Task::none()
            }
            Message::Shortcut(shortcut) => match shortcut {
                Shortcut::CloseDetail => {
                    self.detail = None;
                    Task::none()
                }
                Shortcut::FocusSearch => text_input::focus(text_input::Id::new(SEARCH_INPUT_ID)),
            },
            Message::PosterLoaded { imdb_id, result } => {
                match result {
                    Ok(path) => {
                        self.posters
                            .states
                            .insert(imdb_id, PosterState::Loaded(path));
                    }
                    Err(e) => {
                        tracing::warn!("poster download failed for {imdb_id}: {e}");
                        self.posters.states.insert(imdb_id, PosterState::Failed);
                    }
                }
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::keyboard_subscription(),
            iced::event::listen_with(|event, _status, _id| match event {
                iced::Event::Window(event) => Some(Message::WindowEvent(event)),
                _ => None,
            }),
        ])
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.colors)
    }

    // ── Helpers ───────────────────────────────────────────────────

    fn persist_watched(&self) {
        if let Err(e) = self.store.save(&self.watched) {
            tracing::warn!("failed to save watched list: {e}");
        }
    }

    /// Recorded rating for a movie already on the watched list.
    fn watched_rating(&self, imdb_id: &str) -> Option<u8> {
        self.watched
            .iter()
            .find(|e| e.imdb_id == imdb_id)
            .map(|e| e.user_rating)
    }

    fn batch_request_posters(&mut self, items: Vec<(String, Option<String>)>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = items
            .into_iter()
            .map(|(imdb_id, url)| self.request_poster(imdb_id, url.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request a poster download if this id hasn't been requested yet.
    fn request_poster(&mut self, imdb_id: String, url: Option<&str>) -> Task<Message> {
        let Some(url) = url else {
            // No poster URL — mark failed so the placeholder renders.
            self.posters
                .states
                .entry(imdb_id)
                .or_insert(PosterState::Failed);
            return Task::none();
        };
        if self.posters.states.contains_key(&imdb_id) {
            return Task::none();
        }
        // Check disk cache first.
        let path = poster_cache::poster_path(&imdb_id);
        if path.exists() {
            self.posters
                .states
                .insert(imdb_id, PosterState::Loaded(path));
            return Task::none();
        }
        self.posters
            .states
            .insert(imdb_id.clone(), PosterState::Loading);
        let url = url.to_string();
        let key = imdb_id.clone();
        Task::perform(
            async move { poster_cache::fetch_poster(key, url).await },
            move |result| Message::PosterLoaded {
                imdb_id: imdb_id.clone(),
                result,
            },
        )
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.colors;

        let panes = row![
            container(self.results_pane(cs))
                .style(theme::card(cs))
                .width(Length::FillPortion(1))
                .height(Length::Fill),
            container(self.side_pane(cs))
                .style(theme::card(cs))
                .width(Length::FillPortion(1))
                .height(Length::Fill),
        ]
        .spacing(style::SPACE_LG);

        column![
            self.nav_bar(cs),
            container(panes)
                .padding([style::SPACE_LG, style::SPACE_XL])
                .height(Length::Fill),
        ]
        .into()
    }

    fn nav_bar<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        let logo = row![
            text("\u{1F37F}").size(style::TEXT_XL),
            text("Reelist")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center);

        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let search_input = text_input("Search movies...", &self.query)
            .id(text_input::Id::new(SEARCH_INPUT_ID))
            .on_input(Message::QueryChanged)
            .on_submit(Message::SearchSubmitted)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, search_input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.query.is_empty() {
            search_row = search_row.push(
                button(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .padding(style::SPACE_XXS)
                .on_press(Message::QueryChanged(String::new()))
                .style(theme::icon_button(cs)),
            );
        }

        let search_box = container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::FillPortion(2));

        let count = container(
            text(format!("Found {} results", self.search.results().len()))
                .size(style::TEXT_SM)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .width(Length::FillPortion(1))
        .align_x(iced::alignment::Horizontal::Right);

        container(
            row![container(logo).width(Length::FillPortion(1)), search_box, count]
                .spacing(style::SPACE_XL)
                .align_y(Alignment::Center),
        )
        .style(theme::nav_bar_bg(cs))
        .padding([style::SPACE_SM, style::SPACE_XL])
        .width(Length::Fill)
        .into()
    }

    fn results_pane<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        if self.search.is_loading() {
            return centered("Loading...", cs.on_surface_variant);
        }
        if !self.search.error().is_empty() {
            return centered(self.search.error(), cs.error);
        }
        if self.search.results().is_empty() {
            return centered("Search for a movie to get started.", cs.outline);
        }

        let selected = self.detail.as_ref().map(|pane| pane.imdb_id.as_str());
        let items: Vec<Element<'a, Message>> = self
            .search
            .results()
            .iter()
            .map(|movie| widgets::movie_list_item(cs, movie, selected, &self.posters))
            .collect();

        widgets::styled_scrollable(
            column(items)
                .spacing(style::SPACE_XXS)
                .padding([style::SPACE_XS, style::SPACE_SM]),
        )
        .height(Length::Fill)
        .into()
    }

    fn side_pane<'a>(&'a self, cs: &'a ColorScheme) -> Element<'a, Message> {
        if let Some(pane) = &self.detail {
            return widgets::detail_panel(cs, pane, self.watched_rating(&pane.imdb_id), &self.posters);
        }

        let summary = widgets::summary_card(cs, WatchedSummary::of(&self.watched));

        let list: Element<'a, Message> = if self.watched.is_empty() {
            centered("Rate a movie to start your list.", cs.outline)
        } else {
            let items: Vec<Element<'a, Message>> = self
                .watched
                .iter()
                .map(|entry| widgets::watched_list_item(cs, entry, &self.posters))
                .collect();
            widgets::styled_scrollable(
                column(items)
                    .spacing(style::SPACE_XXS)
                    .padding([style::SPACE_XS, style::SPACE_SM]),
            )
            .height(Length::Fill)
            .into()
        };

        column![summary, list]
            .spacing(style::SPACE_SM)
            .padding(style::SPACE_SM)
            .height(Length::Fill)
            .into()
    }
}

/// Centered single-line note, used for loading/error/empty states.
fn centered(note: &str, color: iced::Color) -> Element<'_, Message> {
    container(
        text(note)
            .size(style::TEXT_SM)
            .color(color)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// Map an OMDb lookup failure onto the user-facing detail message.
fn detail_error_message(error: &OmdbError) -> String {
    match error {
        OmdbError::NotFound(_) => NOT_FOUND_MESSAGE.into(),
        other => {
            tracing::warn!("detail lookup failed: {other}");
            FETCH_FAILED_MESSAGE.into()
        }
    }
}

/// Build a watched entry out of a fetched detail record plus the rating.
fn watched_entry(movie: &MovieDetail, user_rating: u8) -> WatchedEntry {
    WatchedEntry {
        imdb_id: movie.imdb_id.clone(),
        title: movie.title.clone(),
        year: movie.year.clone(),
        poster: movie.poster_url().map(str::to_owned),
        imdb_rating: movie.rating().unwrap_or(0.0),
        runtime: movie.runtime_minutes().unwrap_or(0),
        user_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt0095016".into(),
            title: "Die Hard".into(),
            year: "1988".into(),
            released: "20 Jul 1988".into(),
            runtime: "132 min".into(),
            genre: "Action, Thriller".into(),
            plot: "An NYPD officer tries to save his wife and several others.".into(),
            actors: "Bruce Willis, Alan Rickman".into(),
            director: "John McTiernan".into(),
            poster: "https://example.com/diehard.jpg".into(),
            imdb_rating: "8.2".into(),
        }
    }

    #[test]
    fn watched_entry_parses_numeric_fields_from_detail_text() {
        let entry = watched_entry(&detail(), 8);
        assert_eq!(entry.imdb_id, "tt0095016");
        assert_eq!(entry.runtime, 132);
        assert_eq!(entry.user_rating, 8);
        assert!((entry.imdb_rating - 8.2).abs() < f32::EPSILON);
        assert_eq!(
            entry.poster.as_deref(),
            Some("https://example.com/diehard.jpg")
        );
    }

    #[test]
    fn watched_entry_tolerates_missing_numbers() {
        let mut movie = detail();
        movie.runtime = "N/A".into();
        movie.imdb_rating = "N/A".into();
        movie.poster = "N/A".into();

        let entry = watched_entry(&movie, 5);
        assert_eq!(entry.runtime, 0);
        assert_eq!(entry.imdb_rating, 0.0);
        assert_eq!(entry.poster, None);
    }
}
