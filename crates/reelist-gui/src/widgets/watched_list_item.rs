use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use reelist_core::models::WatchedEntry;

use crate::app::Message;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// A watched-list row: poster thumb, title, ratings, runtime, delete.
pub fn watched_list_item<'a>(
    cs: &'a ColorScheme,
    entry: &'a WatchedEntry,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    let thumb = widgets::rounded_poster(
        cs,
        posters,
        &entry.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let meta = row![
        text(format!("\u{2605} {:.1}", entry.imdb_rating))
            .size(style::TEXT_XS)
            .color(cs.tertiary)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(format!("\u{2606} {}", entry.user_rating))
            .size(style::TEXT_XS)
            .color(cs.primary)
            .line_height(style::LINE_HEIGHT_LOOSE),
        row![
            lucide_icons::iced::icon_clock()
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant),
            text(format!("{} min", entry.runtime))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center),
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center);

    let info = column![
        text(entry.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        meta,
    ]
    .spacing(style::SPACE_XXS);

    let delete = button(
        lucide_icons::iced::icon_x()
            .size(style::TEXT_SM)
            .color(cs.error),
    )
    .padding(style::SPACE_XS)
    .on_press(Message::DeleteWatched(entry.imdb_id.clone()))
    .style(theme::icon_button(cs));

    row![thumb, info.width(Length::Fill), delete]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .padding([style::SPACE_XS, style::SPACE_MD])
        .into()
}
