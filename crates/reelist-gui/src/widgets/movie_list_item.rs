use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length};

use reelist_api::omdb::MovieSummary;

use crate::app::Message;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// A single search result row: poster thumb, title, release year.
pub fn movie_list_item<'a>(
    cs: &'a ColorScheme,
    movie: &'a MovieSummary,
    selected: Option<&str>,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    let is_selected = selected == Some(movie.imdb_id.as_str());

    let thumb = widgets::rounded_poster(
        cs,
        posters,
        &movie.imdb_id,
        style::THUMB_WIDTH,
        style::THUMB_HEIGHT,
        style::RADIUS_SM,
    );

    let year_line = row![
        lucide_icons::iced::icon_calendar()
            .size(style::TEXT_XS)
            .color(cs.outline),
        text(movie.year.as_str())
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS)
    .align_y(Alignment::Center);

    let info = column![
        text(movie.title.as_str())
            .size(style::TEXT_BASE)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_NORMAL),
        year_line,
    ]
    .spacing(style::SPACE_XXS);

    button(
        row![thumb, info.width(Length::Fill)]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([style::SPACE_XS, style::SPACE_MD])
    .on_press(Message::MovieSelected(movie.imdb_id.clone()))
    .style(theme::list_item(is_selected, cs))
    .into()
}
