use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::app::{DetailPane, Message};
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// The movie detail pane: header with poster and overview, then the rating
/// section and the longer credits text.
///
/// While the lookup is in flight only a loading indicator renders. If the
/// movie is already on the watched list, the recorded rating is shown and
/// the rating control is suppressed.
pub fn detail_panel<'a>(
    cs: &'a ColorScheme,
    pane: &'a DetailPane,
    watched_rating: Option<u8>,
    posters: &'a PosterCache,
) -> Element<'a, Message> {
    if let Some(message) = &pane.error {
        return centered_note(text(message.as_str()).color(cs.error));
    }

    let Some(movie) = &pane.movie else {
        return centered_note(text("Loading...").color(cs.on_surface_variant));
    };

    let back = button(
        lucide_icons::iced::icon_arrow_left()
            .size(style::TEXT_LG)
            .center(),
    )
    .padding(style::SPACE_XS)
    .on_press(Message::CloseDetail)
    .style(theme::icon_button(cs));

    let poster = widgets::rounded_poster(
        cs,
        posters,
        &movie.imdb_id,
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    let overview = column![
        text(movie.title.as_str())
            .size(style::TEXT_XL)
            .font(style::FONT_HEADING)
            .line_height(style::LINE_HEIGHT_TIGHT),
        text(movie.year.as_str())
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(format!("{} \u{00B7} {}", movie.released, movie.runtime))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(movie.genre.as_str())
            .size(style::TEXT_SM)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(format!("\u{2605} {} IMDb rating", movie.imdb_rating))
            .size(style::TEXT_SM)
            .color(cs.tertiary)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XS);

    let header = row![back, poster, overview]
        .spacing(style::SPACE_LG)
        .align_y(Alignment::Start);

    let rating_section: Element<'_, Message> = match watched_rating {
        Some(recorded) => text(format!("You rated this movie {recorded} \u{2605}"))
            .size(style::TEXT_BASE)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .into(),
        None => {
            let mut section = column![widgets::star_rating(cs, pane.rating, Message::RatingChanged)]
                .spacing(style::SPACE_MD);
            if pane.rating > 0 {
                section = section.push(
                    button(
                        text("+ Add to list")
                            .size(style::TEXT_SM)
                            .line_height(style::LINE_HEIGHT_NORMAL),
                    )
                    .padding([style::SPACE_SM, style::SPACE_XL])
                    .on_press(Message::AddToWatched)
                    .style(theme::primary_button(cs)),
                );
            }
            section.into()
        }
    };

    let rating_card = container(rating_section)
        .style(theme::card(cs))
        .padding(style::SPACE_LG)
        .width(Length::Fill);

    let detail = column![
        header,
        rating_card,
        text(movie.plot.as_str())
            .size(style::TEXT_SM)
            .font(style::FONT_ITALIC)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(format!("Starring {}", movie.actors))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
        text(format!("Directed by {}", movie.director))
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL),
    ]
    .spacing(style::SPACE_LG)
    .padding(style::SPACE_LG);

    widgets::styled_scrollable(detail).height(Length::Fill).into()
}

fn centered_note<'a>(note: iced::widget::Text<'a>) -> Element<'a, Message> {
    container(
        note.size(style::TEXT_SM)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}
