use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

use reelist_core::models::WatchedSummary;

use crate::app::Message;
use crate::style;
use crate::theme::{self, ColorScheme};

/// Aggregate card shown above the watched list.
pub fn summary_card<'a>(cs: &'a ColorScheme, summary: WatchedSummary) -> Element<'a, Message> {
    let stat = |label: Element<'a, Message>| container(label).padding([0.0, style::SPACE_XS]);

    let figures = row![
        stat(
            text(format!(
                "{} {}",
                summary.count,
                if summary.count == 1 { "movie" } else { "movies" }
            ))
            .size(style::TEXT_SM)
            .line_height(style::LINE_HEIGHT_LOOSE)
            .into()
        ),
        stat(
            text(format!("\u{2605} {:.2}", summary.avg_imdb_rating))
                .size(style::TEXT_SM)
                .color(cs.tertiary)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .into()
        ),
        stat(
            text(format!("\u{2606} {:.2}", summary.avg_user_rating))
                .size(style::TEXT_SM)
                .color(cs.primary)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .into()
        ),
        stat(
            row![
                lucide_icons::iced::icon_clock()
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant),
                text(format!("{:.0} min", summary.avg_runtime))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center)
            .into()
        ),
    ]
    .spacing(style::SPACE_LG)
    .align_y(Alignment::Center);

    container(
        column![
            text("Movies you watched")
                .size(style::TEXT_LG)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
            figures,
        ]
        .spacing(style::SPACE_SM),
    )
    .style(theme::card(cs))
    .padding(style::SPACE_LG)
    .width(Length::Fill)
    .into()
}
