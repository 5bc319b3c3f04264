use iced::widget::{button, row, text};
use iced::{Alignment, Element};

use crate::style;
use crate::theme::{self, ColorScheme};

/// Ten clickable stars, filled up to the current rating.
///
/// Generic over the caller's message type via a closure, so it stays
/// reusable outside the detail pane.
pub fn star_rating<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    rating: u8,
    on_rate: impl Fn(u8) -> Message + 'a,
) -> Element<'a, Message> {
    let mut stars = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);

    for value in 1..=10u8 {
        let filled = value <= rating;
        let glyph = if filled { "\u{2605}" } else { "\u{2606}" };
        let color = if filled { cs.tertiary } else { cs.outline };

        stars = stars.push(
            button(text(glyph).size(style::TEXT_XL).color(color))
                .padding(0)
                .on_press(on_rate(value))
                .style(theme::icon_button(cs)),
        );
    }

    stars.into()
}
