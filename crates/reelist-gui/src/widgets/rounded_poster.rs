use iced::widget::container;
use iced::{ContentFit, Element, Length};

use crate::poster_cache::{PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render a poster image with rounded corners, or a styled placeholder.
///
/// Uses `ContentFit::Cover` so the image fills the frame completely,
/// cropping overflow rather than leaving gaps. The container keeps the
/// placeholder background so a failed or pending image still shows a
/// visible frame.
pub fn rounded_poster<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    imdb_id: &str,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(PosterState::Loaded(path)) = posters.get(imdb_id) {
        container(
            iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    } else {
        let icon_size = if width <= style::THUMB_WIDTH {
            style::TEXT_BASE
        } else {
            style::TEXT_3XL
        };
        container(
            lucide_icons::iced::icon_film()
                .size(icon_size)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    }
}
