pub mod detail_panel;
pub mod movie_list_item;
pub mod rounded_poster;
pub mod star_rating;
pub mod summary_card;
pub mod watched_list_item;

pub use detail_panel::detail_panel;
pub use movie_list_item::movie_list_item;
pub use rounded_poster::rounded_poster;
pub use star_rating::star_rating;
pub use summary_card::summary_card;
pub use watched_list_item::watched_list_item;

use iced::widget::scrollable;
use iced::Element;

/// A scrollable with consistent direction and rail sizing across the app.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content).direction(scrollable::Direction::Vertical(
        scrollable::Scrollbar::new()
            .width(6)
            .scroller_width(4)
            .margin(2),
    ))
}
