mod app;
mod keyboard;
mod poster_cache;
mod style;
mod theme;
mod widgets;
mod window_state;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("reelist_gui=debug,reelist_core=debug,reelist_api=debug")
        .init();

    let ws = window_state::WindowState::load();

    let mut win = iced::window::Settings {
        size: ws.size(),
        ..Default::default()
    };

    if let Some(pos) = ws.position() {
        win.position = iced::window::Position::Specific(pos);
    } else {
        win.position = iced::window::Position::Centered;
    }

    iced::application(app::Reelist::new, app::Reelist::update, app::Reelist::view)
        .title(app::Reelist::title)
        .subscription(app::Reelist::subscription)
        .theme(app::Reelist::theme)
        .font(lucide_icons::LUCIDE_FONT_BYTES)
        .window(win)
        .run()
}
