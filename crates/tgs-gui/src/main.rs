//! Typegen Studio - Desktop GUI Application
//!
//! A desktop playground for turning JSON samples into type definitions
//! for Rust, TypeScript, Python, and Go.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use tgs_gui::app::App;

/// Application entry point.
///
/// Initializes logging, then runs the Iced application with default
/// window settings.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Typegen Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
