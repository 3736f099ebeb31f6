//! Tomato - a single-screen Pomodoro countdown timer
//! Built with iced, with an audible alert when the countdown completes

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod audio;
mod ui;
mod utils;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window(iced::window::Settings {
            size: iced::Size::new(420.0, 320.0),
            resizable: false,
            ..Default::default()
        })
        .antialiasing(true)
        .run()
}
