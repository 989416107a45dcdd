use std::sync::Arc;

use iced::{Font, Settings, Theme};

use crate::state::State;
use crate::theme::StudioTheme;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the landing page window until it is closed.
pub fn run(config: AppConfig) -> iced::Result {
    let window_size = config.window_size();
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Vibe Studio")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: window_size,
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("vibe-studio".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    StudioTheme::theme()
}
