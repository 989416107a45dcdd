use std::sync::Arc;
use std::time::Instant;

use iced::Task;
use vibe_core::LandingConfig;

use crate::messages::Message;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub landing: Arc<LandingConfig>,
}

impl AppConfig {
    pub fn new(landing: LandingConfig) -> Self {
        Self {
            landing: Arc::new(landing),
        }
    }

    pub fn window_size(&self) -> iced::Size {
        iced::Size::new(self.landing.window_width, self.landing.window_height)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(LandingConfig::default())
    }
}

/// Boot logic shared by the runtime application and tests.
pub fn base_state(config: &AppConfig) -> State {
    State::new(Arc::clone(&config.landing), Instant::now())
}

pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = base_state(config);
    log::info!(
        "Landing page mounted with {} slides, auto-advance every {:?}",
        state.catalog.len(),
        state.config.advance_interval
    );
    (state, Task::none())
}
