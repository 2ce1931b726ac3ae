use dioxus::prelude::*;
use gloo_timers::future::sleep;
use tracing::debug;

use crate::config::PageConfig;

/// Loading overlay lifecycle. Phases only move forward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    #[default]
    Visible,
    Fading,
    Removed,
}

impl LoaderPhase {
    pub fn advance(self) -> Self {
        match self {
            LoaderPhase::Visible => LoaderPhase::Fading,
            LoaderPhase::Fading | LoaderPhase::Removed => LoaderPhase::Removed,
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            LoaderPhase::Visible => "1",
            LoaderPhase::Fading | LoaderPhase::Removed => "0",
        }
    }

    pub fn is_removed(self) -> bool {
        self == LoaderPhase::Removed
    }
}

/// Fade the overlay after the configured delay, then drop it.
pub fn use_loader() -> Signal<LoaderPhase> {
    let config = use_context::<PageConfig>();
    let mut phase = use_signal(LoaderPhase::default);

    use_future(move || {
        let delay = config.loader_delay();
        let fade = config.loader_fade();
        async move {
            sleep(delay).await;
            phase.set(phase().advance());
            sleep(fade).await;
            phase.set(phase().advance());
            debug!("Loading overlay removed");
        }
    });

    phase
}
