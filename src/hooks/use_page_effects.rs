use std::time::Duration;

use dioxus::prelude::*;
use gloo_timers::future::sleep;
use tracing::{debug, warn};

use crate::components::effects::{init_page_effects, page_effects_ready};
use crate::config::PageConfig;

/// What to do on each poll while the GSAP scripts are loading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectsReadiness {
    Start,
    Wait,
    GiveUp,
}

impl EffectsReadiness {
    /// A late load still wins on the poll that would have timed out.
    pub fn check(loaded: bool, elapsed: Duration, timeout: Duration) -> Self {
        if loaded {
            EffectsReadiness::Start
        } else if elapsed >= timeout {
            EffectsReadiness::GiveUp
        } else {
            EffectsReadiness::Wait
        }
    }
}

/// Start the page animations once the CDN scripts have loaded.
pub fn use_page_effects() {
    let config = use_context::<PageConfig>();

    use_future(move || {
        let poll = config.effects_poll();
        let timeout = config.effects_timeout();
        async move {
            let mut elapsed = Duration::ZERO;
            loop {
                let loaded = match page_effects_ready() {
                    Ok(loaded) => loaded,
                    Err(e) => {
                        warn!("Page animations unavailable: {}", e);
                        return;
                    }
                };
                match EffectsReadiness::check(loaded, elapsed, timeout) {
                    EffectsReadiness::Start => break,
                    EffectsReadiness::GiveUp => {
                        warn!("GSAP not loaded after {:?}, animations disabled", timeout);
                        return;
                    }
                    EffectsReadiness::Wait => {
                        sleep(poll).await;
                        elapsed += poll;
                    }
                }
            }

            match init_page_effects() {
                Ok(()) => debug!("Page animations started after {:?}", elapsed),
                Err(e) => warn!("Page animations unavailable: {}", e),
            }
        }
    });
}
