use tracing::{info, warn};

use health_portal::config::PageConfig;
use health_portal::App;

fn main() {
    let (config, config_error) = match PageConfig::embedded() {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };

    if let Err(e) = dioxus::logger::init(config.log_level()) {
        eprintln!("Failed to initialise logging: {}", e);
    }
    if let Some(e) = config_error {
        warn!("Falling back to default page configuration: {}", e);
    }

    info!("Starting health portal");
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}
