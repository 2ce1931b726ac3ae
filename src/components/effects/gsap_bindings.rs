//! Bindings to the GSAP timelines defined in `src/page_effects.js`.

use wasm_bindgen::prelude::*;

use crate::error::{PortalError, PortalResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = "pageEffectsReady")]
    fn page_effects_ready_js() -> Result<bool, JsValue>;

    #[wasm_bindgen(catch, js_name = "initHeroAnimations")]
    fn init_hero_animations() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = "initFeaturesAnimations")]
    fn init_features_animations() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = "initScrollAnimations")]
    fn init_scroll_animations() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_name = "flashSection")]
    fn flash_section_js(selector: &str) -> Result<(), JsValue>;
}

fn effect_error(err: JsValue) -> PortalError {
    PortalError::Effects(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// True once both GSAP and ScrollTrigger have loaded.
pub fn page_effects_ready() -> PortalResult<bool> {
    page_effects_ready_js().map_err(effect_error)
}

/// Start the hero timeline, feature card triggers and scroll-driven effects.
pub fn init_page_effects() -> PortalResult<()> {
    init_hero_animations().map_err(effect_error)?;
    init_features_animations().map_err(effect_error)?;
    init_scroll_animations().map_err(effect_error)?;
    Ok(())
}

pub fn flash_section(selector: &str) -> PortalResult<()> {
    flash_section_js(selector).map_err(effect_error)
}
