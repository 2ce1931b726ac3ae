use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use tracing::debug;

use crate::components::effects::flash_section;
use crate::error::{PortalError, PortalResult};

/// Document offset to scroll to so the target sits just below the fixed nav bar.
pub fn scroll_target(target_top: f64, page_offset: f64, nav_height: f64) -> f64 {
    target_top + page_offset - nav_height
}

fn window() -> PortalResult<Window> {
    web_sys::window().ok_or_else(|| PortalError::ElementNotFound("window".to_string()))
}

fn smooth_scroll(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll to an in-page anchor such as `#services`.
///
/// A missing target is not an error; the click simply does nothing.
pub fn smooth_scroll_to(href: &str, highlight_anchor: &str) -> PortalResult<()> {
    let window = window()?;
    let document = window
        .document()
        .ok_or_else(|| PortalError::ElementNotFound("document".to_string()))?;

    let Some(target) = document.query_selector(href).ok().flatten() else {
        debug!("No scroll target for '{}'", href);
        return Ok(());
    };

    let nav_height = document
        .query_selector("nav")
        .ok()
        .flatten()
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| f64::from(nav.offset_height()))
        .ok_or_else(|| PortalError::ElementNotFound("nav".to_string()))?;

    let page_offset = window.scroll_y().unwrap_or(0.0);
    let top = scroll_target(target.get_bounding_client_rect().top(), page_offset, nav_height);
    smooth_scroll(&window, top);

    if href == highlight_anchor {
        flash_section(href)?;
    }
    Ok(())
}

pub fn scroll_to_top() -> PortalResult<()> {
    smooth_scroll(&window()?, 0.0);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_accounts_for_nav_height() {
        assert_eq!(scroll_target(300.0, 1200.0, 80.0), 1420.0);
    }

    #[test]
    fn target_above_viewport_scrolls_up() {
        assert_eq!(scroll_target(-400.0, 900.0, 64.0), 436.0);
    }
}
