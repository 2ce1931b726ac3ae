use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::warn;

const SCROLL_LISTENER: &str = r#"
    const report = () => {
        const offset = Math.max(document.body.scrollTop, document.documentElement.scrollTop);
        dioxus.send(offset);
    };
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

/// Whether a page scroll offset should reveal the scroll-to-top button.
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Tracks whether the page is scrolled beyond `threshold` pixels.
///
/// The signal only changes when the threshold is crossed, not on every
/// scroll event.
pub fn use_scrolled_past(threshold: f64) -> Signal<bool> {
    let mut scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut listener = eval(SCROLL_LISTENER);
        loop {
            match listener.recv::<f64>().await {
                Ok(offset) => {
                    let past = past_threshold(offset, threshold);
                    if past != *scrolled.peek() {
                        scrolled.set(past);
                    }
                }
                Err(e) => {
                    warn!("Scroll listener stopped: {:?}", e);
                    break;
                }
            }
        }
    });

    scrolled
}
