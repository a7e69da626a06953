use log::{info, warn};
use web_sys::{HtmlElement, Window};

use crate::config::{CLASS_SCROLLED, SCROLLED_THRESHOLD_PX, SCROLL_THROTTLE_MS};
use crate::dom;
use crate::error::SetupError;
use crate::throttle::{browser_now, throttle};

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

/// Sets or clears the `scrolled` flag on the header for the given offset.
pub fn apply_scroll_state(header: &HtmlElement, offset: f64) -> Result<(), SetupError> {
    let classes = header.class_list();
    if is_scrolled(offset) {
        classes.add_1(CLASS_SCROLLED)?;
    } else {
        classes.remove_1(CLASS_SCROLLED)?;
    }
    Ok(())
}

/// Styles the header once for the current position, then on every (throttled) scroll.
pub fn install(window: &Window, header: HtmlElement) -> Result<(), SetupError> {
    apply_scroll_state(&header, dom::scroll_y(window))?;

    let win = window.clone();
    let mut on_scroll = throttle(SCROLL_THROTTLE_MS, browser_now, move || {
        if let Err(err) = apply_scroll_state(&header, dom::scroll_y(&win)) {
            warn!("Header scroll styling failed: {}", err);
        }
    });
    dom::listen(window, "scroll", move |_| on_scroll())?;

    info!("Header scroll styling installed");
    Ok(())
}
