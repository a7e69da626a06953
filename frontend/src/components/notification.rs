//! Toast notifications pinned to the bottom-right corner.
//!
//! At most one toast exists at a time: showing a new one removes the previous
//! node, whose pending timers then find it detached and do nothing.

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{
    COLOR_ERROR, COLOR_INFO, COLOR_SUCCESS, NOTIFICATION_DURATION_MS, NOTIFICATION_EXIT_MS,
    NOTIFICATION_STYLES_ID,
};
use crate::dom;
use crate::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    /// Unknown names fall back to `Info`.
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Severity::Info => COLOR_INFO,
            Severity::Success => COLOR_SUCCESS,
            Severity::Error => COLOR_ERROR,
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }
}

const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("bottom", "24px"),
    ("right", "24px"),
    ("padding", "16px 24px"),
    ("border-radius", "12px"),
    ("box-shadow", "0 10px 40px rgba(0, 0, 0, 0.15)"),
    ("display", "flex"),
    ("align-items", "center"),
    ("gap", "12px"),
    ("z-index", "9999"),
    ("animation", "slideIn 0.3s ease"),
    ("font-size", "0.95rem"),
    ("font-weight", "500"),
    ("max-width", "400px"),
    ("color", "white"),
];

const CLOSE_STYLE: &[(&str, &str)] = &[
    ("background", "none"),
    ("border", "none"),
    ("color", "inherit"),
    ("font-size", "1.25rem"),
    ("cursor", "pointer"),
    ("opacity", "0.8"),
    ("padding", "0"),
    ("line-height", "1"),
];

const EXIT_ANIMATION: &str = "slideOut 0.3s ease forwards";

const KEYFRAMES: &str = r#"
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }
    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
"#;

fn apply_style(el: &HtmlElement, rules: &[(&str, &str)]) -> Result<(), SetupError> {
    let style = el.style();
    for (property, value) in rules {
        style.set_property(property, value)?;
    }
    Ok(())
}

fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, SetupError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| SetupError::Dom(format!("<{}> is not an HTML element", tag)))
}

/// Adds the slide keyframes to `<head>` unless an earlier toast already did.
fn ensure_keyframes(document: &Document) -> Result<(), SetupError> {
    if document.get_element_by_id(NOTIFICATION_STYLES_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(SetupError::MissingElement("head"))?;
    let style = document.create_element("style")?;
    style.set_id(NOTIFICATION_STYLES_ID);
    style.set_text_content(Some(KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

/// Plays the exit animation, then detaches the toast. No-op once it is gone.
fn dismiss(toast: &HtmlElement) {
    if toast.parent_node().is_none() {
        return;
    }
    let _ = toast.style().set_property("animation", EXIT_ANIMATION);
    let toast = toast.clone();
    Timeout::new(NOTIFICATION_EXIT_MS, move || toast.remove()).forget();
}

fn build(document: &Document, message: &str, severity: Severity) -> Result<HtmlElement, SetupError> {
    let toast = create_html(document, "div")?;
    toast.set_class_name(&severity.class_name());

    let text = document.create_element("span")?;
    text.set_class_name("notification-message");
    text.set_text_content(Some(message));

    let close = create_html(document, "button")?;
    close.set_class_name("notification-close");
    close.set_text_content(Some("\u{00d7}"));

    toast.append_child(&text)?;
    toast.append_child(&close)?;

    apply_style(&toast, TOAST_STYLE)?;
    toast.style().set_property("background", severity.background())?;
    apply_style(&close, CLOSE_STYLE)?;

    let target = toast.clone();
    dom::listen(&close, "click", move |_| dismiss(&target))?;

    Ok(toast)
}

/// Shows `message` as the only toast on the page and schedules its dismissal.
pub fn show_notification(
    document: &Document,
    message: &str,
    severity: Severity,
) -> Result<HtmlElement, SetupError> {
    if let Some(existing) = current_notification(document) {
        existing.remove();
    }

    let toast = build(document, message, severity)?;
    let body = document.body().ok_or(SetupError::MissingElement("body"))?;
    body.append_child(&toast)?;
    ensure_keyframes(document)?;

    let pending = toast.clone();
    Timeout::new(NOTIFICATION_DURATION_MS, move || dismiss(&pending)).forget();

    debug!("Notification ({}): {}", severity.as_str(), message);
    Ok(toast)
}

pub fn current_notification(document: &Document) -> Option<Element> {
    document.query_selector(".notification").ok().flatten()
}
