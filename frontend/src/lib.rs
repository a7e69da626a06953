use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, Window};

pub mod animations;
pub mod config;
pub mod dom;
pub mod error;
pub mod throttle;
pub mod components {
    pub mod contact_form;
    pub mod header;
    pub mod nav;
    pub mod notification;
}

use components::{contact_form, header, nav};
use error::SetupError;

/// Wires up every page behaviour once the document has been parsed.
pub fn start() -> Result<(), SetupError> {
    let window = dom::window()?;
    let document = window.document().ok_or(SetupError::NoDocument)?;

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let on_ready = Closure::once(move || init_page(&window, &doc));
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            on_ready.as_ref().unchecked_ref(),
        )?;
        on_ready.forget();
    } else {
        init_page(&window, &document);
    }
    Ok(())
}

fn report(feature: &str, result: Result<(), SetupError>) {
    if let Err(err) = result {
        warn!("Skipping {}: {}", feature, err);
    }
}

/// Installs each feature on its own; a missing element only disables that feature.
pub fn init_page(window: &Window, document: &Document) {
    let header_bar = dom::html_by_id(document, "header");
    let nav_links = dom::query_all(document, ".nav-link");

    report(
        "header styling",
        header_bar
            .clone()
            .ok_or(SetupError::MissingElement("#header"))
            .and_then(|h| header::install(window, h)),
    );

    report(
        "mobile menu",
        match (
            dom::html_by_id(document, "nav-toggle"),
            dom::html_by_id(document, "nav-menu"),
        ) {
            (Some(toggle), Some(menu)) => {
                nav::install_menu(document, toggle, menu, &nav_links).map(|_| ())
            }
            (None, _) => Err(SetupError::MissingElement("#nav-toggle")),
            (_, None) => Err(SetupError::MissingElement("#nav-menu")),
        },
    );

    report(
        "smooth scrolling",
        nav::install_smooth_scroll(window, document, header_bar.clone(), &nav_links),
    );
    report(
        "scroll-spy",
        nav::install_scroll_spy(window, document, header_bar, nav_links),
    );

    report(
        "reveal animation",
        animations::install_reveal(document).map(|_| ()),
    );
    report(
        "stagger animation",
        animations::install_stagger(document).map(|_| ()),
    );

    report(
        "contact form",
        document
            .get_element_by_id("contact-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .ok_or(SetupError::MissingElement("#contact-form"))
            .and_then(|form| contact_form::install(document, form)),
    );

    info!("Page behaviour ready");
}
