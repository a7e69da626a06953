//! Reveal-on-scroll and staggered card delays.

use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{
    CLASS_ACTIVE, CLASS_REVEAL, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD,
    STAGGER_SELECTORS,
};
use crate::dom;
use crate::error::SetupError;

/// Per-element reveal lifecycle. Once revealed, an element stays revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    fn of(el: &Element) -> Self {
        if el.class_list().contains(CLASS_ACTIVE) {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    /// Feeds one intersection observation; true only on the hidden -> revealed edge.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        match (*self, intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

fn on_entries(entries: Array, observer: IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        let mut state = RevealState::of(&target);
        if state.on_intersection(entry.is_intersecting()) {
            let _ = target.class_list().add_1(CLASS_ACTIVE);
            observer.unobserve(&target);
            debug!("Revealed <{}>", target.tag_name().to_lowercase());
        }
    }
}

/// Marks every content block as `reveal` and activates each one the first time it scrolls in.
pub fn install_reveal(document: &Document) -> Result<usize, SetupError> {
    let elements = dom::query_all(document, REVEAL_SELECTORS);
    for el in &elements {
        el.class_list().add_1(CLASS_REVEAL)?;
    }

    let options = IntersectionObserverInit::new();
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(on_entries);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }

    info!("Reveal animation watching {} elements", elements.len());
    Ok(elements.len())
}

/// `transition-delay` for the card at `index`, in tenths of a second.
pub fn stagger_delay(index: usize) -> String {
    format!("{}s", index as f64 / 10.0)
}

pub fn install_stagger(document: &Document) -> Result<usize, SetupError> {
    let cards: Vec<HtmlElement> = dom::query_all(document, STAGGER_SELECTORS)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    for (index, card) in cards.iter().enumerate() {
        card.style()
            .set_property("transition-delay", &stagger_delay(index))?;
    }
    Ok(cards.len())
}
