//! Navigation: mobile menu toggle, in-page smooth scrolling and scroll-spy.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{CLASS_ACTIVE, SCROLL_THROTTLE_MS, SPY_OFFSET_PX};
use crate::dom;
use crate::error::SetupError;
use crate::throttle::{browser_now, throttle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for `body.style.overflow`: the page cannot scroll under an open menu.
    pub fn body_overflow(self) -> &'static str {
        match self {
            MenuState::Open => "hidden",
            MenuState::Closed => "",
        }
    }
}

/// The mobile menu and the elements its state is mirrored onto.
#[derive(Clone)]
pub struct MobileMenu {
    toggle: HtmlElement,
    menu: HtmlElement,
    body: Option<HtmlElement>,
    state: Rc<Cell<MenuState>>,
}

impl MobileMenu {
    pub fn new(document: &Document, toggle: HtmlElement, menu: HtmlElement) -> Self {
        Self {
            toggle,
            menu,
            body: document.body(),
            state: Rc::new(Cell::new(MenuState::Closed)),
        }
    }

    pub fn state(&self) -> MenuState {
        self.state.get()
    }

    pub fn toggle(&self) {
        self.set(self.state.get().toggled());
    }

    pub fn close(&self) {
        self.set(MenuState::Closed);
    }

    /// Whether a click on `target` landed outside both the menu and its toggle.
    fn is_outside(&self, target: Option<&Node>) -> bool {
        let menu: &Node = self.menu.as_ref();
        let toggle: &Node = self.toggle.as_ref();
        !menu.contains(target) && !toggle.contains(target)
    }

    fn set(&self, state: MenuState) {
        if self.state.replace(state) != state {
            debug!("Mobile menu {:?}", state);
        }
        for el in [&self.toggle, &self.menu] {
            let classes = el.class_list();
            let _ = if state.is_open() {
                classes.add_1(CLASS_ACTIVE)
            } else {
                classes.remove_1(CLASS_ACTIVE)
            };
        }
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", state.body_overflow());
        }
    }
}

pub fn install_menu(
    document: &Document,
    toggle: HtmlElement,
    menu: HtmlElement,
    links: &[Element],
) -> Result<MobileMenu, SetupError> {
    let mobile = MobileMenu::new(document, toggle.clone(), menu);

    {
        let mobile = mobile.clone();
        dom::listen(&toggle, "click", move |_| mobile.toggle())?;
    }

    for link in links {
        let mobile = mobile.clone();
        dom::listen(link, "click", move |_| mobile.close())?;
    }

    {
        let mobile = mobile.clone();
        dom::listen(document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if mobile.is_outside(target.as_ref()) {
                mobile.close();
            }
        })?;
    }

    info!("Mobile menu installed");
    Ok(mobile)
}

/// The in-page fragment a link points at, if it points at one.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#')
        .filter(|id| !id.is_empty())
        .map(|_| href)
}

/// Scroll offset that puts a section's top just below the fixed header.
pub fn anchor_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}

fn header_height(header: Option<&HtmlElement>) -> f64 {
    header.map(|h| h.offset_height() as f64).unwrap_or(0.0)
}

fn scroll_to_fragment(window: &Window, document: &Document, header: Option<&HtmlElement>, fragment: &str) {
    // A dangling or malformed fragment is swallowed: no fallback navigation.
    let Some(section) = document
        .query_selector(fragment)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No section for {}", fragment);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_target(section.offset_top() as f64, header_height(header)));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn install_smooth_scroll(
    window: &Window,
    document: &Document,
    header: Option<HtmlElement>,
    links: &[Element],
) -> Result<(), SetupError> {
    for link in links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if fragment_of(&href).is_none() {
            continue;
        }

        let window = window.clone();
        let document = document.clone();
        let header = header.clone();
        dom::listen(link, "click", move |event| {
            event.prevent_default();
            scroll_to_fragment(&window, &document, header.as_ref(), &href);
        })?;
    }

    info!("Smooth scrolling installed for {} links", links.len());
    Ok(())
}

/// Geometry of one spied section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBand {
    pub fn contains(&self, scroll_y: f64, header_height: f64) -> bool {
        let start = self.top - header_height - SPY_OFFSET_PX;
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Id of the section whose band holds `scroll_y`. Later sections win on overlap.
pub fn active_section(bands: &[SectionBand], scroll_y: f64, header_height: f64) -> Option<&str> {
    bands
        .iter()
        .filter(|band| band.contains(scroll_y, header_height))
        .last()
        .map(|band| band.id.as_str())
}

fn link_for(document: &Document, id: &str) -> Option<Element> {
    document
        .query_selector(&format!(".nav-link[href=\"#{}\"]", id))
        .ok()
        .flatten()
}

/// Moves the `active` flag to the nav link of the section under the current scroll offset.
pub fn highlight_current(
    window: &Window,
    document: &Document,
    header: Option<&HtmlElement>,
    links: &[Element],
) {
    let bands: Vec<SectionBand> = dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .filter(|section| link_for(document, &section.id()).is_some())
        .map(|section| SectionBand {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        })
        .collect();

    let Some(id) = active_section(&bands, dom::scroll_y(window), header_height(header)) else {
        return;
    };
    let Some(current) = link_for(document, id) else {
        return;
    };
    for link in links {
        let _ = link.class_list().remove_1(CLASS_ACTIVE);
    }
    let _ = current.class_list().add_1(CLASS_ACTIVE);
    debug!("Scroll-spy: #{} active", id);
}

pub fn install_scroll_spy(
    window: &Window,
    document: &Document,
    header: Option<HtmlElement>,
    links: Vec<Element>,
) -> Result<(), SetupError> {
    let win = window.clone();
    let document = document.clone();
    let mut on_scroll = throttle(SCROLL_THROTTLE_MS, browser_now, move || {
        highlight_current(&win, &document, header.as_ref(), &links);
    });
    dom::listen(window, "scroll", move |_| on_scroll())?;

    info!("Scroll-spy installed");
    Ok(())
}
