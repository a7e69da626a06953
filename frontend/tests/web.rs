//! Browser tests for the DOM side of the page behaviour.
//! Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventInit, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement,
};

use mingqi_frontend::animations::{install_reveal, install_stagger};
use mingqi_frontend::components::contact_form;
use mingqi_frontend::components::header::apply_scroll_state;
use mingqi_frontend::components::nav::{
    highlight_current, install_menu, install_smooth_scroll, MenuState,
};
use mingqi_frontend::components::notification::{current_notification, show_notification, Severity};
use mingqi_frontend::dom;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(html: &str) -> (Document, HtmlElement) {
    let document = dom::document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    (document, host)
}

fn by_id<T: JsCast>(document: &Document, id: &str) -> T {
    document.get_element_by_id(id).unwrap().dyn_into::<T>().unwrap()
}

fn cancelable(kind: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict(kind, &init).unwrap()
}

fn notification_count(document: &Document) -> u32 {
    document.query_selector_all(".notification").unwrap().length()
}

fn submit(form: &HtmlFormElement) {
    form.dispatch_event(&cancelable("submit")).unwrap();
}

#[wasm_bindgen_test]
fn header_flag_tracks_offset() {
    let (document, host) = mount(r#"<header id="test-header"></header>"#);
    let header: HtmlElement = by_id(&document, "test-header");

    apply_scroll_state(&header, 120.0).unwrap();
    assert!(header.class_list().contains("scrolled"));
    apply_scroll_state(&header, 120.0).unwrap();
    assert!(header.class_list().contains("scrolled"));
    apply_scroll_state(&header, 50.0).unwrap();
    assert!(!header.class_list().contains("scrolled"));

    host.remove();
}

#[wasm_bindgen_test]
fn second_notification_replaces_first() {
    let (document, _) = mount("");

    show_notification(&document, "first", Severity::Info).unwrap();
    show_notification(&document, "second", Severity::Error).unwrap();

    assert_eq!(notification_count(&document), 1);
    let toast = current_notification(&document).unwrap();
    assert_eq!(toast.class_name(), "notification notification-error");
    let message = toast.query_selector(".notification-message").unwrap().unwrap();
    assert_eq!(message.text_content().as_deref(), Some("second"));
    assert!(document.get_element_by_id("notification-styles").is_some());

    toast.remove();
}

#[wasm_bindgen_test]
fn keyframes_are_injected_once() {
    let (document, _) = mount("");

    show_notification(&document, "one", Severity::Success).unwrap();
    show_notification(&document, "two", Severity::Success).unwrap();

    let blocks = document.query_selector_all("#notification-styles").unwrap();
    assert_eq!(blocks.length(), 1);
    if let Some(toast) = current_notification(&document) {
        toast.remove();
    }
}

#[wasm_bindgen_test]
fn message_is_text_not_markup() {
    let (document, _) = mount("");

    let toast = show_notification(&document, "<b>bold</b>", Severity::Info).unwrap();
    assert!(toast.query_selector("b").unwrap().is_none());
    toast.remove();
}

#[wasm_bindgen_test]
fn menu_toggle_and_link_close() {
    let (document, host) = mount(
        r##"<button id="t-toggle"></button>
            <ul id="t-menu"><li><a class="t-link" href="#nowhere">x</a></li></ul>"##,
    );
    let toggle: HtmlElement = by_id(&document, "t-toggle");
    let menu: HtmlElement = by_id(&document, "t-menu");
    let links = dom::query_all(&document, ".t-link");
    let body = document.body().unwrap();

    let mobile = install_menu(&document, toggle.clone(), menu.clone(), &links).unwrap();
    assert_eq!(mobile.state(), MenuState::Closed);

    toggle.click();
    assert_eq!(mobile.state(), MenuState::Open);
    assert!(menu.class_list().contains("active"));
    assert!(toggle.class_list().contains("active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");

    links[0].dyn_ref::<HtmlElement>().unwrap().click();
    assert_eq!(mobile.state(), MenuState::Closed);
    assert!(!menu.class_list().contains("active"));
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    toggle.click();
    assert_eq!(mobile.state(), MenuState::Open);
    host.click();
    assert_eq!(mobile.state(), MenuState::Closed);
    assert_eq!(body.style().get_property_value("overflow").unwrap(), "");

    host.remove();
}

#[wasm_bindgen_test]
fn cards_get_staggered_delays_and_reveal_flag() {
    let (document, host) = mount(
        r#"<div class="service-card"></div><div class="service-card"></div>
           <div class="product-card"></div><h2 class="section-header"></h2>"#,
    );

    install_stagger(&document).unwrap();
    let delays: Vec<String> = dom::query_all_in(&host, ".service-card, .product-card")
        .into_iter()
        .map(|el| {
            el.dyn_into::<HtmlElement>()
                .unwrap()
                .style()
                .get_property_value("transition-delay")
                .unwrap()
        })
        .collect();
    assert_eq!(delays, ["0s", "0.1s", "0.2s"]);

    install_reveal(&document).unwrap();
    for el in dom::query_all_in(&host, ".service-card, .product-card, .section-header") {
        assert!(el.class_list().contains("reveal"));
    }

    host.remove();
}

const FORM: &str = r#"
    <form id="t-form">
        <input name="name" id="t-name">
        <input name="email" id="t-email">
        <textarea name="message" id="t-message"></textarea>
        <button type="submit" id="t-submit">发送</button>
    </form>"#;

#[wasm_bindgen_test]
fn empty_name_shows_error_and_keeps_button() {
    let (document, host) = mount(FORM);
    let form: HtmlFormElement = by_id(&document, "t-form");
    contact_form::install(&document, form.clone()).unwrap();

    by_id::<HtmlInputElement>(&document, "t-email").set_value("a@b.com");
    by_id::<HtmlTextAreaElement>(&document, "t-message").set_value("hi");
    submit(&form);

    let toast = current_notification(&document).unwrap();
    assert_eq!(toast.class_name(), "notification notification-error");
    let button: HtmlButtonElement = by_id(&document, "t-submit");
    assert!(!button.disabled());

    toast.remove();
    host.remove();
}

#[wasm_bindgen_test]
async fn valid_submission_completes_after_delay() {
    let (document, host) = mount(FORM);
    let form: HtmlFormElement = by_id(&document, "t-form");
    contact_form::install(&document, form.clone()).unwrap();

    by_id::<HtmlInputElement>(&document, "t-name").set_value("Li");
    by_id::<HtmlInputElement>(&document, "t-email").set_value("li@example.com");
    by_id::<HtmlTextAreaElement>(&document, "t-message").set_value("hello");
    submit(&form);

    let button: HtmlButtonElement = by_id(&document, "t-submit");
    assert!(button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("发送中..."));

    TimeoutFuture::new(1_700).await;

    let toast = current_notification(&document).unwrap();
    assert_eq!(toast.class_name(), "notification notification-success");
    assert!(!button.disabled());
    assert_eq!(button.text_content().as_deref(), Some("发送"));
    assert_eq!(by_id::<HtmlInputElement>(&document, "t-name").value(), "");
    assert_eq!(by_id::<HtmlTextAreaElement>(&document, "t-message").value(), "");

    toast.remove();
    host.remove();
}

#[wasm_bindgen_test]
fn start_on_parsed_document() {
    assert_ne!(dom::document().unwrap().ready_state(), "loading");
    mingqi_frontend::start().unwrap();
}

#[wasm_bindgen_test]
async fn close_button_plays_exit_then_removes() {
    let (document, _) = mount("");
    let toast = show_notification(&document, "bye", Severity::Info).unwrap();
    let close = toast
        .query_selector(".notification-close")
        .unwrap()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();

    close.click();
    assert!(toast
        .style()
        .get_property_value("animation")
        .unwrap()
        .contains("slideOut"));
    assert!(toast.parent_node().is_some());

    TimeoutFuture::new(400).await;
    assert!(toast.parent_node().is_none());
    assert_eq!(notification_count(&document), 0);
}

#[wasm_bindgen_test]
async fn toast_dismisses_itself() {
    let (document, _) = mount("");
    let toast = show_notification(&document, "later", Severity::Success).unwrap();

    TimeoutFuture::new(4_500).await;
    assert!(toast.parent_node().is_some());

    TimeoutFuture::new(1_000).await;
    assert!(toast.parent_node().is_none());
    assert_eq!(notification_count(&document), 0);
}

#[wasm_bindgen_test]
async fn replaced_toast_timer_leaves_successor() {
    let (document, _) = mount("");
    let first = show_notification(&document, "first", Severity::Info).unwrap();

    TimeoutFuture::new(2_000).await;
    let second = show_notification(&document, "second", Severity::Error).unwrap();
    assert!(first.parent_node().is_none());

    // The first toast's dismissal (5000 + 300 ms) has run by now.
    TimeoutFuture::new(3_600).await;
    assert!(second.parent_node().is_some());
    assert_eq!(notification_count(&document), 1);
    assert!(second.style().get_property_value("animation").unwrap().contains("slideIn"));

    second.remove();
}

#[wasm_bindgen_test]
fn dangling_anchor_is_swallowed() {
    let (document, host) = mount(r##"<a class="t-anchor" href="#no-such-section">x</a>"##);
    let window = dom::window().unwrap();
    let links = dom::query_all(&document, ".t-anchor");
    install_smooth_scroll(&window, &document, None, &links).unwrap();

    let before = window.scroll_y().unwrap();
    let proceeded = links[0].dispatch_event(&cancelable("click")).unwrap();
    assert!(!proceeded, "default navigation should be prevented");
    assert_eq!(window.scroll_y().unwrap(), before);

    host.remove();
}

#[wasm_bindgen_test]
fn scroll_spy_moves_active_flag() {
    let (document, host) = mount(
        r##"<a class="nav-link active" href="#spy-a">a</a>
            <a class="nav-link active" href="#spy-b">b</a>
            <section id="spy-a" style="height: 2000px"></section>
            <section id="spy-b" style="height: 2000px"></section>"##,
    );
    let window = dom::window().unwrap();
    let links = dom::query_all_in(&host, ".nav-link");
    let top_a = by_id::<HtmlElement>(&document, "spy-a").offset_top() as f64;
    let top_b = by_id::<HtmlElement>(&document, "spy-b").offset_top() as f64;
    let active = |i: usize| links[i].class_list().contains("active");

    // Band of b starts 100px above its top when there is no header.
    window.scroll_to_with_x_and_y(0.0, top_b - 50.0);
    highlight_current(&window, &document, None, &links);
    assert!(!active(0));
    assert!(active(1));

    window.scroll_to_with_x_and_y(0.0, top_a + 200.0);
    highlight_current(&window, &document, None, &links);
    assert!(active(0));
    assert!(!active(1));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    host.remove();
}
