#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use resto_menu::anchors::{AnchorKind, Anchors};
use resto_menu::app::mount;
use resto_menu::browser::clipboard_of;
use resto_menu::config::{AnchorIds, PageConfig};
use resto_menu::error::PageError;
use resto_menu::model::Catalog;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn add_anchor(id: &str) {
    let doc = document();
    if doc.get_element_by_id(id).is_some() {
        return;
    }
    let el = doc.create_element("div").expect("create anchor");
    el.set_id(id);
    doc.body()
        .expect("body")
        .append_child(&el)
        .expect("append anchor");
}

fn ids(prefix: &str) -> AnchorIds {
    AnchorIds {
        nav: format!("{prefix}-nav"),
        slider: format!("{prefix}-slider"),
        menu: format!("{prefix}-menu"),
        modal: format!("{prefix}-modal"),
        toasts: format!("{prefix}-toasts"),
    }
}

#[wasm_bindgen_test]
fn resolves_only_present_anchors() {
    let ids = ids("partial");
    add_anchor(&ids.menu);
    add_anchor(&ids.modal);
    let anchors = Anchors::resolve(&document(), &ids);
    assert!(anchors.menu.is_some());
    assert!(anchors.modal.is_some());
    assert_eq!(
        anchors.missing(),
        ["partial-nav", "partial-slider", "partial-toasts"]
    );
}

#[wasm_bindgen_test]
fn mounting_skips_missing_features() {
    let ids = ids("menu-only");
    add_anchor(&ids.menu);
    let config = PageConfig {
        anchors: ids.clone(),
        ..PageConfig::default()
    };
    let anchors = Anchors::resolve(&document(), &ids);
    let mounted = mount(&anchors, Rc::new(config), Rc::new(Catalog::generate()));
    assert_eq!(mounted, [AnchorKind::Menu]);
}

#[wasm_bindgen_test]
fn nothing_mounts_without_anchors() {
    let ids = ids("absent");
    let anchors = Anchors::resolve(&document(), &ids);
    let config = PageConfig {
        anchors: ids,
        ..PageConfig::default()
    };
    assert!(mount(&anchors, Rc::new(config), Rc::new(Catalog::generate())).is_empty());
}

/// Mounts the given features under fresh anchors and waits for the first render.
async fn mount_page(prefix: &str, kinds: &[AnchorKind]) -> Anchors {
    let ids = ids(prefix);
    for kind in kinds {
        add_anchor(kind.id(&ids));
    }
    let config = PageConfig {
        anchors: ids.clone(),
        ..PageConfig::default()
    };
    let anchors = Anchors::resolve(&document(), &ids);
    mount(&anchors, Rc::new(config), Rc::new(Catalog::generate()));
    settle(50).await;
    anchors
}

async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

fn root(anchors: &Anchors, kind: AnchorKind) -> Element {
    anchors.get(kind).cloned().expect("anchor mounted")
}

fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .expect("valid selector")
        .expect("element rendered")
        .unchecked_into()
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).expect("valid selector").length()
}

fn type_into(input: &HtmlElement, text: &str) {
    input.unchecked_ref::<HtmlInputElement>().set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).expect("input event");
    input.dispatch_event(&event).expect("dispatch input");
}

fn press_escape() {
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keydown");
    web_sys::window()
        .expect("window")
        .dispatch_event(&event)
        .expect("dispatch keydown");
}

#[wasm_bindgen_test]
async fn card_click_opens_preview_and_escape_closes_it() {
    let anchors = mount_page("preview", &[AnchorKind::Menu, AnchorKind::Modal]).await;
    let menu = root(&anchors, AnchorKind::Menu);
    let modal = root(&anchors, AnchorKind::Modal);
    assert_eq!(count(&modal, "#previewModal"), 0);

    find(&menu, "article h4").click();
    settle(50).await;
    assert_eq!(find(&modal, "#modalTitle").text_content().as_deref(), Some("Menu Favorit 1"));

    press_escape();
    settle(50).await;
    assert_eq!(count(&modal, "#previewModal"), 0);
}

#[wasm_bindgen_test]
async fn order_link_click_does_not_open_preview() {
    let anchors = mount_page("order", &[AnchorKind::Menu, AnchorKind::Modal]).await;
    let menu = root(&anchors, AnchorKind::Menu);
    let modal = root(&anchors, AnchorKind::Modal);

    // Without an href the anchor has no navigation to perform.
    let link = find(&menu, "article a");
    link.remove_attribute("href").expect("remove href");
    link.click();
    settle(50).await;
    assert_eq!(count(&modal, "#previewModal"), 0);
}

#[wasm_bindgen_test]
async fn only_the_last_keystroke_searches() {
    let anchors = mount_page("search", &[AnchorKind::Menu]).await;
    let menu = root(&anchors, AnchorKind::Menu);
    let input = find(&menu, "#menuSearch");
    assert_eq!(count(&menu, "article"), 6);

    type_into(&input, "Menu Favorit 1");
    settle(200).await;
    type_into(&input, "Menu Favorit 12");
    settle(200).await;
    // The first search would have fired by now had it not been replaced.
    assert_eq!(count(&menu, "article"), 6);

    settle(250).await;
    assert_eq!(count(&menu, "article"), 1);
    assert!(menu.text_content().unwrap_or_default().contains("Menu Favorit 12"));
}

#[wasm_bindgen_test]
async fn load_more_appends_next_page() {
    let anchors = mount_page("more", &[AnchorKind::Menu]).await;
    let menu = root(&anchors, AnchorKind::Menu);
    assert_eq!(count(&menu, "article"), 6);

    find(&menu, "#loadMore").click();
    settle(50).await;
    assert_eq!(count(&menu, "article"), 12);
    let style = find(&menu, "#loadMore").get_attribute("style").unwrap_or_default();
    assert!(style.contains("display:none"));
}

#[wasm_bindgen_test]
fn missing_clipboard_is_an_error_not_a_throw() {
    let navigator: JsValue = js_sys::Object::new().into();
    let err = clipboard_of(&navigator).unwrap_err();
    assert!(matches!(err, PageError::Clipboard(msg) if msg == "clipboard unavailable"));
}

#[wasm_bindgen_test]
fn logger_writes_every_level_to_console() {
    resto_menu::logging::init();
    log::error!("error line");
    log::warn!("warn line");
    log::info!("info line");
    log::debug!("debug line");
}
