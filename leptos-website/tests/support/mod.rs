// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared harness for the landing page browser tests: mount points,
// DOM queries and a scheduler yield so reactive updates can flush.
#![allow(dead_code)]

use acme_types::THEME_STORAGE_KEY;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Storage};

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> HtmlElement {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &HtmlElement) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Yield to the event loop so scheduled effects run.
pub async fn tick() {
    TimeoutFuture::new(0).await;
    TimeoutFuture::new(0).await;
}

pub fn storage() -> Storage {
    gloo_utils::window().local_storage().unwrap().unwrap()
}

/// Forget any stored theme and drop the dark class from `<html>`.
pub fn reset_theme() {
    storage().remove_item(THEME_STORAGE_KEY).unwrap();
    root_element().class_list().remove_1("dark").unwrap();
}

pub fn root_element() -> web_sys::Element {
    gloo_utils::document().document_element().unwrap()
}

pub fn root_is_dark() -> bool {
    root_element().class_list().contains("dark")
}

pub fn query(mount: &HtmlElement, selector: &str) -> Option<HtmlElement> {
    mount
        .query_selector(selector)
        .unwrap()
        .map(|el| el.unchecked_into())
}

pub fn query_all(mount: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let list = mount.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.unchecked_into())
        .collect()
}

pub fn click(mount: &HtmlElement, selector: &str) {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .click();
}

pub fn attr(mount: &HtmlElement, selector: &str, name: &str) -> Option<String> {
    query(mount, selector)
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .get_attribute(name)
}
