// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use acme_website::App;
use leptos::prelude::*;
use support::{attr, cleanup, click, create_mount_point, query, tick};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn panel_open(mount: &HtmlElement, index: usize) -> bool {
    !query(mount, &format!("#faq-panel-{index}"))
        .unwrap()
        .has_attribute("hidden")
}

#[wasm_bindgen_test]
async fn at_most_one_answer_is_open() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    assert!((0..3).all(|i| !panel_open(&mount, i)));

    click(&mount, "#faq-trigger-0");
    tick().await;
    assert!(panel_open(&mount, 0));
    assert_eq!(attr(&mount, "#faq-trigger-0", "aria-expanded").as_deref(), Some("true"));

    click(&mount, "#faq-trigger-1");
    tick().await;
    assert!(!panel_open(&mount, 0));
    assert!(panel_open(&mount, 1));
    assert!(!panel_open(&mount, 2));
    assert_eq!(attr(&mount, "#faq-trigger-0", "aria-expanded").as_deref(), Some("false"));

    drop(app);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_the_open_answer_collapses_it() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    click(&mount, "#faq-trigger-2");
    tick().await;
    assert!(panel_open(&mount, 2));

    click(&mount, "#faq-trigger-2");
    tick().await;
    assert!((0..3).all(|i| !panel_open(&mount, i)));

    drop(app);
    cleanup(&mount);
}
