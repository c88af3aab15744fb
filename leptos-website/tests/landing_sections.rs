// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use acme_types::SectionAnchor;
use acme_website::App;
use leptos::prelude::*;
use support::{cleanup, create_mount_point, query, query_all, tick};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn every_nav_target_exists_on_the_page() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    for anchor in SectionAnchor::ALL {
        assert!(
            query(&mount, &format!("section#{}", anchor.id())).is_some(),
            "missing section {}",
            anchor.id()
        );
    }

    let hrefs: Vec<String> = query_all(&mount, "header nav[aria-label=Main] a")
        .iter()
        .filter_map(|a| a.get_attribute("href"))
        .collect();
    assert_eq!(hrefs, vec!["#features", "#how", "#pricing", "#faq"]);

    drop(app);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn exactly_one_tier_is_marked_most_popular() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    let pricing = query(&mount, "#pricing").unwrap();
    let text = pricing.text_content().unwrap_or_default();
    assert_eq!(text.matches("Most popular").count(), 1);
    assert!(text.contains("Pro"));

    drop(app);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn footer_carries_the_copyright_line() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    let footer = query(&mount, "footer").unwrap();
    let text = footer.text_content().unwrap_or_default();
    assert!(text.contains("Acme Inc. All rights reserved."));

    drop(app);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn hero_calls_to_action_link_into_the_page() {
    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    let secondary = query(&mount, "section a[href='#how']").unwrap();
    assert!(secondary.class_name().contains("h-11"));
    assert!(query(&mount, "section a[href='#pricing']").is_some());

    drop(app);
    cleanup(&mount);
}
