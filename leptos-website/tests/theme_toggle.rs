// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Theme initialization and toggling against real localStorage and the
// document root's class list.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use acme_types::THEME_STORAGE_KEY;
use acme_website::App;
use leptos::prelude::*;
use support::{attr, cleanup, click, create_mount_point, reset_theme, root_is_dark, storage, tick};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn stored_dark_preference_is_applied_on_startup() {
    reset_theme();
    storage().set_item(THEME_STORAGE_KEY, "dark").unwrap();

    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    assert!(root_is_dark());
    assert_eq!(attr(&mount, "#theme-toggle", "aria-pressed").as_deref(), Some("true"));

    drop(app);
    cleanup(&mount);
    reset_theme();
}

#[wasm_bindgen_test]
async fn stored_light_preference_beats_the_ambient_scheme() {
    reset_theme();
    storage().set_item(THEME_STORAGE_KEY, "light").unwrap();

    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    assert!(!root_is_dark());

    drop(app);
    cleanup(&mount);
    reset_theme();
}

#[wasm_bindgen_test]
async fn toggle_flips_the_class_and_persists_the_choice() {
    reset_theme();

    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    // without a stored value the start depends on the browser's scheme
    let started_dark = root_is_dark();
    assert_eq!(storage().get_item(THEME_STORAGE_KEY).unwrap(), None);

    click(&mount, "#theme-toggle");
    tick().await;
    assert_eq!(root_is_dark(), !started_dark);
    let expected = if started_dark { "light" } else { "dark" };
    assert_eq!(
        storage().get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
        Some(expected)
    );
    assert_eq!(
        attr(&mount, "#theme-toggle", "aria-pressed"),
        Some((!started_dark).to_string())
    );

    click(&mount, "#theme-toggle");
    tick().await;
    assert_eq!(root_is_dark(), started_dark);

    drop(app);
    cleanup(&mount);
    reset_theme();
}

#[wasm_bindgen_test]
async fn unrecognised_stored_value_is_ignored() {
    reset_theme();
    storage().set_item(THEME_STORAGE_KEY, "sepia").unwrap();

    let mount = create_mount_point();
    let app = leptos::mount::mount_to(mount.clone(), || view! { <App /> });
    tick().await;

    click(&mount, "#theme-toggle");
    tick().await;
    let stored = storage().get_item(THEME_STORAGE_KEY).unwrap();
    assert!(matches!(stored.as_deref(), Some("light") | Some("dark")));

    drop(app);
    cleanup(&mount);
    reset_theme();
}
