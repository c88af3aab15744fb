/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::components::ConfigError::ConfigError;
use crate::config::{site_content, RuntimeConfig};
use crate::context::{provide_notifier_context, provide_theme_context};
use crate::pages::Home::*;
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App(#[prop(optional)] config: RuntimeConfig) -> impl IntoView {
    provide_meta_context();
    provide_theme_context();
    provide_notifier_context();

    let page = match site_content(&config) {
        Ok(content) => view! { <Home content=content /> }.into_any(),
        Err(e) => {
            log::error!("no usable site content: {e}");
            view! { <ConfigError message=e.to_string() /> }.into_any()
        }
    };

    view! {
        <Meta
            name="description"
            content="A modern, extensible landing page you can adapt to any product."
        />
        <Meta name="color-scheme" content="light dark" />
        {page}
    }
}
