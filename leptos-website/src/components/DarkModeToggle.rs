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

use crate::components::CTAButton::{button_class, ButtonSize, ButtonVariant};
use crate::context::use_theme;
use crate::icons::{Icon, IconName};
use leptos::prelude::*;

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <button
            type="button"
            id="theme-toggle"
            class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "")
            aria-label="Toggle theme"
            aria-pressed=move || theme.is_dark().to_string()
            on:click=move |_| theme.toggle()
        >
            // the icon shows the mode a click switches to
            <Show
                when=move || theme.is_dark()
                fallback=|| view! { <Icon name=IconName::Moon /> }
            >
                <Icon name=IconName::Sun />
            </Show>
        </button>
    }
}
