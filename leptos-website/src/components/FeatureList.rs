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

use crate::icons::{Icon, IconName};
use acme_types::content::Feature;
use leptos::prelude::*;

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-zinc-200 bg-white p-6 shadow-sm transition-shadow hover:shadow-md dark:border-zinc-800 dark:bg-zinc-900">
            <div class="mb-4 inline-flex h-10 w-10 items-center justify-center rounded-lg bg-zinc-100 dark:bg-zinc-800">
                <Icon name=IconName::from(feature.icon) />
            </div>
            <h3 class="mb-2 font-semibold">{feature.title}</h3>
            <p class="text-sm text-zinc-600 dark:text-zinc-400">{feature.description}</p>
        </div>
    }
}

#[component]
pub fn FeatureList(items: Vec<Feature>) -> impl IntoView {
    let cards = items
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature /> })
        .collect_view();

    view! { <div class="grid gap-6 sm:grid-cols-2">{cards}</div> }
}

/// A checklist row, as used under each onboarding step.
#[component]
pub fn FeatureListItem(text: String) -> impl IntoView {
    view! {
        <li class="flex items-start gap-2 text-sm text-zinc-600 dark:text-zinc-400">
            <Icon name=IconName::CheckCircle class="mt-0.5 h-4 w-4 shrink-0 text-emerald-500" />
            <span>{text}</span>
        </li>
    }
}
