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

use crate::components::FeatureList::FeatureListItem;
use acme_types::content::{SectionAnchor, Step, StepsSection};
use leptos::prelude::*;

#[component]
pub fn HowItWorksSection(content: StepsSection) -> impl IntoView {
    view! {
        <section
            id=SectionAnchor::How.id()
            class="bg-zinc-50 py-20 md:py-28 dark:bg-zinc-900/50"
        >
            <div class="container mx-auto px-4">
                <h2 class="mb-16 text-center text-3xl font-bold tracking-tight sm:text-4xl">
                    {content.heading}
                </h2>
                <ol class="grid gap-8 md:grid-cols-3">
                    {content
                        .steps
                        .into_iter()
                        .enumerate()
                        .map(|(i, step)| view! { <StepCard number=i + 1 step=step /> })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}

#[component]
fn StepCard(number: usize, step: Step) -> impl IntoView {
    view! {
        <li class="rounded-xl border border-zinc-200 bg-white p-6 dark:border-zinc-800 dark:bg-zinc-950">
            <span class="mb-4 inline-flex h-8 w-8 items-center justify-center rounded-full bg-zinc-900 text-sm font-bold text-white dark:bg-zinc-50 dark:text-zinc-900">
                {number}
            </span>
            <h3 class="mb-2 font-semibold">{step.title}</h3>
            <p class="mb-4 text-sm text-zinc-600 dark:text-zinc-400">{step.description}</p>
            <ul class="space-y-2">
                {step
                    .checklist
                    .into_iter()
                    .map(|text| view! { <FeatureListItem text=text /> })
                    .collect_view()}
            </ul>
        </li>
    }
}
