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

use crate::components::Badge::Badge;
use crate::components::FeatureList::FeatureList;
use crate::components::LineChart::LineChart;
use acme_types::content::{FeatureSection, SectionAnchor};
use leptos::prelude::*;

#[component]
pub fn FeaturesSection(content: FeatureSection) -> impl IntoView {
    let FeatureSection {
        badge,
        heading,
        lead,
        chart,
        chart_caption,
        items,
    } = content;

    view! {
        <section id=SectionAnchor::Features.id() class="py-20 md:py-28">
            <div class="container mx-auto px-4">
                <div class="mx-auto mb-16 max-w-2xl text-center">
                    <Badge class="mb-4">{badge}</Badge>
                    <h2 class="text-3xl font-bold tracking-tight sm:text-4xl">{heading}</h2>
                    <p class="mt-4 text-zinc-600 dark:text-zinc-400">{lead}</p>
                </div>
                <div class="grid items-center gap-12 lg:grid-cols-2">
                    <LineChart points=chart caption=chart_caption />
                    <FeatureList items=items />
                </div>
            </div>
        </section>
    }
}
