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
use crate::components::CTAButton::{ButtonSize, ButtonVariant, CTAButton};
use crate::components::FeatureList::FeatureListItem;
use acme_types::content::{PricingSection as PricingContent, PricingTier, SectionAnchor};
use leptos::prelude::*;

pub const MOST_POPULAR: &str = "Most popular";

#[component]
pub fn PricingSection(content: PricingContent) -> impl IntoView {
    view! {
        <section id=SectionAnchor::Pricing.id() class="py-20 md:py-28">
            <div class="container mx-auto px-4">
                <div class="mx-auto mb-16 max-w-2xl text-center">
                    <h2 class="text-3xl font-bold tracking-tight sm:text-4xl">{content.heading}</h2>
                    <p class="mt-4 text-zinc-600 dark:text-zinc-400">{content.lead}</p>
                </div>

                <div class="grid gap-6 md:grid-cols-3">
                    {content
                        .tiers
                        .into_iter()
                        .map(|tier| view! { <PricingCard tier=tier /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(tier: PricingTier) -> impl IntoView {
    let PricingTier {
        name,
        price,
        features,
        cta,
        highlighted,
    } = tier;

    let card_class = if highlighted {
        "border-zinc-900 shadow-lg dark:border-zinc-50"
    } else {
        "border-zinc-200 dark:border-zinc-800"
    };
    let variant = if highlighted {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Secondary
    };

    view! {
        <div class=format!(
            "flex flex-col rounded-2xl border bg-white p-6 dark:bg-zinc-900 {card_class}",
        )>
            <div class="mb-6">
                <h3 class="flex items-center justify-between text-lg font-semibold">
                    {name}
                    {highlighted.then(|| view! { <Badge>{MOST_POPULAR}</Badge> })}
                </h3>
                <p class="mt-2 text-3xl font-bold">{price}</p>
            </div>

            <ul class="mb-8 flex-1 space-y-2">
                {features
                    .into_iter()
                    .map(|feature| view! { <FeatureListItem text=feature /> })
                    .collect_view()}
            </ul>

            <CTAButton variant=variant size=ButtonSize::Medium class="w-full">
                {cta}
            </CTAButton>
        </div>
    }
}
