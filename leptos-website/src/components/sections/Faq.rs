// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::icons::{Icon, IconName};
use acme_types::content::{FaqEntry, FaqSection, SectionAnchor};
use acme_types::AccordionGroup;
use leptos::prelude::*;

pub fn trigger_id(index: usize) -> String {
    format!("faq-trigger-{index}")
}

pub fn panel_id(index: usize) -> String {
    format!("faq-panel-{index}")
}

/// Single-select accordion: opening one answer closes the others, and the
/// open answer can be collapsed again.
#[component]
pub fn FaqAccordion(content: FaqSection) -> impl IntoView {
    let group = RwSignal::new(AccordionGroup::<usize>::collapsible());

    view! {
        <section id=SectionAnchor::Faq.id() class="py-20 md:py-28">
            <div class="container mx-auto max-w-3xl px-4">
                <h2 class="mb-10 text-3xl font-bold tracking-tight sm:text-4xl">{content.heading}</h2>
                <div class="divide-y divide-zinc-200 border-y border-zinc-200 dark:divide-zinc-800 dark:border-zinc-800">
                    {content
                        .entries
                        .into_iter()
                        .enumerate()
                        .map(|(index, entry)| view! { <FaqItem index=index entry=entry group=group /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqItem(index: usize, entry: FaqEntry, group: RwSignal<AccordionGroup<usize>>) -> impl IntoView {
    let is_open = move || group.with(|g| g.is_open(&index));
    let chevron_class = move || {
        if is_open() {
            "h-4 w-4 shrink-0 rotate-180 transition-transform"
        } else {
            "h-4 w-4 shrink-0 transition-transform"
        }
    };

    view! {
        <div class="py-2">
            <h3>
                <button
                    type="button"
                    id=trigger_id(index)
                    class="flex w-full items-center justify-between py-3 text-left font-medium hover:underline"
                    aria-expanded=move || is_open().to_string()
                    aria-controls=panel_id(index)
                    on:click=move |_| {
                        group.update(|g| {
                            g.toggle(index);
                        })
                    }
                >
                    {entry.question}
                    <span class=chevron_class>
                        <Icon name=IconName::ChevronDown class="h-4 w-4" />
                    </span>
                </button>
            </h3>
            <div
                id=panel_id(index)
                role="region"
                aria-labelledby=trigger_id(index)
                class="pb-4 text-sm text-zinc-600 dark:text-zinc-400"
                hidden=move || !is_open()
            >
                {entry.answer}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_and_panel_ids_pair_up() {
        assert_eq!(trigger_id(2), "faq-trigger-2");
        assert_eq!(panel_id(2), "faq-panel-2");
    }
}
