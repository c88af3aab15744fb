// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::components::CTAButton::CTAButton;
use crate::context::use_notifier;
use acme_types::content::NewsletterCopy;
use acme_types::newsletter::EMAIL_FIELD;
use acme_types::NewsletterForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

fn submitted_email(form: &HtmlFormElement) -> String {
    FormData::new_with_form(form)
        .ok()
        .and_then(|data| data.get(EMAIL_FIELD).as_string())
        .unwrap_or_default()
}

#[component]
pub fn NewsletterSection(content: NewsletterCopy) -> impl IntoView {
    let notifier = use_notifier();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };

        let mut newsletter =
            NewsletterForm::with_fields([(EMAIL_FIELD, submitted_email(&form))].into_iter().collect());
        match newsletter.submit(&notifier) {
            Ok(_) => form.reset(),
            Err(e) => log::warn!("newsletter sign-up rejected: {e}"),
        }
    };

    view! {
        <section class="border-y border-zinc-200 bg-zinc-50 py-16 dark:border-zinc-800 dark:bg-zinc-900/50">
            <div class="container mx-auto px-4">
                <div class="grid items-center gap-6 rounded-2xl border border-zinc-200 bg-white p-8 md:grid-cols-2 md:p-12 dark:border-zinc-800 dark:bg-zinc-950">
                    <div>
                        <h3 class="text-2xl font-semibold tracking-tight">{content.heading}</h3>
                        <p class="mt-2 text-zinc-600 dark:text-zinc-400">{content.lead}</p>
                    </div>
                    <form id="newsletter-form" class="flex w-full gap-2" on:submit=on_submit>
                        <input
                            name=EMAIL_FIELD
                            type="email"
                            required
                            placeholder=content.placeholder
                            aria-label="Email address"
                            class="h-11 flex-1 rounded-md border border-zinc-300 bg-transparent px-3 text-sm dark:border-zinc-700"
                        />
                        <CTAButton button_type="submit" class="h-11">
                            {content.submit_label}
                        </CTAButton>
                    </form>
                </div>
            </div>
        </section>
    }
}
