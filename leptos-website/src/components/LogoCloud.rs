use acme_types::content::LogoCloud as LogoCloudContent;
use leptos::prelude::*;

#[component]
pub fn LogoCloud(content: LogoCloudContent) -> impl IntoView {
    view! {
        <section class="border-y border-zinc-200 py-12 dark:border-zinc-800">
            <div class="container mx-auto px-4">
                <p class="mb-8 text-center text-sm text-zinc-500">{content.caption}</p>
                <div class="flex flex-wrap items-center justify-center gap-x-12 gap-y-6">
                    {content
                        .names
                        .into_iter()
                        .map(|name| {
                            view! {
                                <span class="text-xl font-semibold text-zinc-400 dark:text-zinc-600">
                                    {name}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
