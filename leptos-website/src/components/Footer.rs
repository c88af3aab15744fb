use crate::components::CTAButton::{button_class, ButtonSize, ButtonVariant};
use crate::icons::{Icon, IconName};
use acme_types::content::{Brand, Footer as FooterContent, FooterColumn};
use leptos::prelude::*;

pub fn copyright_line(year: u32, company: &str) -> String {
    format!("\u{a9} {year} {company} All rights reserved.")
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer(brand: Brand, content: FooterContent) -> impl IntoView {
    let FooterContent {
        blurb,
        socials,
        columns,
        legal,
    } = content;

    view! {
        <footer class="bg-white dark:bg-zinc-950">
            <div class="container mx-auto grid gap-10 px-4 py-16 md:grid-cols-4">
                <div>
                    <a href="#" class="flex items-center gap-2">
                        <span class="h-8 w-8 rounded-xl bg-gradient-to-tr from-indigo-500 to-cyan-400"></span>
                        <span class="font-semibold">{brand.name}</span>
                    </a>
                    <p class="mt-3 text-sm text-zinc-600 dark:text-zinc-400">{blurb}</p>
                    <div class="mt-4 flex gap-3">
                        {socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "")
                                        aria-label=social.label
                                    >
                                        <Icon name=IconName::from(social.icon) />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                {columns
                    .into_iter()
                    .map(|column| view! { <LinkColumn column=column /> })
                    .collect_view()}
            </div>

            // Copyright
            <div class="border-t border-zinc-200 dark:border-zinc-800">
                <div class="container mx-auto flex items-center justify-between px-4 py-4 text-xs text-zinc-500">
                    <p>{copyright_line(current_year(), &brand.company)}</p>
                    <div class="flex gap-4">
                        {legal
                            .into_iter()
                            .map(|label| {
                                view! {
                                    <a href="#" class="hover:text-zinc-900 dark:hover:text-zinc-50">
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(column: FooterColumn) -> impl IntoView {
    view! {
        <div>
            <h4 class="mb-3 font-semibold">{column.title}</h4>
            <ul class="space-y-2 text-sm text-zinc-600 dark:text-zinc-400">
                {column
                    .links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href="#" class="hover:text-zinc-900 dark:hover:text-zinc-50">
                                    {link}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::copyright_line;

    #[test]
    fn copyright_names_year_and_company() {
        assert_eq!(
            copyright_line(2025, "Acme Inc."),
            "\u{a9} 2025 Acme Inc. All rights reserved."
        );
    }
}
