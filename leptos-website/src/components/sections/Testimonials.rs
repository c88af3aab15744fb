use acme_types::content::{Testimonial, TestimonialSection};
use leptos::prelude::*;

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase()
}

#[component]
pub fn TestimonialsSection(content: TestimonialSection) -> impl IntoView {
    view! {
        <section class="py-20 md:py-28">
            <div class="container mx-auto px-4">
                <h2 class="mb-16 text-center text-3xl font-bold tracking-tight sm:text-4xl">
                    {content.heading}
                </h2>
                <div class="grid gap-6 md:grid-cols-3">
                    {content
                        .quotes
                        .into_iter()
                        .map(|quote| view! { <TestimonialCard quote=quote /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(quote: Testimonial) -> impl IntoView {
    let avatar = initials(&quote.name);

    view! {
        <figure class="flex flex-col justify-between rounded-xl border border-zinc-200 bg-white p-6 dark:border-zinc-800 dark:bg-zinc-900">
            <blockquote class="text-zinc-700 dark:text-zinc-300">
                {format!("\u{201c}{}\u{201d}", quote.quote)}
            </blockquote>
            <figcaption class="mt-6 flex items-center gap-3">
                <span class="inline-flex h-10 w-10 items-center justify-center rounded-full bg-zinc-200 text-sm font-semibold dark:bg-zinc-700">
                    {avatar}
                </span>
                <span>
                    <span class="block font-semibold">{quote.name}</span>
                    <span class="block text-sm text-zinc-500">{quote.role}</span>
                </span>
            </figcaption>
        </figure>
    }
}

#[cfg(test)]
mod tests {
    use super::initials;

    #[test]
    fn initials_take_the_first_two_words() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("mary jane watson"), "MJ");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }
}
