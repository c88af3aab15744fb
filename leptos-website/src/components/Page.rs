use crate::components::Footer::*;
use acme_types::content::{Brand, Footer as FooterContent};
use leptos::prelude::*;

#[component]
pub fn Page(brand: Brand, footer: FooterContent, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen overflow-x-hidden bg-white text-zinc-900 antialiased dark:bg-zinc-950 dark:text-zinc-50">
            {children()}
            <Footer brand=brand content=footer />
        </div>
    }
}
