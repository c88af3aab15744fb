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
use crate::components::CTAButton::{button_class, ButtonSize, ButtonVariant, CTAButton};
use crate::components::DarkModeToggle::DarkModeToggle;
use crate::icons::{Icon, IconName};
use acme_types::content::{Brand, Hero, NavItem, SectionAnchor};
use acme_types::Disclosure;
use leptos::prelude::*;

pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Open state of the small-screen navigation.
#[derive(Debug, Clone, Copy)]
pub struct MobileMenuState(pub RwSignal<Disclosure>);

impl MobileMenuState {
    pub fn is_open(&self) -> bool {
        self.0.with(|menu| menu.is_open())
    }

    pub fn toggle(&self) {
        self.0.update(|menu| {
            menu.toggle();
        });
    }

    pub fn follow_link(&self) {
        self.0.update(Disclosure::follow_link);
    }
}

#[component]
pub fn HeroHeader(brand: Brand, nav: Vec<NavItem>, hero: Hero) -> impl IntoView {
    let desktop_nav = nav.clone();

    view! {
        <MobileMenuProvider>
            <header class="sticky top-0 z-50 w-full border-b border-zinc-200 bg-white/80 backdrop-blur dark:border-zinc-800 dark:bg-zinc-950/80">
                <div class="container mx-auto flex h-16 items-center justify-between px-4">
                    <BrandMark brand=brand />

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-6" aria-label="Main">
                        {desktop_nav
                            .into_iter()
                            .map(|item| view! { <NavLink item=item /> })
                            .collect_view()}
                    </nav>

                    <div class="flex items-center gap-2">
                        <DarkModeToggle />
                        <CTAButton size=ButtonSize::Small class="hidden md:inline-flex">
                            "Sign in"
                        </CTAButton>
                        <MobileMenuButton />
                    </div>
                </div>

                <MobileMenu nav=nav />
            </header>

            <HeroSection hero=hero />
        </MobileMenuProvider>
    }
}

#[component]
fn BrandMark(brand: Brand) -> impl IntoView {
    let Brand { name, badge, .. } = brand;

    view! {
        <a href="#" class="flex items-center gap-2 font-bold text-lg">
            <span class="inline-flex h-8 w-8 items-center justify-center rounded-lg bg-zinc-900 text-white dark:bg-zinc-50 dark:text-zinc-900">
                <Icon name=IconName::Sparkles class="h-4 w-4" />
            </span>
            <span>{name}</span>
            {badge.map(|badge| view! { <Badge class="ml-1">{badge}</Badge> })}
        </a>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    view! {
        <a
            href=item.target.href()
            class="text-sm font-medium text-zinc-600 hover:text-zinc-900 transition-colors dark:text-zinc-400 dark:hover:text-zinc-50"
        >
            {item.label}
        </a>
    }
}

#[component]
fn MobileMenuProvider(children: Children) -> impl IntoView {
    provide_context(MobileMenuState(RwSignal::new(Disclosure::new())));
    children()
}

#[component]
fn MobileMenuButton() -> impl IntoView {
    let menu = expect_context::<MobileMenuState>();

    view! {
        <button
            type="button"
            id="mobile-menu-button"
            class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "md:hidden")
            on:click=move |_| menu.toggle()
            aria-label="Toggle navigation menu"
            aria-controls=MOBILE_MENU_ID
            aria-expanded=move || menu.is_open().to_string()
        >
            <Show
                when=move || menu.is_open()
                fallback=|| view! { <Icon name=IconName::Menu /> }
            >
                <Icon name=IconName::Close />
            </Show>
        </button>
    }
}

#[component]
fn MobileMenu(nav: Vec<NavItem>) -> impl IntoView {
    let menu = expect_context::<MobileMenuState>();

    view! {
        <nav
            id=MOBILE_MENU_ID
            class="md:hidden border-t border-zinc-200 bg-white px-4 py-4 dark:border-zinc-800 dark:bg-zinc-950"
            aria-label="Mobile"
            hidden=move || !menu.is_open()
        >
            <div class="flex flex-col gap-3">
                {nav
                    .into_iter()
                    .map(|item| {
                        view! { <MobileNavLink item=item on_click=move || menu.follow_link() /> }
                    })
                    .collect_view()}
                <CTAButton
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Small
                    class="w-full"
                >
                    "Sign in"
                </CTAButton>
            </div>
        </nav>
    }
}

#[component]
fn MobileNavLink<F>(item: NavItem, on_click: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <a
            href=item.target.href()
            class="block py-1 text-sm font-medium text-zinc-600 hover:text-zinc-900 dark:text-zinc-400 dark:hover:text-zinc-50"
            on:click=move |_| on_click()
        >
            {item.label}
        </a>
    }
}

#[component]
fn HeroSection(hero: Hero) -> impl IntoView {
    let Hero {
        headline,
        lead,
        primary_cta,
        secondary_cta,
        rating,
        highlights,
    } = hero;

    view! {
        <section class="relative overflow-hidden border-b border-zinc-200 dark:border-zinc-800">
            <div class="container mx-auto grid items-center gap-10 px-4 py-20 md:grid-cols-2">
                <div>
                    <h1 class="text-4xl font-bold tracking-tight md:text-6xl">{headline}</h1>
                    <p class="mt-4 text-lg text-zinc-600 dark:text-zinc-400">{lead}</p>
                    <div class="mt-6 flex flex-col gap-3 sm:flex-row">
                        <CTAButton size=ButtonSize::Large href=SectionAnchor::Pricing.href() class="group">
                            {primary_cta}
                            <Icon name=IconName::ArrowRight class="ml-2 h-4 w-4 transition-transform group-hover:translate-x-0.5" />
                        </CTAButton>
                        <CTAButton
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Large
                            href=SectionAnchor::How.href()
                        >
                            {secondary_cta}
                        </CTAButton>
                    </div>
                    <div class="mt-6 flex flex-wrap items-center gap-4 text-sm text-zinc-600 dark:text-zinc-400">
                        {rating
                            .map(|rating| {
                                view! {
                                    <span class="flex items-center gap-1">
                                        <Icon name=IconName::Star class="h-4 w-4" />
                                        {rating}
                                    </span>
                                }
                            })}
                        {highlights
                            .into_iter()
                            .map(|highlight| view! { <span>{highlight}</span> })
                            .collect_view()}
                    </div>
                </div>
                <ProductPreview />
            </div>

            // decorative gradient
            <div
                aria-hidden="true"
                class="pointer-events-none absolute -left-40 -top-40 h-[30rem] w-[30rem] rounded-full bg-gradient-to-tr from-indigo-500/20 to-cyan-300/20 blur-3xl"
            ></div>
        </section>
    }
}

/// Placeholder app screenshot built from blocks.
#[component]
fn ProductPreview() -> impl IntoView {
    view! {
        <div class="relative" aria-label="Product preview">
            <div class="rounded-2xl border border-zinc-200 bg-gradient-to-br from-zinc-100 to-white p-4 shadow-sm dark:border-zinc-800 dark:from-zinc-900 dark:to-zinc-950">
                <div class="aspect-[16/10] w-full rounded-xl border border-zinc-200 bg-white dark:border-zinc-800 dark:bg-zinc-950">
                    <div class="grid h-full grid-rows-6 gap-3 p-4">
                        <div class="row-span-1 flex items-center gap-3">
                            <div class="h-6 w-24 rounded-md bg-zinc-100 dark:bg-zinc-800"></div>
                            <div class="h-6 w-12 rounded-md bg-zinc-100 dark:bg-zinc-800"></div>
                        </div>
                        <div class="row-span-3 rounded-lg bg-zinc-100 dark:bg-zinc-800"></div>
                        <div class="row-span-2 grid grid-cols-3 gap-3">
                            {(0..3)
                                .map(|_| view! { <div class="rounded-lg bg-zinc-100 dark:bg-zinc-800"></div> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
