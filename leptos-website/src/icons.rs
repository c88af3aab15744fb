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

use acme_types::content::Glyph;
use leptos::prelude::*;

/// 24x24 stroke icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    Menu,
    Close,
    Sun,
    Moon,
    ArrowRight,
    CheckCircle,
    ChevronDown,
    Star,
    Zap,
    Shield,
    Sparkles,
    TrendingUp,
    Github,
    Twitter,
    Linkedin,
}

impl From<Glyph> for IconName {
    fn from(glyph: Glyph) -> Self {
        match glyph {
            Glyph::Zap => IconName::Zap,
            Glyph::Shield => IconName::Shield,
            Glyph::Sparkles => IconName::Sparkles,
            Glyph::TrendingUp => IconName::TrendingUp,
            Glyph::Github => IconName::Github,
            Glyph::Twitter => IconName::Twitter,
            Glyph::Linkedin => IconName::Linkedin,
        }
    }
}

impl IconName {
    fn paths(self) -> &'static [&'static str] {
        match self {
            IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            IconName::Close => &["M18 6 6 18", "m6 6 12 12"],
            IconName::Sun => &[
                "M16 12a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconName::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            IconName::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            IconName::CheckCircle => &[
                "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
                "m9 12 2 2 4-4",
            ],
            IconName::ChevronDown => &["m6 9 6 6 6-6"],
            IconName::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            IconName::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            IconName::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            IconName::Sparkles => &[
                "M9.94 15.5A2 2 0 0 0 8.5 14.06l-6.14-1.58a.5.5 0 0 1 0-.96L8.5 9.94A2 2 0 0 0 9.94 8.5l1.58-6.14a.5.5 0 0 1 .96 0l1.58 6.14a2 2 0 0 0 1.44 1.44l6.14 1.58a.5.5 0 0 1 0 .96l-6.14 1.58a2 2 0 0 0-1.44 1.44l-1.58 6.14a.5.5 0 0 1-.96 0z",
                "M20 3v4",
                "M22 5h-4",
            ],
            IconName::TrendingUp => &["M22 7 13.5 15.5 8.5 10.5 2 17", "M16 7h6v6"],
            IconName::Github => &[
                "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22",
            ],
            IconName::Twitter => &[
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            ],
            IconName::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
        }
    }
}

#[component]
pub fn Icon(
    name: IconName,
    #[prop(into, default = "h-5 w-5".to_string())] class: String,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {name.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
