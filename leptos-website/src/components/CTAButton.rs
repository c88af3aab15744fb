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

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Square, for a single glyph.
    Icon,
}

/// Class list shared by every button-looking element on the page.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let base_classes = "inline-flex items-center justify-center font-medium transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-indigo-500 disabled:pointer-events-none disabled:opacity-50";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-zinc-900 text-white hover:bg-zinc-800 dark:bg-zinc-50 dark:text-zinc-900 dark:hover:bg-zinc-200",
        ButtonVariant::Secondary => "bg-zinc-100 text-zinc-900 hover:bg-zinc-200 dark:bg-zinc-800 dark:text-zinc-50 dark:hover:bg-zinc-700",
        ButtonVariant::Ghost => "hover:bg-zinc-100 dark:hover:bg-zinc-800",
    };

    let size_classes = match size {
        ButtonSize::Small => "h-9 px-3 text-sm rounded-md",
        ButtonSize::Medium => "h-10 px-4 py-2 text-sm rounded-md",
        ButtonSize::Large => "h-11 px-8 text-base rounded-md",
        ButtonSize::Icon => "h-10 w-10 rounded-md",
    };

    let mut class = format!("{base_classes} {variant_classes} {size_classes}");
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(into, default = String::new())] class: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
) -> impl IntoView {
    let class = button_class(variant, size, &class);

    match href {
        Some(href) => view! { <a href=href class=class>{children()}</a> }.into_any(),
        None => view! {
            <button type=button_type class=class>
                {children()}
            </button>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_classes_are_appended() {
        let class = button_class(ButtonVariant::Primary, ButtonSize::Large, " w-full ");
        assert!(class.ends_with(" w-full"));
        assert!(class.contains("h-11"));
    }

    #[test]
    fn variants_differ() {
        let ghost = button_class(ButtonVariant::Ghost, ButtonSize::Icon, "");
        let secondary = button_class(ButtonVariant::Secondary, ButtonSize::Icon, "");
        assert_ne!(ghost, secondary);
        assert!(ghost.contains("w-10"));
        assert!(!ghost.ends_with(' '));
    }
}
