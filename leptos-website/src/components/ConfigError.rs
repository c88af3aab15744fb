// SPDX-License-Identifier: MIT OR Apache-2.0

use leptos::prelude::*;

/// Shown instead of the page when no content could be loaded.
#[component]
pub fn ConfigError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex min-h-screen items-center justify-center p-8">
            <div id="config-error" role="alert" class="max-w-md rounded-lg border border-red-300 bg-red-50 p-6 text-red-900">
                <h2 class="mb-2 text-lg font-semibold">"Configuration error"</h2>
                <p class="text-sm">{message}</p>
                <p class="mt-4 text-sm">"Please reload the page or contact the site owner."</p>
            </div>
        </div>
    }
}
