//! Loading and failure placeholders shared by pages.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="status status--loading" role="status" aria-live="polite">
            <span class="spinner"></span>
        </div>
    }
}

/// Inline failure message for a screen whose initial fetch failed.
#[component]
pub fn LoadFailed(message: String) -> impl IntoView {
    view! {
        <div class="status status--error" role="alert">
            <p>{message}</p>
        </div>
    }
}
