//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            <A href="/" attr:class="btn btn--primary">"Back to Home"</A>
        </section>
    }
}
