//! Site footer.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"Visa Navigator"</span>
                <p>"Find the visa you need and track every application in one place."</p>
            </div>
            <nav class="footer__links">
                <A href="/">"Home"</A>
                <A href="/all-visas">"All Visas"</A>
                <A href="/add-visa">"Add Visa"</A>
            </nav>
            <p class="footer__contact">"support@visa-navigator.example"</p>
        </footer>
    }
}
