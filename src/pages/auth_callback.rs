//! Landing page of the consent popup.
//!
//! Hands the URL fragment back to the opener through `localStorage` and
//! closes the popup window.

use leptos::prelude::*;

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        if let Err(e) = crate::net::identity_popup::deliver_consent_result() {
            log::error!("consent callback failed ({}): {e}", e.error_code());
        }
    }

    view! {
        <section class="auth-page">
            <p>"Completing sign-in. You can close this window."</p>
        </section>
    }
}
