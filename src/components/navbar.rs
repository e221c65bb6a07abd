//! Top navigation bar.
//!
//! Branches three ways on the session, like the access guard: nothing
//! auth-dependent is shown until the provider has reported once.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::toast::{show_error, show_success};
use crate::state::auth::{Session, SessionStore};
use crate::state::notice::NoticeState;
use crate::util::reactive::set_if_live;

const AVATAR_PLACEHOLDER: &str = "https://via.placeholder.com/40";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let store = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let store = store.clone();
        leptos::task::spawn_local(async move {
            match store.logout().await {
                Ok(()) => show_success(notices, "Logged out", "You have been signed out."),
                Err(e) => show_error(notices, "logout", &e, "Failed to sign out."),
            }
            set_if_live(busy, false);
        });
    };

    let account = move || match session.get() {
        Session::Initializing => view! { <li class="navbar__loading">"Loading..."</li> }.into_any(),
        Session::Authenticated(identity) => {
            let avatar = identity.photo_url.clone().unwrap_or_else(|| AVATAR_PLACEHOLDER.to_owned());
            let label = identity.label().to_owned();
            view! {
                <li><A href="/add-visa">"Add Visa"</A></li>
                <li><A href="/my-added-visas">"My Added Visas"</A></li>
                <li><A href="/my-applications">"My Applications"</A></li>
                <li class="navbar__user">
                    <img class="navbar__avatar" src=avatar alt="avatar" title=label.clone()/>
                    <span class="navbar__name">{label}</span>
                    <button class="btn btn--small" on:click=on_logout.clone() disabled=move || busy.get()>
                        "Logout"
                    </button>
                </li>
            }
            .into_any()
        }
        Session::Unauthenticated => view! {
            <li><A href="/login">"Login"</A></li>
            <li><A href="/register">"Register"</A></li>
        }
        .into_any(),
    };

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Visa Navigator"</A>
            <ul class="navbar__links">
                <li><A href="/">"Home"</A></li>
                <li><A href="/all-visas">"All Visas"</A></li>
                {account}
            </ul>
        </nav>
    }
}
