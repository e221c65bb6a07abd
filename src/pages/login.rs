//! Email/password and federated sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{show_error, show_success};
use crate::state::auth::SessionStore;
use crate::state::notice::NoticeState;
use crate::util::reactive::set_if_live;

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let store = store.clone();
            let navigate = navigate.clone();
            let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                match store.login(&email_value, &password_value).await {
                    Ok(()) => {
                        show_success(notices, "Welcome back!", "You are now signed in.");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => show_error(notices, "login", &e, "Failed to sign in."),
                }
                set_if_live(busy, false);
            });
        }
    };

    let on_google = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match store.login_with_federated_provider().await {
                Ok(()) => {
                    show_success(notices, "Welcome!", "You are now signed in.");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => show_error(notices, "google login", &e, "Failed to sign in with Google."),
            }
            set_if_live(busy, false);
        });
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Login"</h1>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Password"
                        <input
                            class="form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <div class="auth-card__divider">"or"</div>
                <button class="btn btn--google" on:click=on_google disabled=move || busy.get()>
                    "Continue with Google"
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? " <A href="/register">"Register"</A>
                </p>
            </div>
        </section>
    }
}
