//! Account creation followed by a profile update.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::{show_error, show_success};
use crate::error::AppError;
use crate::net::types::ProfileUpdate;
use crate::state::auth::SessionStore;
use crate::state::notice::NoticeState;
use crate::util::reactive::set_if_live;

const MIN_PASSWORD_LEN: usize = 6;

/// Checked registration input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub profile: ProfileUpdate,
}

/// Password rule: at least six characters with an uppercase and a lowercase
/// letter.
///
/// # Errors
///
/// `Validation` describing the first unmet rule.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::validation("Password must be at least 6 characters long."));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(AppError::validation("Password must contain an uppercase letter."));
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(AppError::validation("Password must contain a lowercase letter."));
    }
    Ok(())
}

/// Validate the register form.
///
/// # Errors
///
/// `Validation` for a blank name or email, or a password that breaks the rule.
pub fn validate_registration(name: &str, email: &str, photo_url: &str, password: &str) -> Result<Registration, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required."));
    }
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::validation("Email is required."));
    }
    validate_password(password)?;
    let photo_url = photo_url.trim();
    Ok(Registration {
        email: email.to_owned(),
        password: password.to_owned(),
        profile: ProfileUpdate {
            display_name: Some(name.to_owned()),
            photo_url: (!photo_url.is_empty()).then(|| photo_url.to_owned()),
        },
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let photo_url = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let registration = match validate_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &photo_url.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(registration) => registration,
            Err(e) => {
                show_error(notices, "register", &e, "Registration failed.");
                return;
            }
        };
        busy.set(true);
        let store = store.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = async {
                store.register(&registration.email, &registration.password).await?;
                store.update_profile(registration.profile).await
            }
            .await;
            match result {
                Ok(()) => {
                    show_success(notices, "Welcome!", "Your account has been created.");
                    navigate("/", NavigateOptions::default());
                }
                Err(e) => show_error(notices, "register", &e, "Registration failed."),
            }
            set_if_live(busy, false);
        });
    };

    let text_input = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Register"</h1>
                <form class="form" on:submit=on_submit>
                    {text_input("Name", "text", name)}
                    {text_input("Email", "email", email)}
                    {text_input("Photo URL", "url", photo_url)}
                    {text_input("Password", "password", password)}
                    <p class="form__hint">
                        "At least 6 characters, with an uppercase and a lowercase letter."
                    </p>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? " <A href="/login">"Login"</A>
                </p>
            </div>
        </section>
    }
}
