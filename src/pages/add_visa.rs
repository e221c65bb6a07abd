//! Publish a new listing owned by the signed-in identity.

use leptos::prelude::*;

use crate::components::toast::{show_error, show_success};
use crate::components::visa_form::{VisaFormFields, VisaFormState};
use crate::error::AppError;
use crate::net::api::VisaApi;
use crate::state::auth::Session;
use crate::state::notice::NoticeState;
use crate::util::auth::signed_in_email;
use crate::util::reactive::set_if_live;

#[component]
pub fn AddVisaPage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let form = RwSignal::new(VisaFormState::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(owner) = signed_in_email(session) else {
            show_error(
                notices,
                "add visa",
                &AppError::validation("You must be logged in to add a visa."),
                "Error adding visa",
            );
            return;
        };
        let visa = match form.with_untracked(|f| f.to_new_visa(&owner)) {
            Ok(visa) => visa,
            Err(e) => {
                show_error(notices, "add visa", &e, "Error adding visa");
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_visa(&visa).await {
                Ok(()) => {
                    show_success(notices, "Added!", "Visa added successfully!");
                    set_if_live(form, VisaFormState::default());
                }
                Err(e) => show_error(notices, "add visa", &e, "Error adding visa"),
            }
            set_if_live(busy, false);
        });
    };

    view! {
        <section class="section section--narrow">
            <h1 class="section__title">"Add Visa"</h1>
            <form class="form" on:submit=on_submit>
                <VisaFormFields form with_image=true/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Add Visa"
                </button>
            </form>
        </section>
    }
}
