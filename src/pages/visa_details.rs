//! Single listing with the apply modal.

#[cfg(test)]
#[path = "visa_details_test.rs"]
mod visa_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{LoadFailed, LoadingSpinner};
use crate::components::toast::{log_failure, show_error, show_success};
use crate::components::visa_card::{format_fee, image_or_placeholder};
use crate::error::AppError;
use crate::net::api::VisaApi;
use crate::net::types::{NewApplication, VisaListing};
use crate::state::auth::Session;
use crate::state::fetch::{FetchState, RequestSeq};
use crate::state::notice::NoticeState;
use crate::util::auth::signed_in_email;
use crate::util::date::today_iso_date;
use crate::util::reactive::set_if_live;

/// Build the application body for `visa`.
///
/// # Errors
///
/// `Validation` when the first or last name is blank, or no email is known.
pub fn build_application(
    visa: &VisaListing,
    email: &str,
    first_name: &str,
    last_name: &str,
    applied_date: String,
) -> Result<NewApplication, AppError> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    if first_name.is_empty() || last_name.is_empty() {
        return Err(AppError::validation("First Name and Last Name are required."));
    }
    if email.trim().is_empty() {
        return Err(AppError::validation("You must be signed in to apply."));
    }
    Ok(NewApplication {
        visa_id: visa.id.clone(),
        country: visa.country.clone(),
        visa_type: visa.category.clone(),
        country_image_url: visa.image_url.clone(),
        fee: visa.fee.clone(),
        email: email.trim().to_owned(),
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        applied_date,
    })
}

#[component]
pub fn VisaDetailsPage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let params = use_params_map();
    let visa = RwSignal::new(FetchState::<VisaListing>::Loading);
    let applying = RwSignal::new(false);
    let requests = RequestSeq::default();

    Effect::new(move || {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        let ticket = requests.begin();
        visa.set(FetchState::Loading);
        applying.set(false);
        let api = api.clone();
        let requests = requests.clone();
        leptos::task::spawn_local(async move {
            let result = api.get_visa(&id).await;
            if !requests.is_current(ticket) {
                log::debug!("visa details: dropping stale response for {id}");
                return;
            }
            if let Err(e) = &result {
                log_failure("load visa details", e);
            }
            set_if_live(visa, FetchState::from_result(result));
        });
    });

    view! {
        <section class="section section--narrow">
            {move || match visa.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(e) => {
                    view! { <LoadFailed message=e.user_message("Failed to fetch visa details.")/> }.into_any()
                }
                FetchState::Ready(listing) => {
                    let modal_listing = listing.clone();
                    view! {
                        <h1 class="section__title">"Visa Details for " {listing.country.clone()}</h1>
                        <div class="details-card">
                            <img
                                class="details-card__image"
                                src=image_or_placeholder(&listing.image_url)
                                alt=listing.country.clone()
                            />
                            <p>"Visa Type: " {listing.category.to_string()}</p>
                            <p>"Processing Time: " {listing.processing_time.clone()}</p>
                            <p>"Fee: " {format_fee(&listing.fee)}</p>
                            <p>"Validity: " {listing.validity.clone().unwrap_or_else(|| "N/A".to_owned())}</p>
                            <p>"Description: " {listing.description.clone()}</p>
                            {listing
                                .application_method
                                .clone()
                                .map(|method| view! { <p>"Application Method: " {method}</p> })}
                            <button class="btn btn--primary" on:click=move |_| applying.set(true)>
                                "Apply for the visa"
                            </button>
                        </div>
                        <Show when=move || applying.get()>
                            <ApplyDialog visa=modal_listing.clone() on_close=Callback::new(move |()| applying.set(false))/>
                        </Show>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ApplyDialog(visa: VisaListing, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let email = signed_in_email(session).unwrap_or_default();
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let applied_date = today_iso_date();
    let title = format!("Apply for {}", visa.country);
    let fee = format_fee(&visa.fee);

    let submit = {
        let email = email.clone();
        let applied_date = applied_date.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let application = match build_application(
                &visa,
                &email,
                &first_name.get_untracked(),
                &last_name.get_untracked(),
                applied_date.clone(),
            ) {
                Ok(application) => application,
                Err(e) => {
                    show_error(notices, "apply", &e, "Failed to submit application.");
                    return;
                }
            };
            busy.set(true);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.create_application(&application).await {
                    Ok(()) => {
                        show_success(notices, "Success!", "Your application has been submitted!");
                        on_close.run(());
                    }
                    Err(e) => show_error(notices, "apply", &e, "Failed to submit application."),
                }
                set_if_live(busy, false);
            });
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form class="form" on:submit=submit>
                    <label class="form__label">
                        "Email"
                        <input class="form__input" type="email" value=email disabled=true/>
                    </label>
                    <label class="form__label">
                        "First Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Last Name"
                        <input
                            class="form__input"
                            type="text"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__label">
                        "Fee"
                        <input class="form__input" type="text" value=fee disabled=true/>
                    </label>
                    <label class="form__label">
                        "Applied Date"
                        <input class="form__input" type="date" value=applied_date disabled=true/>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Apply"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
