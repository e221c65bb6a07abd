//! Applications submitted by the signed-in identity.

use leptos::prelude::*;

use crate::components::status::{LoadFailed, LoadingSpinner};
use crate::components::toast::{log_failure, show_error, show_success};
use crate::components::visa_card::{format_fee, image_or_placeholder};
use crate::error::AppError;
use crate::net::api::VisaApi;
use crate::net::types::Application;
use crate::state::auth::Session;
use crate::state::fetch::{FetchState, remove_by_key};
use crate::state::notice::NoticeState;
use crate::util::auth::signed_in_email;
use crate::util::reactive::{set_if_live, update_if_live};

#[component]
pub fn MyApplicationsPage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let applications = RwSignal::new(FetchState::<Vec<Application>>::Loading);

    {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = match signed_in_email(session) {
                Some(email) => api.list_applications(&email).await,
                None => Err(AppError::validation("You must be signed in to view applications.")),
            };
            if let Err(e) = &result {
                log_failure("load applications", e);
            }
            set_if_live(applications, FetchState::from_result(result));
        });
    }

    let cancel = Callback::new(move |id: String| {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_application(&id).await {
                Ok(()) => {
                    update_if_live(applications, |state| remove_by_key(state, &id));
                    show_success(notices, "Cancelled!", "Your application has been cancelled.");
                }
                Err(e) => show_error(notices, "cancel application", &e, "Failed to cancel application."),
            }
        });
    });

    view! {
        <section class="section">
            <h1 class="section__title">"My Visa Applications"</h1>
            {move || match applications.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(e) => {
                    view! { <LoadFailed message=e.user_message("Failed to load your applications.")/> }.into_any()
                }
                FetchState::Ready(items) if items.is_empty() => {
                    view! { <p class="empty">"You have not applied for any visas yet."</p> }.into_any()
                }
                FetchState::Ready(items) => view! {
                    <div class="visa-grid">
                        {items
                            .into_iter()
                            .map(|application| view! { <ApplicationCard application on_cancel=cancel/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn ApplicationCard(application: Application, on_cancel: Callback<String>) -> impl IntoView {
    let id = application.id.clone();
    let country = application.country.clone();
    let applicant = format!("{} {}", application.first_name, application.last_name);
    let visa_type = application.visa_type.map(|t| t.to_string()).unwrap_or_else(|| "N/A".to_owned());

    view! {
        <article class="visa-card">
            <img
                class="visa-card__image"
                src=image_or_placeholder(&application.country_image_url)
                alt=country.clone()
            />
            <div class="visa-card__body">
                <h3 class="visa-card__country">{country}</h3>
                <p>"Visa Type: " {visa_type}</p>
                <p>"Fee: " {format_fee(&application.fee)}</p>
                <p>"Applied: " {application.applied_date}</p>
                <p>"Applicant: " {applicant}</p>
                <p>"Email: " {application.email}</p>
                <button class="btn btn--danger" on:click=move |_| on_cancel.run(id.clone())>
                    "Cancel"
                </button>
            </div>
        </article>
    }
}
