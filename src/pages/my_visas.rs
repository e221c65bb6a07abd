//! Listings created by the signed-in identity, with update and delete.
//!
//! Deleting removes the card locally; updating re-fetches the owner list so
//! server-side normalization is reflected.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::status::{LoadFailed, LoadingSpinner};
use crate::components::toast::{log_failure, show_error, show_success};
use crate::components::visa_card::{format_fee, image_or_placeholder};
use crate::components::visa_form::{VisaFormFields, VisaFormState};
use crate::error::AppError;
use crate::net::api::{VisaApi, VisaQuery};
use crate::net::types::VisaListing;
use crate::state::auth::Session;
use crate::state::fetch::{FetchState, remove_by_key};
use crate::state::notice::NoticeState;
use crate::util::auth::signed_in_email;
use crate::util::reactive::{set_if_live, update_if_live};

/// Load the owner's listings into `visas`.
fn load_owned(api: VisaApi, session: RwSignal<Session>, visas: RwSignal<FetchState<Vec<VisaListing>>>) {
    leptos::task::spawn_local(async move {
        let result = match signed_in_email(session) {
            Some(email) => api.list_visas(&VisaQuery::owned_by(email)).await,
            None => Err(AppError::validation("You must be signed in to view your visas.")),
        };
        if let Err(e) = &result {
            log_failure("load my visas", e);
        }
        set_if_live(visas, FetchState::from_result(result));
    });
}

#[component]
pub fn MyVisasPage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let visas = RwSignal::new(FetchState::<Vec<VisaListing>>::Loading);
    let pending_delete = RwSignal::new(None::<String>);
    let editing = RwSignal::new(None::<String>);
    let form = RwSignal::new(VisaFormState::default());
    let busy = RwSignal::new(false);

    load_owned(api.clone(), session, visas);

    let on_delete = Callback::new(move |id: String| pending_delete.set(Some(id)));
    let on_edit = Callback::new(move |visa: VisaListing| {
        form.set(VisaFormState::from_listing(&visa));
        editing.set(Some(visa.id));
    });

    let confirm_delete = {
        let api = api.clone();
        Callback::new(move |()| {
            let Some(id) = pending_delete.get_untracked() else {
                return;
            };
            pending_delete.set(None);
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.delete_visa(&id).await {
                    Ok(()) => {
                        update_if_live(visas, |state| remove_by_key(state, &id));
                        show_success(notices, "Deleted!", "The visa has been deleted.");
                    }
                    Err(e) => show_error(notices, "delete visa", &e, "There was an error deleting the visa."),
                }
            });
        })
    };

    let submit_update = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let Some(id) = editing.get_untracked() else {
            return;
        };
        let update = match form.with_untracked(VisaFormState::to_update) {
            Ok(update) => update,
            Err(e) => {
                show_error(notices, "update visa", &e, "There was an error updating the visa.");
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.update_visa(&id, &update).await {
                Ok(()) => {
                    set_if_live(editing, None);
                    show_success(notices, "Updated!", "The visa has been updated successfully.");
                    load_owned(api, session, visas);
                }
                Err(e) => show_error(notices, "update visa", &e, "There was an error updating the visa."),
            }
            set_if_live(busy, false);
        });
    });

    view! {
        <section class="section">
            <h1 class="section__title">"My Added Visas"</h1>
            {move || match visas.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(e) => {
                    view! { <LoadFailed message=e.user_message("There was an error fetching your visas.")/> }.into_any()
                }
                FetchState::Ready(items) if items.is_empty() => {
                    view! { <p class="empty">"No visas found. Add some visas!"</p> }.into_any()
                }
                FetchState::Ready(items) => view! {
                    <div class="visa-grid">
                        {items
                            .into_iter()
                            .map(|visa| view! { <OwnedVisaCard visa on_edit on_delete/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Are you sure?"
                    message="You won't be able to revert this!"
                    confirm_label="Yes, delete it!"
                    on_confirm=confirm_delete
                    on_cancel=Callback::new(move |()| pending_delete.set(None))
                />
            </Show>
            <Show when=move || editing.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Update Visa"</h2>
                        <form
                            class="form"
                            on:submit=move |ev: leptos::ev::SubmitEvent| {
                                ev.prevent_default();
                                submit_update.run(());
                            }
                        >
                            <VisaFormFields form/>
                            <div class="dialog__actions">
                                <button class="btn" type="button" on:click=move |_| editing.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Update"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn OwnedVisaCard(visa: VisaListing, on_edit: Callback<VisaListing>, on_delete: Callback<String>) -> impl IntoView {
    let id = visa.id.clone();
    let country = visa.country.clone();
    let validity = visa.validity.clone().unwrap_or_else(|| "N/A".to_owned());
    let image = image_or_placeholder(&visa.image_url);
    let category = visa.category.to_string();
    let fee = format_fee(&visa.fee);
    let processing_time = visa.processing_time.clone();

    view! {
        <article class="visa-card">
            <img class="visa-card__image" src=image alt=country.clone()/>
            <div class="visa-card__body">
                <h3 class="visa-card__country">{country}</h3>
                <p class="visa-card__type">{category}</p>
                <p>"Fee: " {fee}</p>
                <p>"Validity: " {validity}</p>
                <p>"Processing Time: " {processing_time}</p>
                <div class="visa-card__actions">
                    <button class="btn btn--primary" on:click=move |_| on_edit.run(visa.clone())>
                        "Update"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                        "Delete"
                    </button>
                </div>
            </div>
        </article>
    }
}
