//! Full catalog with country search, category filter and pagination.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status::{LoadFailed, LoadingSpinner};
use crate::components::toast::log_failure;
use crate::components::visa_card::VisaCard;
use crate::net::api::{VisaApi, VisaQuery};
use crate::net::types::VisaCategory;
use crate::state::catalog::BrowseState;
use crate::state::fetch::FetchState;
use crate::util::reactive::set_if_live;

#[component]
pub fn AllVisasPage() -> impl IntoView {
    let api = expect_context::<VisaApi>();
    let browse = RwSignal::new(FetchState::<BrowseState>::Loading);

    leptos::task::spawn_local(async move {
        let result = api.list_visas(&VisaQuery::all()).await;
        if let Err(e) = &result {
            log_failure("load visas", e);
        }
        set_if_live(browse, FetchState::from_result(result.map(BrowseState::new)));
    });

    let edit = move |f: &dyn Fn(&mut BrowseState)| {
        browse.update(|state| {
            if let Some(b) = state.ready_mut() {
                f(b);
            }
        });
    };

    let query = move || browse.with(|s| s.ready().map(|b| b.filter.query.clone()).unwrap_or_default());
    let category = move || {
        browse.with(|s| {
            s.ready()
                .and_then(|b| b.filter.category.as_ref().map(ToString::to_string))
                .unwrap_or_default()
        })
    };
    let page = Signal::derive(move || browse.with(|s| s.ready().map_or(1, |b| b.page)));
    let total = Signal::derive(move || browse.with(|s| s.ready().map_or(0, BrowseState::total_pages)));
    let on_page = Callback::new(move |target: usize| edit(&|b| b.go_to(target)));

    view! {
        <section class="section">
            <h1 class="section__title">"All Visas"</h1>
            <div class="filters">
                <input
                    class="form__input filters__search"
                    type="search"
                    placeholder="Search by country"
                    prop:value=query
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|b| b.set_query(value.clone()));
                    }
                />
                <select
                    class="form__input filters__category"
                    prop:value=category
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|b| b.set_category(VisaCategory::parse(&value)));
                    }
                >
                    <option value="">"All Visa Types"</option>
                    {VisaCategory::KNOWN
                        .iter()
                        .map(|c| {
                            let value = c.as_str().to_owned();
                            let label = value.clone();
                            view! { <option value=value>{label}</option> }
                        })
                        .collect_view()}
                </select>
            </div>
            {move || match browse.get() {
                FetchState::Loading => view! { <LoadingSpinner/> }.into_any(),
                FetchState::Failed(e) => {
                    view! { <LoadFailed message=e.user_message("Failed to load visas.")/> }.into_any()
                }
                FetchState::Ready(state) => {
                    let visible = state.visible();
                    let paged = state.show_pagination();
                    if visible.is_empty() {
                        view! { <p class="empty">"No visas match your search."</p> }.into_any()
                    } else {
                        view! {
                            <div class="visa-grid">
                                {visible.into_iter().map(|visa| view! { <VisaCard visa/> }).collect_view()}
                            </div>
                            <Show when=move || paged>
                                <Pagination current=page total=total on_select=on_page/>
                            </Show>
                        }
                        .into_any()
                    }
                }
            }}
        </section>
    }
}
