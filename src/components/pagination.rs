//! Numbered page selector.

use leptos::prelude::*;

/// Page buttons `1..=total`; `current` is 1-based.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<usize>,
    #[prop(into)] total: Signal<usize>,
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="pagination__step"
                disabled=move || current.get() <= 1
                on:click=move |_| on_select.run(current.get_untracked().saturating_sub(1))
            >
                "Prev"
            </button>
            {move || {
                (1..=total.get())
                    .map(|page| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || current.get() == page
                                on:click=move |_| on_select.run(page)
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__step"
                disabled=move || current.get() >= total.get()
                on:click=move |_| on_select.run(current.get_untracked() + 1)
            >
                "Next"
            </button>
        </nav>
    }
}
