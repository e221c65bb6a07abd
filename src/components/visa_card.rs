//! Card summarizing one visa listing.

#[cfg(test)]
#[path = "visa_card_test.rs"]
mod visa_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Fee, VisaListing};
use crate::util::url::encode_component;

/// Placeholder shown when a listing has no image.
pub const IMAGE_PLACEHOLDER: &str = "https://via.placeholder.com/320x180?text=Visa";

/// Display form of a fee, e.g. `$40` or `$12.50`. Free text is shown as-is.
pub fn format_fee(fee: &Fee) -> String {
    match fee {
        Fee::Amount(amount) if amount.fract().abs() < f64::EPSILON => format!("${amount:.0}"),
        Fee::Amount(amount) => format!("${amount:.2}"),
        Fee::Text(text) => text.clone(),
    }
}

/// Route path of a listing's details page.
pub fn details_href(id: &str) -> String {
    format!("/visa-details/{}", encode_component(id))
}

/// Image source for a listing, falling back to the placeholder.
pub fn image_or_placeholder(url: &str) -> String {
    if url.trim().is_empty() { IMAGE_PLACEHOLDER.to_owned() } else { url.to_owned() }
}

#[component]
pub fn VisaCard(visa: VisaListing) -> impl IntoView {
    let href = details_href(&visa.id);
    let image = image_or_placeholder(&visa.image_url);
    let validity = visa.validity.clone().unwrap_or_else(|| "N/A".to_owned());

    view! {
        <article class="visa-card">
            <img class="visa-card__image" src=image alt=visa.country.clone()/>
            <div class="visa-card__body">
                <h3 class="visa-card__country">{visa.country.clone()}</h3>
                <p class="visa-card__type">{visa.category.to_string()}</p>
                <p>"Processing time: " {visa.processing_time.clone()}</p>
                <p>"Fee: " {format_fee(&visa.fee)}</p>
                <p>"Validity: " {validity}</p>
                <A href=href attr:class="btn btn--primary">"See Details"</A>
            </div>
        </article>
    }
}
