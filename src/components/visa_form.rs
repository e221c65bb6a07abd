//! Listing form shared by the add-visa page and the update modal.
//!
//! DESIGN
//! ======
//! Inputs are held as raw strings in [`VisaFormState`]; typed bodies are only
//! produced by `to_new_visa` / `to_update`, which run the field checks.
//! Country, category, processing time and fee are required; the fee must
//! parse as a non-negative number.

#[cfg(test)]
#[path = "visa_form_test.rs"]
mod visa_form_test;

use leptos::prelude::*;

use crate::error::AppError;
use crate::net::types::{NewVisa, VisaCategory, VisaListing, VisaUpdate, parse_fee};

/// Editable inputs of the listing form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisaField {
    Country,
    ImageUrl,
    Category,
    ProcessingTime,
    Fee,
    Validity,
    Description,
}

/// Raw form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisaFormState {
    pub country: String,
    pub image_url: String,
    pub category: String,
    pub processing_time: String,
    pub fee: String,
    pub validity: String,
    pub description: String,
}

struct RequiredFields {
    country: String,
    category: VisaCategory,
    processing_time: String,
    fee: f64,
}

impl VisaFormState {
    /// Prefill from an existing listing for the update modal.
    pub fn from_listing(visa: &VisaListing) -> Self {
        Self {
            country: visa.country.clone(),
            image_url: visa.image_url.clone(),
            category: visa.category.to_string(),
            processing_time: visa.processing_time.clone(),
            // Free-text fees cannot go into the number input; the owner re-enters them.
            fee: visa.fee.amount().map(|amount| amount.to_string()).unwrap_or_default(),
            validity: visa.validity.clone().unwrap_or_default(),
            description: visa.description.clone(),
        }
    }

    pub fn value(&self, field: VisaField) -> &str {
        match field {
            VisaField::Country => &self.country,
            VisaField::ImageUrl => &self.image_url,
            VisaField::Category => &self.category,
            VisaField::ProcessingTime => &self.processing_time,
            VisaField::Fee => &self.fee,
            VisaField::Validity => &self.validity,
            VisaField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: VisaField, value: String) {
        let slot = match field {
            VisaField::Country => &mut self.country,
            VisaField::ImageUrl => &mut self.image_url,
            VisaField::Category => &mut self.category,
            VisaField::ProcessingTime => &mut self.processing_time,
            VisaField::Fee => &mut self.fee,
            VisaField::Validity => &mut self.validity,
            VisaField::Description => &mut self.description,
        };
        *slot = value;
    }

    fn required(&self) -> Result<RequiredFields, AppError> {
        let country = self.country.trim();
        if country.is_empty() {
            return Err(AppError::validation("Country is required."));
        }
        let Some(category) = VisaCategory::parse(&self.category) else {
            return Err(AppError::validation("Visa type is required."));
        };
        let processing_time = self.processing_time.trim();
        if processing_time.is_empty() {
            return Err(AppError::validation("Processing time is required."));
        }
        if self.fee.trim().is_empty() {
            return Err(AppError::validation("Fee is required."));
        }
        let Some(fee) = parse_fee(&self.fee) else {
            return Err(AppError::validation("Fee must be a non-negative number."));
        };
        Ok(RequiredFields {
            country: country.to_owned(),
            category,
            processing_time: processing_time.to_owned(),
            fee,
        })
    }

    /// Body for `POST /add-visa`, owned by `added_by`.
    ///
    /// # Errors
    ///
    /// `Validation` naming the first failing field.
    pub fn to_new_visa(&self, added_by: &str) -> Result<NewVisa, AppError> {
        let fields = self.required()?;
        Ok(NewVisa {
            country: fields.country,
            country_image_url: self.image_url.trim().to_owned(),
            visa_type: fields.category,
            processing_time: fields.processing_time,
            fee: fields.fee,
            validity: self.validity.trim().to_owned(),
            description: self.description.trim().to_owned(),
            added_by: added_by.to_owned(),
        })
    }

    /// Partial body for `PUT /visas/:id`.
    ///
    /// # Errors
    ///
    /// `Validation` naming the first failing field.
    pub fn to_update(&self) -> Result<VisaUpdate, AppError> {
        let fields = self.required()?;
        Ok(VisaUpdate {
            country: Some(fields.country),
            visa_type: Some(fields.category),
            processing_time: Some(fields.processing_time),
            fee: Some(fields.fee),
            validity: Some(self.validity.trim().to_owned()),
            description: Some(self.description.trim().to_owned()),
        })
    }
}

#[component]
fn FormInput(
    form: RwSignal<VisaFormState>,
    field: VisaField,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="form__input"
                type=kind
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Inputs bound to `form`; the image URL input is only shown when creating.
#[component]
pub fn VisaFormFields(form: RwSignal<VisaFormState>, #[prop(optional)] with_image: bool) -> impl IntoView {
    view! {
        <FormInput form field=VisaField::Country label="Country"/>
        <Show when=move || with_image>
            <FormInput form field=VisaField::ImageUrl label="Country Image URL" kind="url"/>
        </Show>
        <label class="form__label">
            "Visa Type"
            <select
                class="form__input"
                prop:value=move || form.with(|f| f.category.clone())
                on:change=move |ev| form.update(|f| f.set(VisaField::Category, event_target_value(&ev)))
            >
                <option value="">"Select a visa type"</option>
                {VisaCategory::KNOWN
                    .iter()
                    .map(|category| {
                        let value = category.as_str().to_owned();
                        let label = value.clone();
                        view! { <option value=value>{label}</option> }
                    })
                    .collect_view()}
            </select>
        </label>
        <FormInput form field=VisaField::ProcessingTime label="Processing Time"/>
        <FormInput form field=VisaField::Fee label="Fee" kind="number"/>
        <FormInput form field=VisaField::Validity label="Validity"/>
        <label class="form__label">
            "Description"
            <textarea
                class="form__input"
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.set(VisaField::Description, event_target_value(&ev)))
            ></textarea>
        </label>
    }
}
