//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state (session, notices, REST client) from Leptos
//! context providers installed by `app::App`.

pub mod confirm_dialog;
pub mod footer;
pub mod navbar;
pub mod pagination;
pub mod protected_route;
pub mod status;
pub mod toast;
pub mod visa_card;
pub mod visa_form;
