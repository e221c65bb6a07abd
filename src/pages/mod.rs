//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its fetch-on-mount and write orchestration and delegates
//! rendering details to `components`. Input validation lives in plain
//! functions next to the page so it is tested natively.

pub mod add_visa;
pub mod all_visas;
pub mod auth_callback;
pub mod home;
pub mod login;
pub mod my_applications;
pub mod my_visas;
pub mod not_found;
pub mod register;
pub mod visa_details;
