//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `catalog`, `fetch`, `notice`) so views
//! depend only on the small models they render. Everything here is plain
//! Rust and tested natively.

pub mod auth;
pub mod catalog;
pub mod fetch;
pub mod notice;
