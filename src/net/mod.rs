//! Network boundary: REST client, identity providers, wire types.

pub mod api;
pub mod identity;
pub mod identity_firebase;
pub mod identity_popup;
pub mod types;
