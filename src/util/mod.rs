//! Small browser and plumbing helpers.

pub mod auth;
pub mod date;
pub mod listeners;
pub mod reactive;
pub mod storage;
pub mod url;
