//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` mirrors the `session` store into a signal for rendering; `ui`
//! holds presentation preferences that never leave the browser.

pub mod auth;
pub mod ui;
