//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shell chrome shared by the portal and the admin
//! dashboard while reading shared state from Leptos context providers.

pub mod loading;
pub mod user_menu;
