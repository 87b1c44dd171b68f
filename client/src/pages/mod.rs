//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied around pages by `RouteGuard`,
//! never inside them.

pub mod admin;
pub mod login;
pub mod not_authorized;
pub mod portal;
pub mod signup;
