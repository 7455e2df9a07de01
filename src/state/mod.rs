//! Client-side state containers provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each container is a plain struct held in an `RwSignal`. Transitions are
//! methods on the struct so they stay testable without a browser.

pub mod admin;
pub mod auth;
pub mod child_form;
pub mod children;
pub mod notifications;
pub mod session;
pub mod signup;
pub mod timeline;
