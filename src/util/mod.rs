//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure timeline
//! math from page and component logic to improve reuse and testability.

pub mod auth;
pub mod child_name;
pub mod dates;
pub mod document;
pub mod period;
pub mod period_label;
pub mod storage;
