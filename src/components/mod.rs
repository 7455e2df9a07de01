pub mod add_child_modal;
pub mod admin;
pub mod child_card;
pub mod edit_child_modal;
pub mod language_switcher;
pub mod notification_bell;
pub mod period_row;
pub mod timeline;
