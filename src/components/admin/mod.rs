//! Admin dashboard panels. Labels are French, like the admin API messages.

pub mod coverage_panel;
pub mod region_detail_modal;
pub mod region_settings;
pub mod supply_card;
pub mod telegram_panel;
