pub mod footer;
pub mod header;
pub mod modals;
pub mod sidebar;
pub mod timer_card;
pub mod views;
