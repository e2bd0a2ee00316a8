//! UI Components
//!
//! Shell chrome (burger, menu, focus lock) and the routed panels.

mod burger;
mod focus_lock;
mod home;
mod menu;
mod not_found;
mod record_panel;

pub use burger::Burger;
pub use focus_lock::FocusLock;
pub use home::Home;
pub use menu::Menu;
pub use not_found::NotFound;
pub use record_panel::RecordPanel;
