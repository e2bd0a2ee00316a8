//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use record_sync::ClientConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location, fixed at build time
    config: StoredValue<ClientConfig>,
    /// Whether the navigation menu is open - read
    pub menu_open: ReadSignal<bool>,
    /// Whether the navigation menu is open - write
    set_menu_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(config: ClientConfig, menu_open: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            config: StoredValue::new(config),
            menu_open: menu_open.0,
            set_menu_open: menu_open.1,
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    pub fn close_menu(&self) {
        self.set_menu_open.set(false);
    }
}

/// Get the app context, panicking if the shell did not provide it
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
