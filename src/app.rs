//! Three-Tier Demo App
//!
//! Shell: burger + menu inside a focus lock, routed content beside it.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use record_sync::ClientConfig;

use crate::components::{Burger, FocusLock, Home, Menu, NotFound, RecordPanel};
use crate::context::{use_app_context, AppContext};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_build_env();
    tracing::info!(server = %config.base_url(), "[APP] Starting frontend");

    // Provide context to all children
    provide_context(AppContext::new(config, signal(false)));

    view! {
        <Router>
            <div class="app">
                <MenuShell />
                <main class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/db") view=RecordPanel />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Burger and menu, focus-locked while the menu is open
#[component]
fn MenuShell() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <FocusLock
            disabled=Signal::derive(move || !ctx.menu_open.get())
            on_escape=move |_: ()| ctx.close_menu()
        >
            <Burger />
            <Menu />
        </FocusLock>
    }
}
