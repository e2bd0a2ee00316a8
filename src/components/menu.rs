//! Navigation Menu Component
//!
//! Slide-out list of routes. Always mounted; hidden and untabbable while closed.

use leptos::prelude::*;

use crate::context::use_app_context;

/// (href, label, icon)
const MENU_LINKS: &[(&str, &str, &str)] = &[
    ("/", "Home", "🏠"),
    ("/db", "DB Demo", "🗄"),
];

#[component]
pub fn Menu() -> impl IntoView {
    let ctx = use_app_context();
    let tab_index = move || if ctx.menu_open.get() { "0" } else { "-1" };

    view! {
        <nav
            id="main-menu"
            class=move || if ctx.menu_open.get() { "menu open" } else { "menu" }
            aria-hidden=move || (!ctx.menu_open.get()).to_string()
        >
            {MENU_LINKS.iter().map(|(href, label, icon)| view! {
                // Router intercepts the anchor click; closing happens as it bubbles.
                <div class="menu-link" on:click=move |_| ctx.close_menu()>
                    <a href=*href tabindex=tab_index>
                        <span class="menu-icon" aria-hidden="true">{*icon}</span>
                        {*label}
                    </a>
                </div>
            }).collect_view()}
        </nav>
    }
}
