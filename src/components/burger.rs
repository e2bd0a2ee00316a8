//! Burger Button Component
//!
//! Three-bar toggle for the navigation menu.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn Burger() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            class=move || if ctx.menu_open.get() { "burger open" } else { "burger" }
            aria-label="Toggle menu"
            aria-controls="main-menu"
            aria-expanded=move || ctx.menu_open.get().to_string()
            on:click=move |_| ctx.toggle_menu()
        >
            <span />
            <span />
            <span />
        </button>
    }
}
