//! Not Found Panel

use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
