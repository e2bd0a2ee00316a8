//! Focus Lock Component
//!
//! Keeps keyboard focus inside its children while enabled.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), [tabindex]";

/// Traps Tab / Shift+Tab inside the wrapper and reports Escape.
///
/// # Arguments
/// * `disabled` - When true the wrapper is inert and carries `data-focus-lock-disabled`
/// * `on_escape` - Called when Escape is pressed while the lock is active
#[component]
pub fn FocusLock(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_escape: Callback<()>,
    children: Children,
) -> impl IntoView {
    let wrapper = NodeRef::<leptos::html::Div>::new();

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if disabled.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "Escape" => on_escape.run(()),
            "Tab" => {
                let Some(root) = wrapper.get_untracked() else { return };
                let targets = focus_targets(&root);
                let current = active_index(&targets);
                if let Some(next) = wrap_index(targets.len(), current, ev.shift_key()) {
                    ev.prevent_default();
                    let _ = targets[next].focus();
                }
            }
            _ => {}
        }
    };

    view! {
        <div
            class="focus-lock"
            node_ref=wrapper
            data-focus-lock-disabled=move || disabled.get().then_some("")
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}

fn focus_targets(root: &web_sys::HtmlElement) -> Vec<web_sys::HtmlElement> {
    let Ok(nodes) = root.query_selector_all(FOCUSABLE) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .filter(|el| el.tab_index() >= 0)
        .collect()
}

fn active_index(targets: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = web_sys::window()?.document()?.active_element()?;
    targets
        .iter()
        .position(|el| el.is_same_node(Some(active.as_ref())))
}

/// Index to move focus to when Tab would leave the lock; `None` lets the browser handle it.
fn wrap_index(len: usize, current: Option<usize>, backwards: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (current, backwards) {
        (None, false) => Some(0),
        (None, true) => Some(len - 1),
        (Some(0), true) => Some(len - 1),
        (Some(i), false) if i + 1 == len => Some(0),
        _ => None,
    }
}
