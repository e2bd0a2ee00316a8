//! Home Panel Component
//!
//! Static landing panel: title, build version, serving host and the architecture diagram.

use leptos::prelude::*;

pub const HOME_TITLE: &str = "AWS 3-TIER WEB APP DEMO";
const ARCHITECTURE_ALT: &str = "3T Web App Architecture";
const ARCHITECTURE_SRC: &str = "/assets/3tier-architecture.svg";

/// Crate version baked in at compile time
pub fn frontend_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Host name the page was served from (the web-tier instance or its load balancer)
fn instance_host() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <h1 style="color: white">{HOME_TITLE}</h1>
            <p class="meta">{format!("Frontend Version: {}", frontend_version())}</p>
            <p class="meta">{format!("Instance IP: {}", instance_host())}</p>
            <img
                src=ARCHITECTURE_SRC
                alt=ARCHITECTURE_ALT
                style="height: 400px; width: 825px"
            />
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn renders_title_version_and_diagram() {
        mount_to_body(Home);
        let document = document();
        let body = document.body().unwrap().text_content().unwrap_or_default();

        assert!(body.contains(HOME_TITLE));
        assert!(body.contains(&format!("Frontend Version: {}", frontend_version())));
        let img = document.query_selector("img").unwrap().unwrap();
        assert_eq!(img.get_attribute("alt").as_deref(), Some(ARCHITECTURE_ALT));
    }
}
