use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` so `ui` never needs their `Route` enum.
/// Each function receives the label and returns a `Link` already containing it.
///
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     about: |label| rsx!( Link { class: "navbar__link", to: Route::About {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered");
    }
}

#[component]
pub fn AppNavbar() -> Element {
    let links = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)("Dashboard");
        let about = (b.about)("About");
        rsx! {
            nav { class: "navbar__links",
                {dashboard}
                {about}
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Eventboard" }
                    }
                    span { class: "navbar__brand-subtitle", "Live listings at a glance" }
                }

                if let Some(nav) = links {
                    {nav}
                }
            }
        }
    }
}
