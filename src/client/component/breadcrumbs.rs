use dioxus::prelude::*;

use crate::client::{i18n::I18n, router::Route};

#[component]
pub fn Breadcrumbs() -> Element {
    let i18n = use_context::<I18n>();
    let route = use_route::<Route>();
    let trail = route.breadcrumbs(&i18n);
    let last = trail.len().saturating_sub(1);

    rsx!(
        div {
            class: "breadcrumbs text-sm fixed top-20 w-full px-4 z-10 bg-base-100",
            ul {
                for (index, crumb) in trail.into_iter().enumerate() {
                    li {
                        key: "{crumb.url}",
                        if index == last {
                            span { "{crumb.text}" }
                        } else {
                            Link { to: crumb.url.clone(), "{crumb.text}" }
                        }
                    }
                }
            }
        }
    )
}
