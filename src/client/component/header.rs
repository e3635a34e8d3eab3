use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaUserShield, Icon};

use crate::client::{constant::SITE_NAME, i18n::I18n, menu::administrators_menu, router::Route};

#[component]
pub fn Header() -> Element {
    let i18n = use_context::<I18n>();
    let menu = administrators_menu(&i18n);

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaUserShield
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "dropdown dropdown-end",
            div {
                tabindex: "0",
                role: "button",
                class: "btn btn-outline",
                "{menu.text}"
            }
            ul {
                tabindex: "0",
                class: "dropdown-content menu bg-base-100 rounded-box z-30 w-56 p-2 shadow",
                for link in menu.children {
                    li {
                        key: "{link.to}",
                        Link { to: link.to.clone(), "{link.text}" }
                    }
                }
            }
        }
    })
}
