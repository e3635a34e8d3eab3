use dioxus::prelude::*;

use crate::client::{
    component::Page,
    constant::SITE_NAME,
    i18n::{I18n, Key},
    menu::administrators_menu,
};

#[component]
pub fn Home() -> Element {
    let i18n = use_context::<I18n>();
    let menu = administrators_menu(&i18n);

    rsx! {
        Title { "{i18n.t(Key::Home)} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-3xl card bg-base-200",
                div {
                    class: "card-body",
                    h1 { class: "card-title text-2xl", "{menu.text}" }
                    ul {
                        class: "menu w-full",
                        for link in menu.children {
                            li {
                                key: "{link.to}",
                                Link { to: link.to.clone(), "{link.text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
