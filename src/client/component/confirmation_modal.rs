use dioxus::prelude::*;

use crate::client::i18n::{I18n, Key};

/// Asks before deleting a role or an admin.
///
/// While `is_processing` the dialog cannot be dismissed, so the pending request
/// always reports back into a visible modal.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let i18n = use_context::<I18n>();
    let mut close = move || {
        if !is_processing {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            role: "dialog",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == dioxus::prelude::Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 max-w-lg",
                h3 { class: "font-bold text-lg", "{title}" }
                p { class: "py-4", "{message}" }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| close(),
                        disabled: is_processing,
                        "{i18n.t(Key::Cancel)}"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-error",
                        onclick: move |_| on_confirm.call(()),
                        disabled: is_processing,
                        if is_processing {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                            "{i18n.t(Key::Deleting)}"
                        } else {
                            "{confirm_text}"
                        }
                    }
                }
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
