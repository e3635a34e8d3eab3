use dioxus::prelude::*;

use crate::client::model::toast::{ToastQueue, ToastVariant};

/// Shows a toast and schedules its removal.
pub fn push_toast(
    mut toasts: Signal<ToastQueue>,
    variant: ToastVariant,
    title: impl Into<String>,
    body: impl Into<String>,
) {
    let id = toasts.write().push(variant, title, body);

    #[cfg(feature = "web")]
    spawn(async move {
        use crate::client::constant::TOAST_DURATION_MS;

        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });

    #[cfg(not(feature = "web"))]
    let _ = id;
}

#[component]
pub fn Toasts() -> Element {
    let mut toasts = use_context::<Signal<ToastQueue>>();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for toast in toasts.read().items.clone() {
                div {
                    key: "{toast.id}",
                    class: match toast.variant {
                        ToastVariant::Success => "alert alert-success",
                        ToastVariant::Error => "alert alert-error",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    div {
                        p { class: "font-semibold", "{toast.title}" }
                        p { class: "text-sm", "{toast.body}" }
                    }
                }
            }
        }
    )
}
