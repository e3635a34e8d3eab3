use dioxus::prelude::*;

/// Text input with a dropdown of matching items underneath
#[component]
pub fn SearchableDropdown(
    /// Current search query signal
    mut search_query: Signal<String>,
    placeholder: String,
    #[props(default = false)]
    disabled: bool,
    /// Shown when there is nothing to pick from at all
    empty_message: String,
    /// Shown when the query filters out every item
    not_found_message: String,
    has_items: bool,
    /// Dropdown content (rendered items)
    children: Element,
) -> Element {
    let mut show_dropdown = use_signal(|| false);

    rsx! {
        div {
            class: "relative",
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "{placeholder}",
                value: "{search_query()}",
                onfocus: move |_| {
                    show_dropdown.set(true);
                },
                oninput: move |evt| {
                    search_query.set(evt.value());
                    show_dropdown.set(true);
                },
                disabled,
            }

            // Click outside to close dropdown
            if show_dropdown() {
                div {
                    class: "fixed inset-0 z-0",
                    onclick: move |_| {
                        show_dropdown.set(false);
                        search_query.set(String::new());
                    }
                }
            }

            if show_dropdown() {
                if has_items {
                    div {
                        class: "absolute z-10 w-full mt-1 bg-base-100 border border-base-300 rounded-lg shadow-lg max-h-60 overflow-y-auto",
                        {children}
                    }
                } else {
                    div {
                        class: "absolute z-10 w-full mt-1 bg-base-100 border border-base-300 rounded-lg shadow-lg",
                        div {
                            class: "px-4 py-2 text-center opacity-50 text-sm",
                            if !search_query().is_empty() {
                                "{not_found_message}"
                            } else {
                                "{empty_message}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Dropdown item that can be clicked
#[component]
pub fn DropdownItem(on_select: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "px-4 py-2 cursor-pointer hover:bg-base-200",
            onmousedown: move |evt| {
                evt.prevent_default();
                on_select.call(());
            },
            {children}
        }
    }
}
