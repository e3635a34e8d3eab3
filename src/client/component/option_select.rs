use std::fmt::Display;

use dioxus::prelude::*;

use crate::client::{
    component::{DropdownItem, SearchableDropdown},
    i18n::{I18n, Key},
    model::option::OptionType,
};

/// Options not selected yet whose label contains `query`, case-insensitively.
pub fn filter_available<T: PartialEq + Clone>(
    options: &[OptionType<T>],
    selected: &[OptionType<T>],
    query: &str,
) -> Vec<OptionType<T>> {
    let query = query.to_lowercase();
    options
        .iter()
        .filter(|option| !selected.iter().any(|s| s.value == option.value))
        .filter(|option| query.is_empty() || option.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Multi-select over a list of options, used for roles and scopes.
///
/// Newly picked options are inserted at their position in `options`, so the
/// selection keeps the reference list order.
#[component]
pub fn OptionMultiSelect<T: PartialEq + Clone + Display + 'static>(
    label: String,
    options: Vec<OptionType<T>>,
    mut selected: Signal<Vec<OptionType<T>>>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let i18n = use_context::<I18n>();
    let search_query = use_signal(String::new);

    let available = filter_available(&options, &selected.read(), &search_query.read());
    let has_items = !available.is_empty();

    rsx! {
        div {
            class: "flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text font-semibold", "{label}" }
            }
            SearchableDropdown {
                search_query,
                placeholder: i18n.t(Key::Search).to_string(),
                disabled,
                empty_message: i18n.t(Key::NoItems).to_string(),
                not_found_message: i18n.t(Key::NoMatches).to_string(),
                has_items,
                for option in available {
                    {
                        let all = options.clone();
                        let picked = option.clone();
                        rsx! {
                            DropdownItem {
                                key: "{option.value}",
                                on_select: move |_| {
                                    let mut current = selected();
                                    current.push(picked.clone());
                                    current.sort_by_key(|item| {
                                        all.iter().position(|o| o.value == item.value).unwrap_or(usize::MAX)
                                    });
                                    selected.set(current);
                                },
                                "{option.label}"
                            }
                        }
                    }
                }
            }
            if selected.read().is_empty() {
                p { class: "text-sm opacity-50", "{i18n.t(Key::NoItems)}" }
            } else {
                div {
                    class: "flex flex-wrap gap-2",
                    for option in selected() {
                        {
                            let value = option.value.clone();
                            rsx! {
                                span {
                                    key: "{option.value}",
                                    class: "badge badge-lg badge-outline gap-1",
                                    "{option.label}"
                                    if !disabled {
                                        button {
                                            r#type: "button",
                                            class: "btn btn-xs btn-ghost btn-circle",
                                            onclick: move |_| {
                                                selected.write().retain(|s| s.value != value);
                                            },
                                            "✕"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<OptionType<i64>> {
        vec![
            OptionType::new(1, "Owner"),
            OptionType::new(2, "Editor"),
            OptionType::new(3, "Chief editor"),
        ]
    }

    #[test]
    fn hides_selected_options() {
        let available = filter_available(&options(), &[OptionType::new(2, "Editor")], "");
        let ids: Vec<i64> = available.iter().map(|o| o.value).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filters_by_label_ignoring_case() {
        let available = filter_available(&options(), &[], "EDIT");
        let ids: Vec<i64> = available.iter().map(|o| o.value).collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
