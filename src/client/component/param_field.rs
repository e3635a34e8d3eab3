use dioxus::prelude::*;

use crate::client::field::{FieldValue, ParamField};

/// Input for one custom admin parameter, picked by the field's value kind.
#[component]
pub fn ParamFieldInput(mut fields: Signal<Vec<ParamField>>, index: usize, disabled: bool) -> Element {
    let Some(field) = fields.read().get(index).cloned() else {
        return rsx! {};
    };
    let multiline = field.is_multiline();

    rsx! {
        div {
            class: "form-control w-full flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text", "{field.label}" }
            }
            match field.value {
                FieldValue::TrueFalse(checked) => rsx! {
                    input {
                        r#type: "checkbox",
                        class: "toggle toggle-primary",
                        checked,
                        disabled,
                        onchange: move |evt| {
                            fields.write()[index].value = FieldValue::TrueFalse(evt.checked());
                        },
                    }
                },
                FieldValue::Number(raw) => rsx! {
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        value: "{raw}",
                        disabled,
                        oninput: move |evt| {
                            fields.write()[index].value = FieldValue::Number(evt.value());
                        },
                    }
                },
                FieldValue::Text(text) if multiline => rsx! {
                    textarea {
                        class: "textarea textarea-bordered w-full",
                        value: "{text}",
                        disabled,
                        oninput: move |evt| {
                            fields.write()[index].value = FieldValue::Text(evt.value());
                        },
                    }
                },
                FieldValue::Text(text) => rsx! {
                    input {
                        r#type: "text",
                        class: "input input-bordered w-full",
                        value: "{text}",
                        disabled,
                        oninput: move |evt| {
                            fields.write()[index].value = FieldValue::Text(evt.value());
                        },
                    }
                },
            }
        }
    }
}
