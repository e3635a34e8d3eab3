pub mod helpers;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{push_toast, ErrorPage, LoadingPage, OptionMultiSelect, Page},
    constant::SITE_NAME,
    i18n::{I18n, Key},
    model::{
        cache::Cache,
        option::OptionType,
        target::FormTarget,
        toast::{ToastQueue, ToastVariant},
    },
    router::Route,
};

use helpers::FormValues;

#[cfg(feature = "web")]
use crate::client::{
    api::{create_role, get_role, get_scopes, update_role},
    model::{error::ApiError, target::Loaded},
};

#[cfg(feature = "web")]
use helpers::{
    convert_form_values_to_role_creation_payload, convert_form_values_to_role_update_payload,
    convert_role_to_form_values, convert_scope_data_to_options,
};

#[component]
pub fn RoleForm(role_id: FormTarget) -> Element {
    let i18n = use_context::<I18n>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let nav = navigator();

    let mut load_state = use_signal(|| Cache::<()>::Loading);
    let mut scope_options = use_signal(Vec::<OptionType<String>>::new);
    let mut name = use_signal(String::new);
    let mut scopes = use_signal(Vec::<OptionType<String>>::new);
    let mut is_super_admin = use_signal(|| false);
    let mut is_submitting = use_signal(|| false);

    // The component stays mounted when the menu switches records, so drop the
    // previous record's values before the new fetch resolves
    use_effect(use_reactive!(|role_id| {
        let _ = role_id;
        let values = FormValues::default();
        name.set(values.name);
        scopes.set(values.scopes);
        is_super_admin.set(values.is_super_admin);
        load_state.set(Cache::Loading);
    }));

    // Scopes are needed in both modes, the role only when editing
    #[cfg(feature = "web")]
    let loaded = use_resource(use_reactive!(|role_id| async move {
        let result = async {
            let scope_data = get_scopes().await?;
            let role = match role_id.id() {
                Some(id) => Some(get_role(id).await?),
                None => None,
            };
            Ok::<_, ApiError>((role, scope_data))
        }
        .await;
        Loaded::new(role_id, result)
    }));

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|role_id| {
        let state = loaded.read_unchecked();
        let Some(result) = state.as_ref().and_then(|loaded| loaded.for_target(role_id)) else {
            return;
        };

        match result {
            Ok((role, scope_data)) => {
                let options = convert_scope_data_to_options(Some(scope_data));
                let values = convert_role_to_form_values(role.as_ref(), &options);
                name.set(values.name);
                scopes.set(values.scopes);
                is_super_admin.set(values.is_super_admin);
                scope_options.set(options);
                load_state.set(Cache::Fetched(()));
            }
            Err(err) => {
                tracing::error!("Failed to load role form: {}", err);
                load_state.set(Cache::Error(err.clone()));
            }
        }
    }));

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let values = FormValues {
            name: name(),
            scopes: scopes(),
            is_super_admin: is_super_admin(),
        };
        is_submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match role_id {
                FormTarget::Create => {
                    create_role(&convert_form_values_to_role_creation_payload(&values)).await
                }
                FormTarget::Edit(id) => {
                    update_role(id, &convert_form_values_to_role_update_payload(&values)).await
                }
            };
            is_submitting.set(false);

            match result {
                Ok(role) => {
                    tracing::info!("Saved role {} ({})", role.id, role.name);
                    let message = if role_id.is_create() {
                        Key::RoleSuccessfullyCreated
                    } else {
                        Key::RoleSuccessfullyUpdated
                    };
                    push_toast(toasts, ToastVariant::Success, i18n.t(Key::Success), i18n.t(message));
                    if role_id.is_create() {
                        nav.push(Route::RoleList {});
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to save role: {}", err);
                    let title = if role_id.is_create() {
                        Key::RoleCreationError
                    } else {
                        Key::RoleUpdateError
                    };
                    push_toast(toasts, ToastVariant::Error, i18n.t(title), err.message);
                }
            }
        });

        #[cfg(not(feature = "web"))]
        {
            let _ = (values, toasts, nav);
            is_submitting.set(false);
        }
    };

    let heading = if role_id.is_create() {
        i18n.t(Key::CreateRole)
    } else {
        i18n.t(Key::UpdateRole)
    };

    rsx! {
        Title { "{i18n.t(Key::RoleForm)} | {SITE_NAME}" }
        match load_state() {
            Cache::Fetched(()) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    form {
                        class: "w-full max-w-3xl flex flex-col gap-4",
                        onsubmit: on_submit,
                        h1 { class: "text-lg sm:text-2xl mb-2", "{heading}" }
                        div {
                            class: "form-control w-full flex flex-col gap-2",
                            label {
                                class: "label",
                                span { class: "label-text", "{i18n.t(Key::Name)}" }
                            }
                            input {
                                r#type: "text",
                                class: "input input-bordered w-full",
                                value: "{name}",
                                oninput: move |evt| name.set(evt.value()),
                                disabled: is_submitting(),
                                required: true,
                            }
                        }
                        label {
                            class: "label cursor-pointer justify-start gap-3",
                            input {
                                r#type: "checkbox",
                                class: "toggle toggle-warning",
                                checked: is_super_admin(),
                                disabled: true,
                            }
                            span { class: "label-text", "{i18n.t(Key::SuperAdmin)}" }
                        }
                        if is_super_admin() {
                            div {
                                class: "alert",
                                "{i18n.t(Key::Privileges)}: {i18n.t(Key::All)}"
                            }
                        }
                        OptionMultiSelect {
                            label: i18n.t(Key::Privileges).to_string(),
                            options: scope_options(),
                            selected: scopes,
                            disabled: is_submitting(),
                        }
                        div {
                            class: "flex justify-end gap-2",
                            Link {
                                to: Route::RoleList {},
                                class: "btn",
                                "{i18n.t(Key::Cancel)}"
                            }
                            button {
                                r#type: "submit",
                                class: "btn btn-primary",
                                disabled: is_submitting(),
                                if is_submitting() {
                                    span { class: "loading loading-spinner loading-sm mr-2" }
                                    "{i18n.t(Key::Saving)}"
                                } else {
                                    "{i18n.t(Key::Save)}"
                                }
                            }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            _ => rsx! {
                LoadingPage { }
            },
        }
    }
}
