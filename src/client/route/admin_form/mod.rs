pub mod helpers;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    component::{push_toast, ErrorPage, LoadingPage, OptionMultiSelect, Page, ParamFieldInput},
    constant::{GENERATED_PASSWORD_LENGTH, SITE_NAME},
    field::ParamField,
    i18n::{I18n, Key},
    model::{
        cache::Cache,
        option::OptionType,
        target::FormTarget,
        toast::{ToastQueue, ToastVariant},
    },
    router::Route,
};

use helpers::{generate_password, FormValues};

#[cfg(feature = "web")]
use crate::client::{
    api::{create_admin, get_admin, get_role_list, update_admin},
    field::create_field_list,
    model::{error::ApiError, target::Loaded},
};

#[cfg(feature = "web")]
use helpers::{
    convert_admin_to_form_values, convert_form_values_to_admin_creation_payload,
    convert_form_values_to_admin_update_payload, convert_role_list_to_options,
};

#[derive(Clone, Copy, PartialEq)]
pub enum AdminFormTab {
    General,
    Params,
}

#[component]
pub fn AdminForm(admin_id: FormTarget) -> Element {
    let i18n = use_context::<I18n>();
    let toasts = use_context::<Signal<ToastQueue>>();
    let nav = navigator();

    let mut active_tab = use_signal(|| AdminFormTab::General);
    let mut load_state = use_signal(|| Cache::<()>::Loading);
    let mut role_options = use_signal(Vec::<OptionType<i64>>::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut roles = use_signal(Vec::<OptionType<i64>>::new);
    let mut params = use_signal(Vec::<ParamField>::new);
    let mut is_submitting = use_signal(|| false);

    // The component stays mounted when the menu switches records, so drop the
    // previous record's values before the new fetch resolves
    use_effect(use_reactive!(|admin_id| {
        let _ = admin_id;
        let values = FormValues::default();
        name.set(values.name);
        email.set(values.email);
        password.set(values.password);
        roles.set(values.roles);
        params.set(Vec::new());
        active_tab.set(AdminFormTab::General);
        load_state.set(Cache::Loading);
    }));

    #[cfg(feature = "web")]
    let loaded = use_resource(use_reactive!(|admin_id| async move {
        let result = async {
            let role_list = get_role_list().await?;
            let admin = match admin_id.id() {
                Some(id) => Some(get_admin(id).await?),
                None => None,
            };
            Ok::<_, ApiError>((admin, role_list))
        }
        .await;
        Loaded::new(admin_id, result)
    }));

    #[cfg(feature = "web")]
    use_effect(use_reactive!(|admin_id| {
        let state = loaded.read_unchecked();
        let Some(result) = state.as_ref().and_then(|loaded| loaded.for_target(admin_id)) else {
            return;
        };

        match result {
            Ok((admin, role_list)) => {
                let options = convert_role_list_to_options(role_list);
                let values = convert_admin_to_form_values(admin.as_ref(), &options);
                name.set(values.name);
                email.set(values.email);
                password.set(values.password);
                roles.set(values.roles);
                params.set(
                    admin
                        .as_ref()
                        .map(|admin| create_field_list(&admin.params))
                        .unwrap_or_default(),
                );
                role_options.set(options);
                load_state.set(Cache::Fetched(()));
            }
            Err(err) => {
                tracing::error!("Failed to load admin form: {}", err);
                load_state.set(Cache::Error(err.clone()));
            }
        }
    }));

    let on_generate = move |_: MouseEvent| {
        password.set(generate_password(&mut rand::rng(), GENERATED_PASSWORD_LENGTH));
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let values = FormValues {
            name: name(),
            email: email(),
            password: password(),
            roles: roles(),
        };
        let fields = params();
        is_submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match admin_id {
                FormTarget::Create => {
                    let payload = convert_form_values_to_admin_creation_payload(&values, &fields);
                    create_admin(&payload).await
                }
                FormTarget::Edit(id) => {
                    let payload = convert_form_values_to_admin_update_payload(&values, &fields);
                    update_admin(id, &payload).await
                }
            };
            is_submitting.set(false);

            match result {
                Ok(admin) => {
                    tracing::info!("Saved admin {} ({})", admin.id, admin.email);
                    let message = if admin_id.is_create() {
                        Key::AdminSuccessfullyCreated
                    } else {
                        Key::AdminSuccessfullyUpdated
                    };
                    push_toast(toasts, ToastVariant::Success, i18n.t(Key::Success), i18n.t(message));
                    if admin_id.is_create() {
                        nav.push(Route::AdminList {});
                    } else {
                        password.set(String::new());
                    }
                }
                Err(err) => {
                    tracing::error!("Failed to save admin: {}", err);
                    let title = if admin_id.is_create() {
                        Key::AdminCreationError
                    } else {
                        Key::AdminUpdateError
                    };
                    push_toast(toasts, ToastVariant::Error, i18n.t(title), err.message);
                }
            }
        });

        #[cfg(not(feature = "web"))]
        {
            let _ = (values, fields, toasts, nav);
            is_submitting.set(false);
        }
    };

    let heading = if admin_id.is_create() {
        i18n.t(Key::CreateAdministrator)
    } else {
        i18n.t(Key::UpdateAdmin)
    };
    let password_label = if admin_id.is_create() {
        i18n.t(Key::Password)
    } else {
        i18n.t(Key::NewPassword)
    };
    let param_count = params.read().len();
    let tab_class = move |tab: AdminFormTab| {
        if active_tab() == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        Title { "{i18n.t(Key::AdminForm)} | {SITE_NAME}" }
        match load_state() {
            Cache::Fetched(()) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    form {
                        class: "w-full max-w-3xl flex flex-col gap-4",
                        onsubmit: on_submit,
                        h1 { class: "text-lg sm:text-2xl mb-2", "{heading}" }
                        div {
                            role: "tablist",
                            class: "tabs tabs-bordered mb-2",
                            a {
                                role: "tab",
                                class: tab_class(AdminFormTab::General),
                                onclick: move |_| active_tab.set(AdminFormTab::General),
                                "{i18n.t(Key::TabsGeneral)}"
                            }
                            a {
                                role: "tab",
                                class: tab_class(AdminFormTab::Params),
                                onclick: move |_| active_tab.set(AdminFormTab::Params),
                                "{i18n.t(Key::TabsParams)}"
                            }
                        }
                        match active_tab() {
                            AdminFormTab::General => rsx! {
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
                                div {
                                    class: "form-control w-full flex flex-col gap-2",
                                    label {
                                        class: "label",
                                        span { class: "label-text", "{i18n.t(Key::Email)}" }
                                    }
                                    input {
                                        r#type: "email",
                                        class: "input input-bordered w-full",
                                        value: "{email}",
                                        oninput: move |evt| email.set(evt.value()),
                                        disabled: is_submitting(),
                                        required: true,
                                    }
                                }
                                div {
                                    class: "form-control w-full flex flex-col gap-2",
                                    label {
                                        class: "label",
                                        span { class: "label-text", "{password_label}" }
                                    }
                                    div {
                                        class: "join w-full",
                                        input {
                                            r#type: "text",
                                            class: "input input-bordered join-item w-full",
                                            autocomplete: "new-password",
                                            value: "{password}",
                                            oninput: move |evt| password.set(evt.value()),
                                            disabled: is_submitting(),
                                            required: admin_id.is_create(),
                                        }
                                        button {
                                            r#type: "button",
                                            class: "btn join-item",
                                            onclick: on_generate,
                                            disabled: is_submitting(),
                                            "{i18n.t(Key::GeneratePassword)}"
                                        }
                                    }
                                }
                                OptionMultiSelect {
                                    label: i18n.t(Key::Roles).to_string(),
                                    options: role_options(),
                                    selected: roles,
                                    disabled: is_submitting(),
                                }
                            },
                            AdminFormTab::Params => rsx! {
                                if param_count == 0 {
                                    p { class: "opacity-70", "{i18n.t(Key::NoParams)}" }
                                }
                                for index in 0..param_count {
                                    ParamFieldInput {
                                        key: "{index}",
                                        fields: params,
                                        index,
                                        disabled: is_submitting(),
                                    }
                                }
                            },
                        }
                        div {
                            class: "flex justify-end gap-2",
                            Link {
                                to: Route::AdminList {},
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
