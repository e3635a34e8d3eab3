use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaPlus, FaTrash},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{push_toast, ConfirmationModal, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        i18n::{I18n, Key},
        model::{
            cache::Cache,
            target::FormTarget,
            toast::{ToastQueue, ToastVariant},
        },
        router::Route,
    },
    model::admin::AdminDto,
};

#[cfg(feature = "web")]
use crate::client::api::{delete_admin, get_admin_list};

/// Comma separated role names, falling back to `#id` for unnamed references.
pub fn format_roles(admin: &AdminDto) -> String {
    admin
        .roles
        .iter()
        .map(|role| match &role.name {
            Some(name) => name.clone(),
            None => format!("#{}", role.id),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn AdminList() -> Element {
    let i18n = use_context::<I18n>();
    let mut admins = use_signal(Cache::<Vec<AdminDto>>::default);
    let refetch_trigger = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_admin_list().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch admins: {}", err);
            }
            admins.set(result.clone().into());
        }
    });

    rsx! {
        Title { "{i18n.t(Key::AdminList)} | {SITE_NAME}" }
        match admins() {
            Cache::Fetched(admin_list) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h1 {
                                class: "text-lg sm:text-2xl",
                                "{i18n.t(Key::Administrators)}"
                            }
                            Link {
                                to: Route::AdminForm { admin_id: FormTarget::Create },
                                class: "btn btn-primary gap-2",
                                Icon { width: 14, height: 14, icon: FaPlus }
                                "{i18n.t(Key::CreateAdmin)}"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                AdminsTable { admins: admin_list, refetch_trigger }
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

#[component]
fn AdminsTable(admins: Vec<AdminDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let i18n = use_context::<I18n>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let mut show_delete_modal = use_signal(|| false);
    let mut admin_to_delete = use_signal(|| None::<(i64, String)>);
    let mut is_deleting = use_signal(|| false);

    let on_confirm = move |_: ()| {
        let Some((admin_id, admin_name)) = admin_to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_admin(admin_id).await {
                Ok(_) => {
                    tracing::info!("Deleted admin {} ({})", admin_id, admin_name);
                    push_toast(
                        toasts,
                        ToastVariant::Success,
                        i18n.t(Key::Success),
                        i18n.t(Key::AdminSuccessfullyDeleted),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete admin {}: {}", admin_id, err);
                    push_toast(
                        toasts,
                        ToastVariant::Error,
                        i18n.t(Key::AdminDeletionError),
                        err.message,
                    );
                }
            }
            is_deleting.set(false);
            show_delete_modal.set(false);
        });
    };

    let confirm_message = admin_to_delete()
        .map(|(_, name)| i18n.t_with(Key::ConfirmDeleteAdmin, &[("name", name.as_str())]))
        .unwrap_or_default();

    rsx! {
        if admins.is_empty() {
            div {
                class: "text-center py-8 opacity-50",
                "{i18n.t(Key::NoItems)}"
            }
        } else {
            div {
                class: "overflow-x-auto",
                table {
                    class: "table table-zebra w-full",
                    thead {
                        tr {
                            th { "ID" }
                            th { "{i18n.t(Key::Name)}" }
                            th { "{i18n.t(Key::Email)}" }
                            th { "{i18n.t(Key::Roles)}" }
                            th { class: "text-right", "{i18n.t(Key::Actions)}" }
                        }
                    }
                    tbody {
                        for admin in &admins {
                            {
                                let admin_id = admin.id;
                                let admin_name = admin.name.clone();
                                let is_self = admin.is_self;
                                let role_names = format_roles(admin);
                                rsx! {
                                    tr {
                                        key: "{admin_id}",
                                        td { "{admin_id}" }
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                span { "{admin.name}" }
                                                if is_self {
                                                    span {
                                                        class: "badge badge-sm badge-primary",
                                                        "{i18n.t(Key::You)}"
                                                    }
                                                }
                                                if admin.is_super_admin {
                                                    span {
                                                        class: "badge badge-sm badge-warning",
                                                        "{i18n.t(Key::SuperAdmin)}"
                                                    }
                                                }
                                            }
                                        }
                                        td { "{admin.email}" }
                                        td { class: "text-sm opacity-80", "{role_names}" }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                Link {
                                                    to: Route::AdminForm { admin_id: FormTarget::Edit(admin_id) },
                                                    class: "btn btn-sm btn-ghost",
                                                    Icon { width: 14, height: 14, icon: FaPen }
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    title: "{i18n.t(Key::Delete)}",
                                                    disabled: is_self,
                                                    onclick: move |_| {
                                                        admin_to_delete.set(Some((admin_id, admin_name.clone())));
                                                        show_delete_modal.set(true);
                                                    },
                                                    Icon { width: 14, height: 14, icon: FaTrash }
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

        ConfirmationModal {
            show: show_delete_modal,
            title: i18n.t(Key::Delete).to_string(),
            message: confirm_message,
            confirm_text: i18n.t(Key::Delete).to_string(),
            is_processing: is_deleting(),
            on_confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn joins_role_names_and_falls_back_to_ids() {
        let mut admin: AdminDto =
            serde_json::from_value(fixture::admin::builder().id(3).role(1).role(7).build())
                .unwrap();
        admin.roles[0].name = Some("Owner".to_string());

        assert_eq!(format_roles(&admin), "Owner, #7");
    }

    #[test]
    fn admin_without_roles_renders_empty() {
        let admin: AdminDto =
            serde_json::from_value(fixture::admin::builder().id(3).build()).unwrap();

        assert_eq!(format_roles(&admin), "");
    }
}
