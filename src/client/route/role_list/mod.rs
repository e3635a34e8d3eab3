pub mod helpers;

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaPen, FaPlus, FaTrash},
    Icon,
};
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{push_toast, ConfirmationModal, ErrorPage, LoadingPage, Page},
        constant::{SITE_NAME, VISIBLE_PRIVILEGES},
        i18n::{I18n, Key},
        model::{
            cache::Cache,
            target::FormTarget,
            toast::{ToastQueue, ToastVariant},
        },
        router::Route,
    },
    model::role::RoleDto,
};

use helpers::summarize_privileges;

#[cfg(feature = "web")]
use crate::client::api::{delete_role, get_role_list};

#[component]
pub fn RoleList() -> Element {
    let i18n = use_context::<I18n>();
    let mut roles = use_signal(Cache::<Vec<RoleDto>>::default);
    let refetch_trigger = use_signal(|| 0u32);

    // Fetch roles - resource automatically re-runs when refetch_trigger changes
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_role_list().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            if let Err(err) = result {
                tracing::error!("Failed to fetch roles: {}", err);
            }
            roles.set(result.clone().into());
        }
    });

    rsx! {
        Title { "{i18n.t(Key::RoleList)} | {SITE_NAME}" }
        match roles() {
            Cache::Fetched(role_list) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full",
                    div {
                        class: "w-full max-w-6xl",
                        div {
                            class: "flex items-center justify-between gap-4 mb-6",
                            h1 {
                                class: "text-lg sm:text-2xl",
                                "{i18n.t(Key::ListOfRoles)}"
                            }
                            Link {
                                to: Route::RoleForm { role_id: FormTarget::Create },
                                class: "btn btn-primary gap-2",
                                Icon { width: 14, height: 14, icon: FaPlus }
                                "{i18n.t(Key::AddRole)}"
                            }
                        }
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body",
                                RolesTable { roles: role_list, refetch_trigger }
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
fn RolesTable(roles: Vec<RoleDto>, mut refetch_trigger: Signal<u32>) -> Element {
    let i18n = use_context::<I18n>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let mut show_delete_modal = use_signal(|| false);
    let mut role_to_delete = use_signal(|| None::<(i64, String)>);
    let mut is_deleting = use_signal(|| false);

    let on_confirm = move |_: ()| {
        let Some((role_id, role_name)) = role_to_delete() else {
            return;
        };
        is_deleting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match delete_role(role_id).await {
                Ok(_) => {
                    tracing::info!("Deleted role {} ({})", role_id, role_name);
                    push_toast(
                        toasts,
                        ToastVariant::Success,
                        i18n.t(Key::Success),
                        i18n.t(Key::RoleSuccessfullyDeleted),
                    );
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to delete role {}: {}", role_id, err);
                    push_toast(
                        toasts,
                        ToastVariant::Error,
                        i18n.t(Key::RoleDeletionError),
                        err.message,
                    );
                }
            }
            is_deleting.set(false);
            show_delete_modal.set(false);
        });
    };

    let confirm_message = role_to_delete()
        .map(|(_, name)| i18n.t_with(Key::ConfirmDeleteRole, &[("name", name.as_str())]))
        .unwrap_or_default();

    rsx! {
        if roles.is_empty() {
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
                            th { "{i18n.t(Key::Privileges)}" }
                            th { class: "text-right", "{i18n.t(Key::Actions)}" }
                        }
                    }
                    tbody {
                        for role in &roles {
                            {
                                let role_id = role.id;
                                let role_name = role.name.clone();
                                let privileges = summarize_privileges(role, VISIBLE_PRIVILEGES).render(&i18n);
                                rsx! {
                                    tr {
                                        key: "{role_id}",
                                        td { "{role_id}" }
                                        td {
                                            div {
                                                class: "flex items-center gap-2",
                                                span { "{role.name}" }
                                                if role.is_super_admin {
                                                    span {
                                                        class: "badge badge-sm badge-warning",
                                                        "{i18n.t(Key::SuperAdmin)}"
                                                    }
                                                }
                                            }
                                        }
                                        td { class: "text-sm opacity-80", "{privileges}" }
                                        td {
                                            div {
                                                class: "flex gap-2 justify-end",
                                                Link {
                                                    to: Route::RoleForm { role_id: FormTarget::Edit(role_id) },
                                                    class: "btn btn-sm btn-ghost",
                                                    Icon { width: 14, height: 14, icon: FaPen }
                                                }
                                                button {
                                                    class: "btn btn-sm btn-error",
                                                    title: "{i18n.t(Key::Delete)}",
                                                    onclick: move |_| {
                                                        role_to_delete.set(Some((role_id, role_name.clone())));
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
