use crate::client::{
    constant::{ADMIN_PATH_PREFIX, ROLE_LIST_PATH},
    model::target::FormTarget,
};

pub fn role_list_url() -> String {
    ROLE_LIST_PATH.to_string()
}

pub fn role_form_url(role_id: FormTarget) -> String {
    format!("{}/{}", ROLE_LIST_PATH, role_id)
}

pub fn admin_list_url() -> String {
    ADMIN_PATH_PREFIX.to_string()
}

pub fn admin_form_url(admin_id: FormTarget) -> String {
    format!("{}/{}", ADMIN_PATH_PREFIX, admin_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::router::Route;

    #[test]
    fn role_urls() {
        assert_eq!(role_list_url(), "/roles");
        assert_eq!(role_form_url(FormTarget::Create), "/roles/create");
        assert_eq!(role_form_url(FormTarget::Edit(5)), "/roles/5");
    }

    #[test]
    fn admin_urls_use_configured_prefix() {
        assert_eq!(admin_list_url(), ADMIN_PATH_PREFIX);
        assert_eq!(
            admin_form_url(FormTarget::Edit(12)),
            format!("{}/12", ADMIN_PATH_PREFIX)
        );
        assert_eq!(
            admin_form_url(FormTarget::Create),
            format!("{}/create", ADMIN_PATH_PREFIX)
        );
    }

    #[test]
    fn urls_match_router() {
        assert_eq!(Route::RoleList {}.to_string(), role_list_url());
        assert_eq!(
            Route::RoleForm {
                role_id: FormTarget::Edit(3)
            }
            .to_string(),
            role_form_url(FormTarget::Edit(3))
        );
        assert_eq!(Route::AdminList {}.to_string(), admin_list_url());
        assert_eq!(
            Route::AdminForm {
                admin_id: FormTarget::Create
            }
            .to_string(),
            admin_form_url(FormTarget::Create)
        );
    }
}
