use crate::client::{
    i18n::{I18n, Key},
    model::target::FormTarget,
    router::Route,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuLink {
    pub text: String,
    pub to: Route,
}

/// Sidebar group contributed by the administrators screens.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub text: String,
    pub children: Vec<MenuLink>,
}

pub fn administrators_menu(i18n: &I18n) -> MenuGroup {
    let link = |key: Key, to: Route| MenuLink {
        text: i18n.t(key).to_string(),
        to,
    };

    MenuGroup {
        id: "admins",
        text: i18n.t(Key::Administrators).to_string(),
        children: vec![
            link(Key::Roles, Route::RoleList {}),
            link(
                Key::CreateRole,
                Route::RoleForm {
                    role_id: FormTarget::Create,
                },
            ),
            link(Key::Admins, Route::AdminList {}),
            link(
                Key::CreateAdmin,
                Route::AdminForm {
                    admin_id: FormTarget::Create,
                },
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{
        i18n::Locale,
        paths::{admin_form_url, admin_list_url, role_form_url, role_list_url},
    };

    #[test]
    fn links_roles_then_admins() {
        let menu = administrators_menu(&I18n::new(Locale::En));

        assert_eq!(menu.id, "admins");
        assert_eq!(menu.text, "Administrators");

        let targets: Vec<String> = menu.children.iter().map(|l| l.to.to_string()).collect();
        assert_eq!(
            targets,
            vec![
                role_list_url(),
                role_form_url(FormTarget::Create),
                admin_list_url(),
                admin_form_url(FormTarget::Create),
            ]
        );
        assert_eq!(menu.children[1].text, "Create role");
    }
}
