use dioxus::prelude::*;

use crate::client::{
    component::Layout,
    constant::HOME_PATH,
    i18n::{I18n, Key},
    model::target::FormTarget,
    paths::{admin_form_url, admin_list_url, role_form_url, role_list_url},
    route::{AdminForm, AdminList, Home, NotFound, RoleForm, RoleList},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/roles")]
    RoleList {},

    #[route("/roles/:role_id")]
    RoleForm { role_id: FormTarget },

    #[cfg_attr(not(feature = "plural-admin-paths"), route("/admin"))]
    #[cfg_attr(feature = "plural-admin-paths", route("/admins"))]
    AdminList {},

    #[cfg_attr(not(feature = "plural-admin-paths"), route("/admin/:admin_id"))]
    #[cfg_attr(feature = "plural-admin-paths", route("/admins/:admin_id"))]
    AdminForm { admin_id: FormTarget },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Entry of the breadcrumb trail shown above each screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub url: String,
    pub text: String,
}

impl Breadcrumb {
    fn new(url: impl Into<String>, text: &str) -> Self {
        Self {
            url: url.into(),
            text: text.to_string(),
        }
    }
}

impl Route {
    /// Home, then the resource list, then the form itself on form routes.
    pub fn breadcrumbs(&self, i18n: &I18n) -> Vec<Breadcrumb> {
        let home = Breadcrumb::new(HOME_PATH, i18n.t(Key::Home));

        match self {
            Route::Home {} | Route::NotFound { .. } => vec![home],
            Route::RoleList {} => vec![home, Breadcrumb::new(role_list_url(), i18n.t(Key::RoleList))],
            Route::RoleForm { role_id } => vec![
                home,
                Breadcrumb::new(role_list_url(), i18n.t(Key::RoleList)),
                Breadcrumb::new(role_form_url(*role_id), i18n.t(Key::RoleForm)),
            ],
            Route::AdminList {} => {
                vec![home, Breadcrumb::new(admin_list_url(), i18n.t(Key::AdminList))]
            }
            Route::AdminForm { admin_id } => vec![
                home,
                Breadcrumb::new(admin_list_url(), i18n.t(Key::AdminList)),
                Breadcrumb::new(admin_form_url(*admin_id), i18n.t(Key::AdminForm)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{constant::ADMIN_PATH_PREFIX, i18n::Locale};

    fn urls(trail: &[Breadcrumb]) -> Vec<&str> {
        trail.iter().map(|crumb| crumb.url.as_str()).collect()
    }

    #[test]
    fn list_routes_have_two_crumbs() {
        let i18n = I18n::new(Locale::En);

        let trail = Route::RoleList {}.breadcrumbs(&i18n);
        assert_eq!(urls(&trail), vec!["/", "/roles"]);
        assert_eq!(trail[0].text, "Home");
        assert_eq!(trail[1].text, "Role list");

        let trail = Route::AdminList {}.breadcrumbs(&i18n);
        assert_eq!(urls(&trail), vec!["/", ADMIN_PATH_PREFIX]);
        assert_eq!(trail[1].text, "Admin list");
    }

    #[test]
    fn form_routes_end_with_current_path() {
        let i18n = I18n::new(Locale::Ru);

        let trail = Route::RoleForm {
            role_id: FormTarget::Edit(8),
        }
        .breadcrumbs(&i18n);
        assert_eq!(urls(&trail), vec!["/", "/roles", "/roles/8"]);
        assert_eq!(trail[2].text, "Форма роли");

        let admin_form = Route::AdminForm {
            admin_id: FormTarget::Create,
        };
        let trail = admin_form.breadcrumbs(&i18n);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].url, admin_form.to_string());
        assert_eq!(trail[2].text, "Форма администратора");
    }

    #[test]
    fn parses_form_paths() {
        assert_eq!(
            "/roles/create".parse::<Route>().ok(),
            Some(Route::RoleForm {
                role_id: FormTarget::Create
            })
        );
        assert_eq!(
            format!("{}/15", ADMIN_PATH_PREFIX).parse::<Route>().ok(),
            Some(Route::AdminForm {
                admin_id: FormTarget::Edit(15)
            })
        );
    }
}
