pub const SITE_NAME: &str = "Administrators";

/// Namespace the localized strings are registered under.
pub const I18N_NAMESPACE: &str = "administrators";

pub const HOME_PATH: &str = "/";

pub const ROLE_LIST_PATH: &str = "/roles";

/// Prefix of the admin list and admin form routes.
#[cfg(not(feature = "plural-admin-paths"))]
pub const ADMIN_PATH_PREFIX: &str = "/admin";

/// Prefix of the admin list and admin form routes.
#[cfg(feature = "plural-admin-paths")]
pub const ADMIN_PATH_PREFIX: &str = "/admins";

/// Number of scope labels listed on the role list before collapsing the rest.
pub const VISIBLE_PRIVILEGES: usize = 3;

/// Milliseconds a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Length of generated admin passwords.
pub const GENERATED_PASSWORD_LENGTH: usize = 12;
