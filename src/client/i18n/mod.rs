//! Localized strings of the administrators screens.
//!
//! Strings live in per-locale match tables (`en`, `ru`) keyed by [`Key`], so every
//! locale is forced by the compiler to cover the full key set. Keys also have the
//! dotted names used by the admin framework (`administrators:tabs.general`) for
//! lookups coming from configuration or templates.

mod en;
mod ru;

use std::{fmt, str::FromStr};

use crate::client::constant::I18N_NAMESPACE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    #[default]
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "ru" => Ok(Locale::Ru),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

macro_rules! keys {
    ($($variant:ident => $name:literal),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Key {
            $($variant),*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant),*];

            /// Dotted key name inside the namespace.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Key::$variant => $name),*
                }
            }

            pub fn from_name(name: &str) -> Option<Key> {
                match name {
                    $($name => Some(Key::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    Home => "home",
    Administrators => "administrators",
    Role => "role",
    Roles => "roles",
    Admin => "admin",
    Admins => "admins",
    CreateRole => "createRole",
    CreateAdmin => "createAdmin",
    CreateAdministrator => "createAdministrator",
    Edit => "edit",
    Delete => "delete",
    Email => "email",
    Actions => "actions",
    UpdateRole => "updateRole",
    UpdateAdmin => "updateAdmin",
    Password => "password",
    NewPassword => "newPassword",
    GeneratePassword => "generatePassword",
    Name => "name",
    Success => "success",
    AdminSuccessfullyCreated => "adminSuccessfullyCreated",
    AdminSuccessfullyUpdated => "adminSuccessfullyUpdated",
    AdminSuccessfullyDeleted => "adminSuccessfullyDeleted",
    Error => "error",
    AdminCreationError => "adminCreationError",
    AdminUpdateError => "adminUpdateError",
    AdminDeletionError => "adminDeletionError",
    ListOfRoles => "listOfRoles",
    AddRole => "addRole",
    NoPrivileges => "noPrivileges",
    Privileges => "privileges",
    SuperAdmin => "superAdmin",
    All => "all",
    RoleSuccessfullyCreated => "roleSuccessfullyCreated",
    RoleSuccessfullyUpdated => "roleSuccessfullyUpdate",
    RoleSuccessfullyDeleted => "roleSuccessfullyDeleted",
    RoleCreationError => "roleCreationError",
    RoleUpdateError => "roleUpdateError",
    RoleDeletionError => "roleDeletionError",
    AdminList => "adminList",
    AdminForm => "adminForm",
    RoleList => "roleList",
    RoleForm => "roleForm",
    AndMorePrivilege => "andMorePrivilege",
    You => "you",
    Save => "save",
    Cancel => "cancel",
    Deleting => "deleting",
    Saving => "saving",
    ConfirmDeleteRole => "confirmDeleteRole",
    ConfirmDeleteAdmin => "confirmDeleteAdmin",
    NoItems => "noItems",
    NoMatches => "noMatches",
    Search => "search",
    NoParams => "noParams",
    TabsGeneral => "tabs.general",
    TabsParams => "tabs.params",
}

/// Resolves [`Key`]s for one locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct I18n {
    pub locale: Locale,
}

impl I18n {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn t(&self, key: Key) -> &'static str {
        match self.locale {
            Locale::En => en::translate(key),
            Locale::Ru => ru::translate(key),
        }
    }

    /// Translates `key` and substitutes `{{name}}` placeholders.
    pub fn t_with(&self, key: Key, vars: &[(&str, &str)]) -> String {
        interpolate(self.t(key), vars)
    }

    /// Looks up a namespaced key such as `administrators:roleList`.
    ///
    /// Unknown keys and foreign namespaces resolve to the key itself.
    pub fn lookup<'a>(&self, full_key: &'a str) -> std::borrow::Cow<'a, str> {
        let name = match full_key.split_once(':') {
            Some((namespace, name)) if namespace == I18N_NAMESPACE => name,
            Some(_) => return full_key.into(),
            None => full_key,
        };

        match Key::from_name(name) {
            Some(key) => self.t(key).into(),
            None => full_key.into(),
        }
    }
}

/// Single pass over `template`; substituted values are never scanned again.
fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            rest = &rest[start..];
            break;
        };

        let name = after_open[..end].trim();
        match vars.iter().find(|(var, _)| *var == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_is_translated_in_every_locale() {
        for locale in Locale::ALL {
            let i18n = I18n::new(locale);
            for key in Key::ALL {
                assert!(
                    !i18n.t(*key).trim().is_empty(),
                    "{:?} missing in {}",
                    key,
                    locale
                );
            }
        }
    }

    #[test]
    fn key_names_round_trip() {
        for key in Key::ALL {
            assert_eq!(Key::from_name(key.name()), Some(*key));
        }
        assert_eq!(Key::from_name("tabs.params"), Some(Key::TabsParams));
        assert_eq!(Key::from_name("missing"), None);
    }

    #[test]
    fn interpolates_count() {
        let en = I18n::new(Locale::En);
        assert_eq!(
            en.t_with(Key::AndMorePrivilege, &[("count", "4")]),
            "and 4 more privileges..."
        );

        let ru = I18n::new(Locale::Ru);
        assert_eq!(
            ru.t_with(Key::AndMorePrivilege, &[("count", "2")]),
            "и еще 2 привилегий..."
        );
    }

    #[test]
    fn substituted_values_are_not_interpolated_again() {
        let i18n = I18n::new(Locale::En);
        assert_eq!(
            i18n.t_with(Key::ConfirmDeleteRole, &[("name", "{{count}}"), ("count", "7")]),
            "Are you sure you want to delete role \"{{count}}\"?"
        );
    }

    #[test]
    fn unknown_and_unclosed_placeholders_stay_verbatim() {
        assert_eq!(
            interpolate("{{a}} and {{b}} then {{c", &[("a", "1")]),
            "1 and {{b}} then {{c"
        );
    }

    #[test]
    fn lookup_respects_namespace() {
        let ru = I18n::new(Locale::Ru);
        assert_eq!(ru.lookup("administrators:home"), "Главная");
        assert_eq!(ru.lookup("roleList"), "Список ролей");
        assert_eq!(ru.lookup("pages:home"), "pages:home");
        assert_eq!(ru.lookup("administrators:unknown"), "administrators:unknown");
    }

    #[test]
    fn parses_locale_codes() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Ru));
        assert!("de".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Ru);
    }
}
