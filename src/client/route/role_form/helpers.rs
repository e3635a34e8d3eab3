//! Conversions between roles, role form state and role payloads.

use std::collections::HashSet;

use crate::{
    client::model::option::OptionType,
    model::{
        role::{RoleCreationPayloadDto, RoleDto, RoleUpdatePayloadDto},
        scope::ScopeGroupsData,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub scopes: Vec<OptionType<String>>,
    pub is_super_admin: bool,
}

/// Builds the initial form state for a role.
///
/// Without a role (create mode) the defaults are returned. Selected scopes are the
/// entries of `scope_options` referenced by the role, kept in `scope_options`
/// order. Role scopes missing from `scope_options` are dropped.
pub fn convert_role_to_form_values(
    role: Option<&RoleDto>,
    scope_options: &[OptionType<String>],
) -> FormValues {
    let Some(role) = role else {
        return FormValues::default();
    };

    let selected: HashSet<&str> = role.scopes.iter().map(|s| s.value.as_str()).collect();

    FormValues {
        name: role.name.clone(),
        scopes: scope_options
            .iter()
            .filter(|option| selected.contains(option.value.as_str()))
            .cloned()
            .collect(),
        is_super_admin: role.is_super_admin,
    }
}

/// Values are passed through unvalidated.
pub fn convert_form_values_to_role_creation_payload(values: &FormValues) -> RoleCreationPayloadDto {
    RoleCreationPayloadDto {
        name: values.name.clone(),
        scopes: values
            .scopes
            .iter()
            .map(|scope| scope.value.clone())
            .collect(),
    }
}

pub fn convert_form_values_to_role_update_payload(values: &FormValues) -> RoleUpdatePayloadDto {
    convert_form_values_to_role_creation_payload(values)
}

/// Flattens scope groups into options labelled `"{group}: {scope}"`.
///
/// Source order is kept and duplicates are not removed.
pub fn convert_scope_data_to_options(
    scope_data: Option<&ScopeGroupsData>,
) -> Vec<OptionType<String>> {
    let Some(scope_data) = scope_data else {
        return Vec::new();
    };

    scope_data
        .groups
        .iter()
        .flat_map(|group| {
            group.scopes.iter().map(move |scope| {
                OptionType::new(
                    scope.value.clone(),
                    format!("{}: {}", group.name, scope.label),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_utils::fixture;

    fn scope_options() -> Vec<OptionType<String>> {
        let data: ScopeGroupsData = serde_json::from_value(fixture::scope::json()).unwrap();
        convert_scope_data_to_options(Some(&data))
    }

    fn role(body: serde_json::Value) -> RoleDto {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn flattens_groups_with_composite_labels() {
        let data: ScopeGroupsData = serde_json::from_value(
            fixture::scope::builder()
                .group("Users", &[("u.read", "Read")])
                .group("Posts", &[("p.write", "Write")])
                .build(),
        )
        .unwrap();

        assert_eq!(
            convert_scope_data_to_options(Some(&data)),
            vec![
                OptionType::new("u.read".to_string(), "Users: Read"),
                OptionType::new("p.write".to_string(), "Posts: Write"),
            ]
        );
    }

    #[test]
    fn missing_scope_data_gives_no_options() {
        assert!(convert_scope_data_to_options(None).is_empty());
    }

    #[test]
    fn duplicate_scope_values_are_kept() {
        let data: ScopeGroupsData = serde_json::from_value(
            fixture::scope::builder()
                .group("A", &[("x", "One")])
                .group("B", &[("x", "Two")])
                .build(),
        )
        .unwrap();

        let options = convert_scope_data_to_options(Some(&data));
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].label, "B: Two");
    }

    #[test]
    fn accepts_scope_name_as_label() {
        let data: ScopeGroupsData = serde_json::from_value(json!({
            "groups": [{ "name": "Files", "scopes": [{ "value": "files.upload", "name": "Upload" }] }]
        }))
        .unwrap();

        assert_eq!(
            convert_scope_data_to_options(Some(&data))[0].label,
            "Files: Upload"
        );
    }

    #[test]
    fn create_mode_returns_defaults() {
        let values = convert_role_to_form_values(None, &scope_options());
        assert_eq!(
            values,
            FormValues {
                name: String::new(),
                scopes: Vec::new(),
                is_super_admin: false,
            }
        );
        assert_eq!(convert_role_to_form_values(None, &[]), FormValues::default());
    }

    #[test]
    fn selects_role_scopes_in_option_order() {
        let role = role(
            fixture::role::builder()
                .name("Moderator")
                .scope("posts.read", "Read")
                .scope("users.read", "Read")
                .build(),
        );

        let values = convert_role_to_form_values(Some(&role), &scope_options());

        assert_eq!(values.name, "Moderator");
        let selected: Vec<&str> = values.scopes.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(selected, vec!["users.read", "posts.read"]);
        assert_eq!(values.scopes[0].label, "Users: Read");
    }

    #[test]
    fn keeps_super_admin_flag() {
        let role = role(fixture::role::builder().super_admin(true).build());
        let values = convert_role_to_form_values(Some(&role), &scope_options());
        assert!(values.is_super_admin);
        assert!(values.scopes.is_empty());
    }

    #[test]
    fn stale_scopes_are_dropped_on_round_trip() {
        let role = role(
            fixture::role::builder()
                .scope("users.write", "Write")
                .scope("billing.refund", "Refund")
                .build(),
        );

        let values = convert_role_to_form_values(Some(&role), &scope_options());
        let payload = convert_form_values_to_role_creation_payload(&values);

        // `billing.refund` is not offered by the backend anymore, so it is lost.
        assert_eq!(payload.scopes, vec!["users.write".to_string()]);
    }

    #[test]
    fn matching_is_exact() {
        let role = role(fixture::role::builder().scope("USERS.READ", "Read").build());
        let values = convert_role_to_form_values(Some(&role), &scope_options());
        assert!(values.scopes.is_empty());
    }

    #[test]
    fn creation_and_update_payloads_match() {
        let values = FormValues {
            name: "Support".to_string(),
            scopes: vec![
                OptionType::new("users.read".to_string(), "Users: Read"),
                OptionType::new("posts.read".to_string(), "Posts: Read"),
            ],
            is_super_admin: true,
        };

        let creation = convert_form_values_to_role_creation_payload(&values);
        let update = convert_form_values_to_role_update_payload(&values);

        assert_eq!(creation, update);
        assert_eq!(
            serde_json::to_value(&creation).unwrap(),
            json!({ "name": "Support", "scopes": ["users.read", "posts.read"] })
        );
    }

    #[test]
    fn payload_does_not_validate_name() {
        let payload = convert_form_values_to_role_creation_payload(&FormValues::default());
        assert_eq!(payload.name, "");
        assert!(payload.scopes.is_empty());
    }
}
