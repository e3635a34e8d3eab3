//! Conversions between admins, admin form state and admin payloads.

use std::collections::HashSet;

use rand::{distr::Alphanumeric, Rng};

use crate::{
    client::{field::Field, model::option::OptionType},
    model::{
        admin::{AdminCreationPayloadDto, AdminDto, AdminParamValueDto, AdminUpdatePayloadDto},
        role::RoleDto,
    },
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    /// Plaintext entered in the form; never filled from the backend.
    pub password: String,
    pub roles: Vec<OptionType<i64>>,
}

/// Builds the initial form state for an admin.
///
/// Without an admin (create mode) the defaults are returned. Selected roles are
/// the entries of `role_options` whose id the admin references, in
/// `role_options` order; references to roles missing from `role_options` are
/// dropped. The password always starts empty.
pub fn convert_admin_to_form_values(
    admin: Option<&AdminDto>,
    role_options: &[OptionType<i64>],
) -> FormValues {
    let Some(admin) = admin else {
        return FormValues::default();
    };

    let assigned: HashSet<i64> = admin.roles.iter().map(|role| role.id).collect();

    FormValues {
        name: admin.name.clone(),
        email: admin.email.clone(),
        password: String::new(),
        roles: role_options
            .iter()
            .filter(|option| assigned.contains(&option.value))
            .cloned()
            .collect(),
    }
}

/// Serializes custom parameters into `{name, value}` pairs, in field order.
pub fn convert_params_to_payload<F: Field>(fields: &[F]) -> Vec<AdminParamValueDto> {
    fields
        .iter()
        .map(|field| AdminParamValueDto {
            name: field.name().to_string(),
            value: field.outgoing_value(),
        })
        .collect()
}

/// An empty password is left out so the backend keeps the current one.
pub fn convert_form_values_to_admin_update_payload<F: Field>(
    values: &FormValues,
    params: &[F],
) -> AdminUpdatePayloadDto {
    AdminUpdatePayloadDto {
        name: values.name.clone(),
        email: values.email.clone(),
        roles: role_ids(values),
        password: (!values.password.is_empty()).then(|| values.password.clone()),
        params: convert_params_to_payload(params),
    }
}

/// The password is always sent; requiring it is left to the form and backend.
pub fn convert_form_values_to_admin_creation_payload<F: Field>(
    values: &FormValues,
    params: &[F],
) -> AdminCreationPayloadDto {
    AdminCreationPayloadDto {
        name: values.name.clone(),
        email: values.email.clone(),
        roles: role_ids(values),
        password: values.password.clone(),
        params: convert_params_to_payload(params),
    }
}

pub fn convert_role_list_to_options(roles: &[RoleDto]) -> Vec<OptionType<i64>> {
    roles
        .iter()
        .map(|role| OptionType::new(role.id, role.name.clone()))
        .collect()
}

/// Random alphanumeric password offered by the "generate" button.
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    rng.sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

fn role_ids(values: &FormValues) -> Vec<i64> {
    values.roles.iter().map(|role| role.value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::field::{create_field_list, FieldValue, ParamField};
    use rand::{rngs::StdRng, SeedableRng};
    use serde_json::{json, Value};
    use test_utils::fixture;

    fn role_options() -> Vec<OptionType<i64>> {
        let roles: Vec<RoleDto> = serde_json::from_value(json!([
            fixture::role::builder().id(1).name("Owner").build(),
            fixture::role::builder().id(2).name("Editor").build(),
            fixture::role::builder().id(3).name("Viewer").build(),
        ]))
        .unwrap();
        convert_role_list_to_options(&roles)
    }

    fn admin(body: Value) -> AdminDto {
        serde_json::from_value(body).unwrap()
    }

    fn values() -> FormValues {
        FormValues {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            password: "s3cret".to_string(),
            roles: vec![OptionType::new(2, "Editor"), OptionType::new(3, "Viewer")],
        }
    }

    #[test]
    fn role_list_becomes_options() {
        assert_eq!(
            role_options(),
            vec![
                OptionType::new(1, "Owner"),
                OptionType::new(2, "Editor"),
                OptionType::new(3, "Viewer"),
            ]
        );
    }

    #[test]
    fn create_mode_returns_defaults() {
        assert_eq!(
            convert_admin_to_form_values(None, &role_options()),
            FormValues {
                name: String::new(),
                email: String::new(),
                password: String::new(),
                roles: Vec::new(),
            }
        );
    }

    #[test]
    fn selects_admin_roles_in_option_order() {
        let admin = admin(
            fixture::admin::builder()
                .name("Jane")
                .email("jane@example.com")
                .role(3)
                .role(1)
                .build(),
        );

        let values = convert_admin_to_form_values(Some(&admin), &role_options());

        assert_eq!(values.name, "Jane");
        assert_eq!(values.email, "jane@example.com");
        assert_eq!(
            values.roles,
            vec![OptionType::new(1, "Owner"), OptionType::new(3, "Viewer")]
        );
    }

    #[test]
    fn password_is_never_loaded_from_backend() {
        let admin = admin(
            fixture::admin::builder()
                .field("password", json!("hash-from-server"))
                .build(),
        );

        let values = convert_admin_to_form_values(Some(&admin), &role_options());
        assert_eq!(values.password, "");
    }

    #[test]
    fn stale_roles_are_dropped() {
        let admin = admin(fixture::admin::builder().role(2).role(99).build());

        let values = convert_admin_to_form_values(Some(&admin), &role_options());
        let payload = convert_form_values_to_admin_update_payload::<ParamField>(&values, &[]);

        assert_eq!(payload.roles, vec![2]);
    }

    #[test]
    fn update_payload_maps_roles_and_params() {
        let admin = admin(
            fixture::admin::builder()
                .param("phone", "STRING", json!("+100"))
                .param("level", "NUMBER", json!(2))
                .build(),
        );
        let mut params = create_field_list(&admin.params);
        params[1].value = FieldValue::Number("5".to_string());

        let payload = convert_form_values_to_admin_update_payload(&values(), &params);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Jane",
                "email": "jane@example.com",
                "roles": [2, 3],
                "password": "s3cret",
                "params": [
                    { "name": "phone", "value": "+100" },
                    { "name": "level", "value": 5 },
                ],
            })
        );
    }

    #[test]
    fn update_payload_omits_empty_password() {
        let values = FormValues {
            password: String::new(),
            ..values()
        };

        let payload = convert_form_values_to_admin_update_payload::<ParamField>(&values, &[]);

        assert!(payload.password.is_none());
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body.get("password").is_none());
    }

    #[test]
    fn creation_payload_is_superset_of_update_payload() {
        let params = create_field_list(
            &admin(
                fixture::admin::builder()
                    .param("active", "TRUE_FALSE", json!(false))
                    .build(),
            )
            .params,
        );
        let values = FormValues {
            password: String::new(),
            ..values()
        };

        let update = serde_json::to_value(convert_form_values_to_admin_update_payload(
            &values, &params,
        ))
        .unwrap();
        let creation = serde_json::to_value(convert_form_values_to_admin_creation_payload(
            &values, &params,
        ))
        .unwrap();

        let update = update.as_object().unwrap();
        let creation = creation.as_object().unwrap();
        for (key, value) in update {
            assert_eq!(creation.get(key), Some(value), "mismatch for {}", key);
        }
        assert_eq!(creation.get("password"), Some(&json!("")));
    }

    #[test]
    fn generated_password_is_alphanumeric() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = generate_password(&mut rng, 12);
        let second = generate_password(&mut rng, 12);

        assert_eq!(first.len(), 12);
        assert!(first.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(first, second);
    }
}
