use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminRoleRefDto {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

/// Kind of a custom admin parameter as declared by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamFieldType {
    String,
    Text,
    Number,
    TrueFalse,
    #[serde(other)]
    Unknown,
}

/// Custom parameter definition together with the admin's current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminParamDto {
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: ParamFieldType,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<AdminRoleRefDto>,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub is_super_admin: bool,
    #[serde(default)]
    pub params: Vec<AdminParamDto>,
}

/// Outgoing `{name, value}` pair for a custom parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminParamValueDto {
    pub name: String,
    pub value: serde_json::Value,
}

/// Body of `PUT /admin/admins/{id}`.
///
/// `password` is omitted when the form left it empty, so the backend keeps the
/// stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUpdatePayloadDto {
    pub name: String,
    pub email: String,
    pub roles: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub params: Vec<AdminParamValueDto>,
}

/// Body of `POST /admin/admins`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCreationPayloadDto {
    pub name: String,
    pub email: String,
    pub roles: Vec<i64>,
    pub password: String,
    pub params: Vec<AdminParamValueDto>,
}
