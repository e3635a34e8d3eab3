use serde::{Deserialize, Serialize};

/// Scope reference embedded in a role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScopeDto {
    pub value: String,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_super_admin: bool,
    #[serde(default)]
    pub scopes: Vec<RoleScopeDto>,
}

/// Body of `POST /admin/rbac/roles` and `PUT /admin/rbac/roles/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RolePayloadDto {
    pub name: String,
    pub scopes: Vec<String>,
}

pub type RoleCreationPayloadDto = RolePayloadDto;

/// Role updates share the creation wire shape.
pub type RoleUpdatePayloadDto = RolePayloadDto;
