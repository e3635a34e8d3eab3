use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeDto {
    pub value: String,
    /// Older backends send the display string as `name`.
    #[serde(alias = "name")]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeGroupDto {
    pub name: String,
    pub scopes: Vec<ScopeDto>,
}

/// Payload of `GET /admin/rbac/scopes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScopeGroupsData {
    pub groups: Vec<ScopeGroupDto>,
}
