//! Role fixtures.

use serde_json::{json, Value};

/// Default test role id.
pub const DEFAULT_ID: i64 = 1;

/// Default test role name.
pub const DEFAULT_NAME: &str = "Editor";

/// Creates a role body with default values and no scopes.
///
/// # Example
///
/// ```rust,ignore
/// let role = fixture::role::json();
/// assert_eq!(role["name"], "Editor");
/// ```
pub fn json() -> Value {
    builder().build()
}

/// Creates a role builder for customization.
pub fn builder() -> RoleBuilder {
    RoleBuilder {
        id: DEFAULT_ID,
        name: DEFAULT_NAME.to_string(),
        is_super_admin: false,
        scopes: Vec::new(),
    }
}

/// Builder for role response bodies.
pub struct RoleBuilder {
    id: i64,
    name: String,
    is_super_admin: bool,
    scopes: Vec<(String, String)>,
}

impl RoleBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn super_admin(mut self, is_super_admin: bool) -> Self {
        self.is_super_admin = is_super_admin;
        self
    }

    /// Adds a scope reference to the role.
    pub fn scope(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.scopes.push((value.into(), label.into()));
        self
    }

    pub fn build(self) -> Value {
        let scopes: Vec<Value> = self
            .scopes
            .into_iter()
            .map(|(value, label)| json!({ "value": value, "label": label }))
            .collect();

        json!({
            "id": self.id,
            "name": self.name,
            "isSuperAdmin": self.is_super_admin,
            "scopes": scopes,
        })
    }
}
