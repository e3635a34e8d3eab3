//! Scope group fixtures.

use serde_json::{json, Value};

/// Creates the two-group scope body used across tests:
/// `Users` with `users.read` / `users.write` and `Posts` with `posts.read`.
pub fn json() -> Value {
    builder()
        .group("Users", &[("users.read", "Read"), ("users.write", "Write")])
        .group("Posts", &[("posts.read", "Read")])
        .build()
}

/// Creates an empty scope groups builder.
pub fn builder() -> ScopeGroupsBuilder {
    ScopeGroupsBuilder { groups: Vec::new() }
}

/// Builder for `GET /admin/rbac/scopes` bodies.
pub struct ScopeGroupsBuilder {
    groups: Vec<Value>,
}

impl ScopeGroupsBuilder {
    /// Appends a group with `(value, label)` scopes.
    pub fn group(mut self, name: &str, scopes: &[(&str, &str)]) -> Self {
        let scopes: Vec<Value> = scopes
            .iter()
            .map(|(value, label)| json!({ "value": value, "label": label }))
            .collect();
        self.groups.push(json!({ "name": name, "scopes": scopes }));
        self
    }

    pub fn build(self) -> Value {
        json!({ "groups": self.groups })
    }
}
