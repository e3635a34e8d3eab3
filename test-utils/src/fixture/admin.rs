//! Admin fixtures.

use serde_json::{json, Value};

/// Default test admin id.
pub const DEFAULT_ID: i64 = 1;

/// Default test admin name.
pub const DEFAULT_NAME: &str = "Test Admin";

/// Default test admin email.
pub const DEFAULT_EMAIL: &str = "admin@example.com";

/// Creates an admin body with default values, no roles and no params.
pub fn json() -> Value {
    builder().build()
}

/// Creates an admin builder for customization.
pub fn builder() -> AdminBuilder {
    AdminBuilder {
        id: DEFAULT_ID,
        name: DEFAULT_NAME.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        roles: Vec::new(),
        is_self: false,
        is_super_admin: false,
        params: Vec::new(),
        extra: Vec::new(),
    }
}

/// Builder for admin response bodies.
pub struct AdminBuilder {
    id: i64,
    name: String,
    email: String,
    roles: Vec<i64>,
    is_self: bool,
    is_super_admin: bool,
    params: Vec<Value>,
    extra: Vec<(String, Value)>,
}

impl AdminBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Assigns a role reference by id.
    pub fn role(mut self, role_id: i64) -> Self {
        self.roles.push(role_id);
        self
    }

    pub fn is_self(mut self, is_self: bool) -> Self {
        self.is_self = is_self;
        self
    }

    pub fn super_admin(mut self, is_super_admin: bool) -> Self {
        self.is_super_admin = is_super_admin;
        self
    }

    /// Adds a custom parameter with its declared type (`STRING`, `NUMBER`, ...).
    pub fn param(mut self, name: &str, field_type: &str, value: Value) -> Self {
        self.params.push(json!({
            "name": name,
            "label": name,
            "type": field_type,
            "value": value,
        }));
        self
    }

    /// Adds an arbitrary top-level field, e.g. a stray `password` some backends echo.
    pub fn field(mut self, key: &str, value: Value) -> Self {
        self.extra.push((key.to_string(), value));
        self
    }

    pub fn build(self) -> Value {
        let roles: Vec<Value> = self.roles.iter().map(|id| json!({ "id": id })).collect();

        let mut body = json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "roles": roles,
            "isSelf": self.is_self,
            "isSuperAdmin": self.is_super_admin,
            "params": self.params,
        });

        if let Value::Object(map) = &mut body {
            for (key, value) in self.extra {
                map.insert(key, value);
            }
        }

        body
    }
}
