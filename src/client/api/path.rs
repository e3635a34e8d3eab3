//! REST paths of the administrators backend.

pub const ROLES: &str = "/admin/rbac/roles";
pub const SCOPES: &str = "/admin/rbac/scopes";
pub const ADMINS: &str = "/admin/admins";

pub fn role(role_id: i64) -> String {
    format!("{}/{}", ROLES, role_id)
}

pub fn admin(admin_id: i64) -> String {
    format!("{}/{}", ADMINS, admin_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_item_paths() {
        assert_eq!(role(4), "/admin/rbac/roles/4");
        assert_eq!(admin(9), "/admin/admins/9");
        assert_eq!(SCOPES, "/admin/rbac/scopes");
    }
}
