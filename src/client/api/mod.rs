pub mod path;

#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod admin;

#[cfg(feature = "web")]
pub mod role;

#[cfg(feature = "web")]
pub use admin::{create_admin, delete_admin, get_admin, get_admin_list, update_admin};

#[cfg(feature = "web")]
pub use role::{create_role, delete_role, get_role, get_role_list, get_scopes, update_role};
