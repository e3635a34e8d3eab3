pub mod admin_form;
pub mod admin_list;
pub mod home;
pub mod not_found;
pub mod role_form;
pub mod role_list;

pub use admin_form::AdminForm;
pub use admin_list::AdminList;
pub use home::Home;
pub use not_found::NotFound;
pub use role_form::RoleForm;
pub use role_list::RoleList;
