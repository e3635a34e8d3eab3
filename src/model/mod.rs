pub mod admin;
pub mod api;
pub mod role;
pub mod scope;
