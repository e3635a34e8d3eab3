pub mod api;
pub mod app;
pub mod component;
pub mod config;
pub mod constant;
pub mod field;
pub mod i18n;
pub mod menu;
pub mod model;
pub mod paths;
pub mod route;
pub mod router;

pub use app::App;
