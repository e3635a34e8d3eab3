pub mod cache;
pub mod error;
pub mod option;
pub mod toast;
pub mod target;
