//! Administrators Test Utils
//!
//! Shared test data for the administrators panel. The panel never owns storage,
//! so everything here is wire-level: JSON bodies shaped exactly like the admin
//! backend's responses, ready to be decoded into the client DTOs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let role: RoleDto = serde_json::from_value(
//!     fixture::role::builder()
//!         .id(3)
//!         .scope("users.read", "Read")
//!         .build(),
//! )?;
//! ```

pub mod fixture;
