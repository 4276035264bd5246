//! Well-known role name constants.
//!
//! Embedded in the `role` claim of every access token issued to an admin.

pub const ROLE_ADMIN: &str = "admin";
