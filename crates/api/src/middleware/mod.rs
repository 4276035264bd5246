//! Request extractors that guard the admin surface.
//!
//! - [`auth::AuthAdmin`] -- decodes the Bearer access token.
//! - [`rbac::RequireAdmin`] -- additionally requires the `admin` role claim.

pub mod auth;
pub mod rbac;
