//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - An update DTO where the entity is editable

pub mod admin;
pub mod asset;
pub mod reel;
pub mod session;
