//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod asset_repo;
pub mod reel_repo;
pub mod session_repo;

pub use admin_repo::AdminRepo;
pub use asset_repo::AssetRepo;
pub use reel_repo::ReelRepo;
pub use session_repo::SessionRepo;
