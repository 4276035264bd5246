pub mod asset;
pub mod auth;
pub mod catalog;
pub mod reel;
