pub mod auth;
pub mod home;
pub mod profile;
pub mod shared;
pub mod upload;
