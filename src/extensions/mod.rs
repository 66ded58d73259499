pub mod auth_helper;
pub mod env_extensions;
