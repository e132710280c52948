pub mod encode;
pub mod error;
pub mod provider;
pub mod types;
pub mod verify;
