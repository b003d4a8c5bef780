pub mod capability;
pub mod config;
pub mod errors;
pub mod files;
pub mod menu;
pub mod protocol;
pub mod services;
