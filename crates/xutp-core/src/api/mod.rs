pub mod audio;
pub mod config;
pub mod session;
pub mod types;
