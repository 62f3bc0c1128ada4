pub mod instance;
pub mod trail;
