pub mod sim;
pub mod time;
