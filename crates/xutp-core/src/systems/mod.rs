pub mod animation;
pub mod movement;
