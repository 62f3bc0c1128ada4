pub mod joystick;
pub mod queue;
pub mod snapshot;
