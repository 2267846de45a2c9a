pub mod config;
pub mod events;
pub mod haptics;
pub mod nav;
pub mod player;
pub mod sys;
pub mod wheel;

mod macros;
