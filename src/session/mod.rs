pub mod exercise;
pub mod state;
pub mod timer;
