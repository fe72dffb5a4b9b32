pub mod config;
pub mod output;
pub mod round;
pub mod stderr_buffer;
pub mod tui;
