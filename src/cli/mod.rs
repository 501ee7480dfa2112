pub mod app;
pub mod logging;
pub mod steps;

#[cfg(feature = "tui")]
pub mod tui;

pub use app::{Cli, Commands, RunArgs};
