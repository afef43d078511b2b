//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod init;
pub mod render;

pub use args::{CheckArgs, Cli, Commands, RenderArgs, SourceArgs};
