//! Leaf utilities shared by the engine and the CLI.

pub mod date;
pub mod html;
pub mod plural;
pub mod text;

pub use plural::{plural_count, plural_s};
