//! JSON-LD graph construction.
//!
//! | Module    | Purpose                                       |
//! |-----------|-----------------------------------------------|
//! | `clean`   | Schema-agnostic pruning of empty values       |
//! | `dedupe`  | Identity keys and first-wins deduplication    |
//! | `nodes`   | schema.org node constructors                  |
//! | `builder` | Page graph assembly                           |

mod builder;
mod clean;
mod dedupe;
pub mod nodes;

pub use builder::{GraphInput, build_graph};
pub use clean::clean;
pub use dedupe::{dedupe, identity_key};
