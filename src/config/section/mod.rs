//! Configuration section definitions.
//!
//! Each module corresponds to a section in `seo.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `site`   | `[site]`     | Brand name, origin, default copy/images  |
//! | `social` | `[social]`   | Twitter handle, Organization profiles    |
//! | `hosts`  | `[hosts]`    | Production host canonicalization         |
//! | `limits` | `[limits]`   | Title/description length caps            |
//! | `robots` | `[robots]`   | Robots directives                        |

mod hosts;
mod limits;
mod robots;
mod site;
mod social;

pub use hosts::HostsConfig;
pub use limits::LimitsConfig;
pub use robots::RobotsConfig;
pub use site::SiteInfoConfig;
pub use social::SocialConfig;
