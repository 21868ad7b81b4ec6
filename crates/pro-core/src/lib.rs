//! Core abstractions for the PRO Manizales landing site.
//!
//! This crate provides the fundamental types shared by the site and tools:
//! - `SiteConfig` - Site metadata and lead-capture settings
//! - `SessionId` - Per-page-session correlation identifier
//! - `TimeLeft` - Launch countdown arithmetic
//! - `CoreError` - Configuration errors

mod config;
mod countdown;
mod error;
mod session;

pub use config::*;
pub use countdown::*;
pub use error::*;
pub use session::*;
