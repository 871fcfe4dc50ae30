//! Configuration module for the feed badge server.
//!
//! Configuration is loaded once at startup from environment variables using
//! the `envy` crate and handed to the router state. Handlers never read the
//! process environment themselves.

mod app;
mod bsky;

pub use app::AppConfig;
pub use bsky::{BskyConfig, Credentials};
