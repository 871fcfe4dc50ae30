//! HTTP handlers for the feed badge server.

pub mod badge;
pub mod health;

pub use badge::feed_badge;
pub use health::health_check;
