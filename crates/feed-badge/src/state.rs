//! Application state shared by the badge handlers.

use std::sync::Arc;

use crate::badge::BadgeRenderer;
use crate::bsky::FeedApi;
use crate::config::BskyConfig;

/// Shared application state.
///
/// Holds only values fixed at startup; nothing here is mutated by requests.
#[derive(Clone)]
pub struct AppState {
    /// Account and service configuration
    pub bsky: Arc<BskyConfig>,

    /// Upstream XRPC operations
    pub api: Arc<dyn FeedApi>,

    /// Compiled badge template
    pub renderer: Arc<BadgeRenderer>,
}

impl AppState {
    pub fn new(bsky: BskyConfig, api: Arc<dyn FeedApi>, renderer: BadgeRenderer) -> Self {
        Self {
            bsky: Arc::new(bsky),
            api,
            renderer: Arc::new(renderer),
        }
    }
}
