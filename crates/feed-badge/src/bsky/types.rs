//! Wire types for the XRPC endpoints used by the badge server.

use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `com.atproto.server.createSession`.
#[derive(Debug, Serialize)]
pub struct CreateSessionInput<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// Session returned by `com.atproto.server.createSession`.
///
/// Only lives for the request that created it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_jwt: SecretString,
    pub refresh_jwt: SecretString,
    pub did: String,
    pub handle: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Response of `app.bsky.feed.getFeedGenerator`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMetadata {
    pub view: FeedView,
    #[serde(default = "default_true")]
    pub is_online: bool,
    #[serde(default = "default_true")]
    pub is_valid: bool,
}

fn default_true() -> bool {
    true
}

/// `app.bsky.feed.defs#generatorView`, reduced to the fields badges use.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub did: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Omitted by the AppView when the feed has no likes.
    #[serde(default)]
    pub like_count: u64,
    pub creator: Creator,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(default)]
    pub did: String,
    pub handle: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Standard XRPC error body.
#[derive(Debug, Default, Deserialize)]
pub struct XrpcError {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl XrpcError {
    /// Decode an error body, keeping a truncated copy of non-JSON bodies as the message.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|_| XrpcError {
            error: None,
            message: Some(body.chars().take(200).collect()),
        })
    }
}

impl fmt::Display for XrpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.error.as_deref(), self.message.as_deref()) {
            (Some(error), Some(message)) => write!(f, "{}: {}", error, message),
            (Some(error), None) => f.write_str(error),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("no error details"),
        }
    }
}
