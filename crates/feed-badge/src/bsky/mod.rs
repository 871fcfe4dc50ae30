//! Bluesky XRPC client.
//!
//! Two calls per badge: exchange the configured credentials for a session,
//! then look up the feed generator with the session's access token. Every
//! response is parsed into a typed value at this boundary; anything that
//! does not match becomes an [`AppError`] instead of flowing downstream.

pub mod types;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::{BskyConfig, Credentials};
use crate::error::{AppError, AppResult};

pub use types::{Creator, FeedMetadata, FeedView, Session, XrpcError};

const CREATE_SESSION: &str = "com.atproto.server.createSession";
const GET_FEED_GENERATOR: &str = "app.bsky.feed.getFeedGenerator";

/// Upstream operations needed to render a badge.
#[async_trait]
pub trait FeedApi: Send + Sync {
    /// Exchange credentials for a fresh session.
    async fn create_session(&self, credentials: &Credentials) -> AppResult<Session>;

    /// Fetch feed generator metadata using the session's access token.
    async fn get_feed_generator(&self, session: &Session, feed: &str) -> AppResult<FeedMetadata>;
}

#[derive(Clone, Debug)]
pub struct BskyClient {
    base_url: String,
    http: reqwest::Client,
}

impl BskyClient {
    pub fn new(config: &BskyConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("feed-badge/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.service_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn xrpc_url(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.base_url, nsid)
    }
}

#[async_trait]
impl FeedApi for BskyClient {
    /// POST /xrpc/com.atproto.server.createSession with { identifier, password }
    async fn create_session(&self, credentials: &Credentials) -> AppResult<Session> {
        let input = types::CreateSessionInput {
            identifier: &credentials.identifier,
            password: credentials.password.expose_secret(),
        };

        tracing::debug!(identifier = %credentials.identifier, "Creating session");

        let res = self
            .http
            .post(self.xrpc_url(CREATE_SESSION))
            .json(&input)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let detail = format!("{} - {}", status, XrpcError::from_body(&body));
            return Err(if status.is_client_error() {
                AppError::Authentication(detail)
            } else {
                AppError::SessionUnavailable(detail)
            });
        }

        let session: Session = parse_body(CREATE_SESSION, &body)?;
        if session.access_jwt.expose_secret().is_empty() {
            let detail = format!("{}: empty accessJwt", CREATE_SESSION);
            return Err(AppError::MalformedResponse(detail));
        }

        tracing::debug!(did = %session.did, handle = %session.handle, "Session created");
        Ok(session)
    }

    /// GET /xrpc/app.bsky.feed.getFeedGenerator?feed={feed}
    async fn get_feed_generator(&self, session: &Session, feed: &str) -> AppResult<FeedMetadata> {
        tracing::debug!(feed, "Fetching feed generator");

        let res = self
            .http
            .get(self.xrpc_url(GET_FEED_GENERATOR))
            .query(&[("feed", feed)])
            .bearer_auth(session.access_jwt.expose_secret())
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let err = XrpcError::from_body(&body);
            return Err(match status {
                StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                    AppError::FeedNotFound(format!("{}: {}", feed, err))
                }
                _ => AppError::FeedLookup(format!("{} - {}", status, err)),
            });
        }

        parse_body(GET_FEED_GENERATOR, &body)
    }
}

fn parse_body<T: DeserializeOwned>(nsid: &str, body: &str) -> AppResult<T> {
    serde_json::from_str(body)
        .map_err(|e| AppError::MalformedResponse(format!("{}: {}", nsid, e)))
}
