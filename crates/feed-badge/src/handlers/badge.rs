//! Feed badge endpoint.
//!
//! `GET /?feed=<at-uri>&badgeType=<likes|name|creator>&style=<flat|flat-square>`

use std::str::FromStr;

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::badge::{BadgeStyle, BadgeType};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// Validated query parameters of a badge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeQuery {
    pub feed: String,
    pub badge_type: BadgeType,
    pub style: BadgeStyle,
}

impl BadgeQuery {
    /// Parse a raw query string.
    ///
    /// `feed` must appear exactly once and be non-empty; `badgeType` and
    /// `style` may appear at most once. Shape violations are reported as
    /// [`AppError::InvalidRequest`], unknown values with their own error.
    pub fn parse(query: Option<&str>) -> AppResult<Self> {
        let mut feed = Vec::new();
        let mut badge_type = Vec::new();
        let mut style = Vec::new();

        for (key, value) in url::form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            match key.as_ref() {
                "feed" => feed.push(value.into_owned()),
                "badgeType" => badge_type.push(value.into_owned()),
                "style" => style.push(value.into_owned()),
                _ => {}
            }
        }

        let feed = single(feed)?
            .filter(|f| !f.is_empty())
            .ok_or(AppError::InvalidRequest)?;
        let badge_type = single(badge_type)?;
        let style = single(style)?;

        Ok(Self {
            feed,
            badge_type: parse_or_default(badge_type)?,
            style: parse_or_default(style)?,
        })
    }
}

fn single(mut values: Vec<String>) -> AppResult<Option<String>> {
    match values.len() {
        0 => Ok(None),
        1 => Ok(values.pop()),
        _ => Err(AppError::InvalidRequest),
    }
}

fn parse_or_default<T>(value: Option<String>) -> AppResult<T>
where
    T: FromStr<Err = AppError> + Default,
{
    match value {
        Some(value) => value.parse(),
        None => Ok(T::default()),
    }
}

/// Render a badge for one feed generator.
pub async fn feed_badge(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<Response> {
    let credentials = state.bsky.credentials().ok_or(AppError::InvalidRequest)?;
    let query = BadgeQuery::parse(query.as_deref())?;

    tracing::info!(
        feed = %query.feed,
        badge_type = %query.badge_type,
        style = %query.style,
        "Rendering feed badge"
    );

    let session = state.api.create_session(&credentials).await?;
    let metadata = state.api.get_feed_generator(&session, &query.feed).await?;

    if !metadata.is_online || !metadata.is_valid {
        tracing::warn!(
            feed = %query.feed,
            is_online = metadata.is_online,
            is_valid = metadata.is_valid,
            "Feed generator reported unhealthy"
        );
    }

    let badge = query.badge_type.project(&metadata.view);
    let svg = state.renderer.render(&badge.with_style(query.style))?;

    let headers = [(header::CONTENT_TYPE, SVG_CONTENT_TYPE)];
    Ok((headers, svg).into_response())
}
