//! Badge descriptions and the projections that produce them.
//!
//! A [`BadgeType`] selects one metric of a feed generator and turns it into
//! a [`BadgeDescription`]; [`render::BadgeRenderer`] turns the description
//! into SVG.

pub mod render;
mod width;

use std::fmt;
use std::str::FromStr;

use crate::bsky::FeedView;
use crate::error::AppError;

pub use render::BadgeRenderer;

/// Accent color shared by every feed badge.
pub const ACCENT_COLOR: &str = "rgb(0, 133, 255)";

/// Which feed metric a badge shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeType {
    #[default]
    Likes,
    Name,
    Creator,
}

impl BadgeType {
    pub const ALL: [BadgeType; 3] = [BadgeType::Likes, BadgeType::Name, BadgeType::Creator];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeType::Likes => "likes",
            BadgeType::Name => "name",
            BadgeType::Creator => "creator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BadgeType::Likes => "Feed Likes",
            BadgeType::Name => "Feed Name",
            BadgeType::Creator => "Feed Creator",
        }
    }

    /// Project feed metadata onto a flat badge in the accent color.
    pub fn project(&self, feed: &FeedView) -> BadgeDescription {
        let message = match self {
            BadgeType::Likes => feed.like_count.to_string(),
            BadgeType::Name => feed.display_name.clone(),
            BadgeType::Creator => feed.creator.handle.clone(),
        };

        BadgeDescription {
            label: self.label().to_string(),
            message,
            color: BadgeColor::accent(),
            style: BadgeStyle::Flat,
        }
    }
}

impl FromStr for BadgeType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "likes" => Ok(BadgeType::Likes),
            "name" => Ok(BadgeType::Name),
            "creator" => Ok(BadgeType::Creator),
            other => Err(AppError::UnknownBadgeType(other.to_string())),
        }
    }
}

impl fmt::Display for BadgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual style of the rendered badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    /// Rounded corners with a light gradient.
    #[default]
    Flat,
    /// Square corners, no gradient.
    FlatSquare,
}

impl BadgeStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeStyle::Flat => "flat",
            BadgeStyle::FlatSquare => "flat-square",
        }
    }
}

impl FromStr for BadgeStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flat" => Ok(BadgeStyle::Flat),
            "flat-square" => Ok(BadgeStyle::FlatSquare),
            other => Err(AppError::UnknownStyle(other.to_string())),
        }
    }
}

impl fmt::Display for BadgeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS color used for the message half of a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeColor(String);

impl BadgeColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self(color.into())
    }

    pub fn accent() -> Self {
        Self::new(ACCENT_COLOR)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Everything needed to draw a badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeDescription {
    pub label: String,
    pub message: String,
    pub color: BadgeColor,
    pub style: BadgeStyle,
}

impl BadgeDescription {
    pub fn with_style(mut self, style: BadgeStyle) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bsky::Creator;

    fn sample_feed() -> FeedView {
        FeedView {
            uri: "at://did:plc:abc123/app.bsky.feed.generator/test".to_string(),
            did: "did:web:feeds.example.com".to_string(),
            display_name: "Test Feed".to_string(),
            description: None,
            like_count: 42,
            creator: Creator {
                did: "did:plc:abc123".to_string(),
                handle: "alice.test".to_string(),
                display_name: None,
            },
        }
    }

    #[test]
    fn test_likes_projection() {
        let badge = BadgeType::Likes.project(&sample_feed());
        assert_eq!(badge.label, "Feed Likes");
        assert_eq!(badge.message, "42");
    }

    #[test]
    fn test_name_projection() {
        let badge = BadgeType::Name.project(&sample_feed());
        assert_eq!(badge.label, "Feed Name");
        assert_eq!(badge.message, "Test Feed");
    }

    #[test]
    fn test_creator_projection() {
        let badge = BadgeType::Creator.project(&sample_feed());
        assert_eq!(badge.label, "Feed Creator");
        assert_eq!(badge.message, "alice.test");
    }

    #[test]
    fn test_projections_share_color_and_style() {
        for badge_type in BadgeType::ALL {
            let badge = badge_type.project(&sample_feed());
            assert_eq!(badge.label, badge_type.label());
            assert_eq!(badge.color.as_str(), "rgb(0, 133, 255)");
            assert_eq!(badge.style, BadgeStyle::Flat);
        }
    }

    #[test]
    fn test_badge_type_parse() {
        for badge_type in BadgeType::ALL {
            let parsed: BadgeType = badge_type.as_str().parse().unwrap();
            assert_eq!(parsed, badge_type);
        }
        assert_eq!(BadgeType::default(), BadgeType::Likes);
        assert!(matches!(
            "Likes".parse::<BadgeType>(),
            Err(AppError::UnknownBadgeType(t)) if t == "Likes"
        ));
        assert!("".parse::<BadgeType>().is_err());
    }

    #[test]
    fn test_badge_style_parse() {
        let flat: BadgeStyle = "flat".parse().unwrap();
        assert_eq!(flat, BadgeStyle::Flat);

        let square: BadgeStyle = "flat-square".parse().unwrap();
        assert_eq!(square, BadgeStyle::FlatSquare);

        let unknown = "plastic".parse::<BadgeStyle>();
        assert!(matches!(unknown, Err(AppError::UnknownStyle(_))));
    }
}
