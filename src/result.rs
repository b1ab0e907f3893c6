//! Result types for extraction output.
//!
//! This module defines the typed content items produced by the classifier,
//! the preview metadata a caller supplies, and the finished news post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::text::is_acceptable_text;

/// One semantic unit of article content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentItem {
    /// A paragraph or loose run of text.
    Text { body: String },

    /// A heading with its level (1-6).
    Heading { body: String, level: u8 },

    /// A quotation.
    Quote { body: String },

    /// A hyperlink, with its anchor text when that adds something to the URL.
    Link { url: String, text: Option<String> },

    /// An image, with its alternative text when present.
    Image { url: String, alt: Option<String> },

    /// An embedded video, identified by its platform id.
    Video { platform_id: String },
}

impl ContentItem {
    /// Create a text item.
    #[must_use]
    pub fn text(body: impl Into<String>) -> Self {
        Self::Text { body: body.into() }
    }

    /// Create a heading item.
    #[must_use]
    pub fn heading(body: impl Into<String>, level: u8) -> Self {
        Self::Heading { body: body.into(), level }
    }

    /// Create a quote item.
    #[must_use]
    pub fn quote(body: impl Into<String>) -> Self {
        Self::Quote { body: body.into() }
    }

    /// Create a link item.
    #[must_use]
    pub fn link(url: impl Into<String>, text: Option<String>) -> Self {
        Self::Link { url: url.into(), text }
    }

    /// Create an image item.
    #[must_use]
    pub fn image(url: impl Into<String>, alt: Option<String>) -> Self {
        Self::Image { url: url.into(), alt }
    }

    /// Create a video item.
    #[must_use]
    pub fn video(platform_id: impl Into<String>) -> Self {
        Self::Video { platform_id: platform_id.into() }
    }

    /// Text carried by the item, if any: body for text/heading/quote,
    /// anchor text for links. Images and videos carry none.
    #[must_use]
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { body } | Self::Heading { body, .. } | Self::Quote { body } => Some(body),
            Self::Link { text, .. } => text.as_deref(),
            Self::Image { .. } | Self::Video { .. } => None,
        }
    }

    /// Replace the text carried by the item. No-op for images and videos.
    pub fn set_text(&mut self, value: String) {
        match self {
            Self::Text { body } | Self::Heading { body, .. } | Self::Quote { body } => {
                *body = value;
            }
            Self::Link { text, .. } => *text = Some(value),
            Self::Image { .. } | Self::Video { .. } => {}
        }
    }

    /// Append a text fragment split off by inline markup.
    ///
    /// A link without text only takes the fragment when it is substantive.
    /// Images and videos never accumulate text.
    pub fn append_text(&mut self, fragment: &str) {
        match self {
            Self::Text { body } | Self::Heading { body, .. } | Self::Quote { body } => {
                body.push_str(fragment);
            }
            Self::Link { text: Some(text), .. } => text.push_str(fragment),
            Self::Link { text, .. } => {
                if is_acceptable_text(fragment) {
                    *text = Some(fragment.to_string());
                }
            }
            Self::Image { .. } | Self::Video { .. } => {}
        }
    }

    /// Headings, quotes and links outrank a plain text attribution on an
    /// enclosing node and are never released by it.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Heading { .. } | Self::Quote { .. } | Self::Link { .. })
    }

    /// Check for an image item.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }

    /// Check for a link item.
    #[must_use]
    pub fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}

/// Article metadata known before the page body is parsed.
///
/// Usually gathered from a listing page, an RSS item or meta tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewMeta {
    /// Canonical article URI; also the base for relative references.
    pub uri: String,

    /// Article title.
    pub title: Option<String>,

    /// Explicit summary. When absent one is synthesized from the content.
    pub description: Option<String>,

    /// Explicit lead image URL.
    pub image: Option<String>,

    /// Publication time.
    pub published_at: Option<DateTime<Utc>>,
}

impl PreviewMeta {
    /// Create preview metadata for `uri` with a title.
    #[must_use]
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the explicit description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the explicit lead image.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the publication time.
    #[must_use]
    pub fn with_published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = Some(published_at);
        self
    }
}

/// A fully assembled news post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    /// Site profile that produced the post.
    pub source: String,

    /// Article title (never empty).
    pub title: String,

    /// Explicit or synthesized description (never empty).
    pub description: String,

    /// Publication time.
    pub published_at: DateTime<Utc>,

    /// Canonical article URI.
    pub uri: String,

    /// Lead image URL.
    pub image: Option<String>,

    /// Article content in document order.
    pub items: Vec<ContentItem>,
}
