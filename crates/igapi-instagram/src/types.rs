//! Domain view entities built from wire responses.
//!
//! `Profile` and `Post` serialize directly into the response field names the
//! HTTP layer exposes; both are constructed fresh per request and never
//! stored.

use chrono::{DateTime, Utc};
use serde::Serialize;

use igapi_core::text::{extract_hashtags, extract_mentions, truncate_chars, MAX_CAPTION_CHARS};

use crate::error::SourceError;
use crate::wire;

/// A profile's descriptive and statistical attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub username: String,
    pub full_name: String,
    pub bio: String,
    pub biography_hashtags: Vec<String>,
    pub biography_mentions: Vec<String>,
    pub external_url: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub posts_count: u64,
    pub profile_pic_url: String,
    pub is_private: bool,
    pub is_verified: bool,
    pub is_business: bool,
    /// Non-null only when `is_business` is set.
    pub business_category: Option<String>,
    /// Pagination handle for the timeline; never serialized.
    #[serde(skip)]
    pub feed: FeedCursor,
}

/// Where to resume the profile's timeline: the page embedded in the profile
/// response plus the cursor for the next one.
#[derive(Debug, Clone, Default)]
pub struct FeedCursor {
    pub(crate) username: String,
    pub(crate) user_id: String,
    pub(crate) first_page: Vec<Post>,
    pub(crate) end_cursor: Option<String>,
    pub(crate) has_next_page: bool,
}

/// A single published media item and its engagement metrics.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: i64,
    pub shortcode: String,
    /// Canonical post URL built from the shortcode.
    pub url: String,
    /// Caption text, truncated to [`MAX_CAPTION_CHARS`] characters.
    pub caption: Option<String>,
    /// Hashtags extracted from the full (untruncated) caption.
    pub caption_hashtags: Vec<String>,
    pub likes: u64,
    pub comments: u64,
    pub timestamp: DateTime<Utc>,
    pub media_url: String,
    pub is_video: bool,
    /// Non-null only for video posts.
    pub video_view_count: Option<i64>,
    pub typename: PostKind,
}

/// Media type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostKind {
    #[serde(rename = "GraphImage")]
    Image,
    #[serde(rename = "GraphVideo")]
    Video,
    #[serde(rename = "GraphSidecar")]
    Sidecar,
}

impl Profile {
    /// Builds a `Profile` from a `web_profile_info` user object, mapping the
    /// embedded first timeline page eagerly so the post stream can start
    /// without another request.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Other`] if an embedded media node carries a
    /// non-numeric ID.
    pub(crate) fn from_wire(user: wire::User) -> Result<Self, SourceError> {
        let media = user.edge_owner_to_timeline_media;
        let first_page = media
            .edges
            .into_iter()
            .map(|edge| Post::from_node(edge.node))
            .collect::<Result<Vec<_>, _>>()?;

        let business_category = if user.is_business_account {
            user.business_category_name
        } else {
            None
        };

        Ok(Self {
            feed: FeedCursor {
                username: user.username.clone(),
                user_id: user.id,
                first_page,
                end_cursor: media.page_info.end_cursor,
                has_next_page: media.page_info.has_next_page,
            },
            biography_hashtags: extract_hashtags(&user.biography),
            biography_mentions: extract_mentions(&user.biography),
            username: user.username,
            full_name: user.full_name,
            bio: user.biography,
            external_url: user.external_url,
            followers: user.edge_followed_by.count,
            following: user.edge_follow.count,
            posts_count: media.count,
            profile_pic_url: user.profile_pic_url_hd.unwrap_or(user.profile_pic_url),
            is_private: user.is_private,
            is_verified: user.is_verified,
            is_business: user.is_business_account,
            business_category,
        })
    }
}

impl Post {
    /// Builds a `Post` from a timeline media node.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Other`] if the node's media ID is not numeric.
    pub(crate) fn from_node(node: wire::PostNode) -> Result<Self, SourceError> {
        let id = node
            .id
            .parse::<i64>()
            .map_err(|_| SourceError::Other(format!("non-numeric media id '{}'", node.id)))?;

        let full_caption = node
            .edge_media_to_caption
            .edges
            .into_iter()
            .next()
            .map(|edge| edge.node.text);

        let caption_hashtags = full_caption
            .as_deref()
            .map(extract_hashtags)
            .unwrap_or_default();
        let caption = full_caption.map(|text| truncate_chars(&text, MAX_CAPTION_CHARS));

        let video_view_count = if node.is_video {
            node.video_view_count
        } else {
            None
        };

        Ok(Self {
            id,
            url: format!("https://www.instagram.com/p/{}/", node.shortcode),
            shortcode: node.shortcode,
            caption,
            caption_hashtags,
            likes: node.edge_liked_by.count,
            comments: node.edge_media_to_comment.count,
            timestamp: DateTime::from_timestamp(node.taken_at_timestamp, 0).unwrap_or_default(),
            media_url: node.display_url,
            is_video: node.is_video,
            video_view_count,
            typename: PostKind::from_wire(&node.typename, node.is_video),
        })
    }
}

impl PostKind {
    /// Maps the wire `__typename` to the closed three-variant discriminator,
    /// falling back on the `is_video` flag for unknown values.
    fn from_wire(typename: &str, is_video: bool) -> Self {
        match typename {
            "GraphVideo" => PostKind::Video,
            "GraphSidecar" => PostKind::Sidecar,
            "GraphImage" => PostKind::Image,
            _ if is_video => PostKind::Video,
            _ => PostKind::Image,
        }
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
