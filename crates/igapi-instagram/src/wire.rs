//! Response types for Instagram's public web JSON endpoints.
//!
//! ## Observed shapes
//!
//! ### `GET /api/v1/users/web_profile_info/?username=<u>`
//! Returns `{"data": {"user": {...}}}`. The `user` object is `null` (not
//! absent) for nonexistent accounts that slip past the 404, so it is
//! modeled as `Option`. The user object embeds the first page of the
//! timeline under `edge_owner_to_timeline_media`, including a pagination
//! cursor — the posts endpoint reuses that page instead of refetching it.
//!
//! ### `GET /graphql/query/?query_hash=...&variables=...`
//! Subsequent timeline pages. Same `edge_owner_to_timeline_media` shape,
//! nested under `data.user`.
//!
//! ### Counts
//! Engagement counts arrive as `{"count": N}` edge objects, never bare
//! integers. `edge_liked_by` may be absent on some node variants, so every
//! count edge defaults to zero.
//!
//! ### `business_category_name`
//! Present and `null` for personal accounts; only meaningful when
//! `is_business_account` is `true`.

use serde::Deserialize;

/// Top-level response from `web_profile_info`.
#[derive(Debug, Deserialize)]
pub struct WebProfileResponse {
    pub data: WebProfileData,
}

#[derive(Debug, Deserialize)]
pub struct WebProfileData {
    #[serde(default)]
    pub user: Option<User>,
}

/// A profile as returned by `web_profile_info`.
#[derive(Debug, Deserialize)]
pub struct User {
    /// Numeric account ID as a decimal string; needed for timeline paging.
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub edge_followed_by: CountEdge,
    #[serde(default)]
    pub edge_follow: CountEdge,
    #[serde(default)]
    pub profile_pic_url: String,
    /// Higher-resolution avatar; preferred over `profile_pic_url` when present.
    #[serde(default)]
    pub profile_pic_url_hd: Option<String>,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_business_account: bool,
    #[serde(default)]
    pub business_category_name: Option<String>,
    #[serde(default)]
    pub edge_owner_to_timeline_media: TimelineMedia,
}

/// An engagement-count edge: `{"count": N}`.
#[derive(Debug, Default, Deserialize)]
pub struct CountEdge {
    #[serde(default)]
    pub count: u64,
}

/// One page of a profile's timeline.
#[derive(Debug, Default, Deserialize)]
pub struct TimelineMedia {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub page_info: PageInfo,
    #[serde(default)]
    pub edges: Vec<PostEdge>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PostEdge {
    pub node: PostNode,
}

/// A single timeline media node.
#[derive(Debug, Deserialize)]
pub struct PostNode {
    /// Numeric media ID as a decimal string.
    pub id: String,
    pub shortcode: String,
    /// `GraphImage`, `GraphVideo`, or `GraphSidecar`.
    #[serde(rename = "__typename", default)]
    pub typename: String,
    #[serde(default)]
    pub edge_media_to_caption: CaptionEdges,
    #[serde(default)]
    pub edge_liked_by: CountEdge,
    #[serde(default)]
    pub edge_media_to_comment: CountEdge,
    /// Publication time as a unix timestamp (UTC seconds).
    #[serde(default)]
    pub taken_at_timestamp: i64,
    /// Direct CDN URL of the primary media item.
    #[serde(default)]
    pub display_url: String,
    #[serde(default)]
    pub is_video: bool,
    /// Only present on video nodes.
    #[serde(default)]
    pub video_view_count: Option<i64>,
}

/// Caption edges: zero or one entries in practice.
#[derive(Debug, Default, Deserialize)]
pub struct CaptionEdges {
    #[serde(default)]
    pub edges: Vec<CaptionEdge>,
}

#[derive(Debug, Deserialize)]
pub struct CaptionEdge {
    pub node: CaptionNode,
}

#[derive(Debug, Deserialize)]
pub struct CaptionNode {
    pub text: String,
}

/// Top-level response from the GraphQL timeline query.
#[derive(Debug, Deserialize)]
pub struct TimelinePageResponse {
    pub data: TimelinePageData,
}

#[derive(Debug, Deserialize)]
pub struct TimelinePageData {
    #[serde(default)]
    pub user: Option<TimelineUser>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineUser {
    #[serde(default)]
    pub edge_owner_to_timeline_media: TimelineMedia,
}
