use axum::{
    extract::{Path, Query, State},
    Json,
};
use futures::{StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};

use igapi_instagram::{Post, Profile, ProfileSource};

use super::{map_source_error, ApiError, AppState};

/// Number of posts returned when the caller passes no `limit`.
const DEFAULT_LIMIT: i64 = 12;

/// Hard ceiling; larger requests are silently reduced.
const MAX_LIMIT: i64 = 50;

#[derive(Debug, Deserialize)]
pub(super) struct PostsQuery {
    pub limit: Option<i64>,
}

/// Success envelope for the posts listing. The `count`/`profile` fields are
/// omitted for the private-account case, which carries `message` instead.
#[derive(Debug, Serialize)]
pub(super) struct PostsResponse {
    status: &'static str,
    data: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<ProfileSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Enough profile context that callers need not issue a second request.
#[derive(Debug, Serialize)]
pub(super) struct ProfileSummary {
    username: String,
    full_name: String,
    profile_pic_url: String,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            username: profile.username.clone(),
            full_name: profile.full_name.clone(),
            profile_pic_url: profile.profile_pic_url.clone(),
        }
    }
}

/// Clamps the requested limit into `0..=50` with a default of 12.
/// Non-positive values collapse to zero — an empty, successful listing.
pub(super) fn effective_limit(limit: Option<i64>) -> usize {
    usize::try_from(limit.unwrap_or(DEFAULT_LIMIT).clamp(0, MAX_LIMIT)).unwrap_or_default()
}

pub(super) async fn get_posts<S: ProfileSource>(
    State(state): State<AppState<S>>,
    Path(username): Path<String>,
    Query(query): Query<PostsQuery>,
) -> Result<Json<PostsResponse>, ApiError> {
    let limit = effective_limit(query.limit);
    tracing::info!(username = %username, limit, "fetching posts");

    let profile = state
        .source
        .fetch_profile(&username)
        .await
        .map_err(map_source_error)?;

    if profile.is_private {
        return Ok(Json(PostsResponse {
            status: "success",
            data: Vec::new(),
            count: None,
            profile: None,
            message: Some("This is a private account. Posts are not accessible."),
        }));
    }

    // take(limit) bounds the lazy stream; pages past the prefix are never
    // fetched from the source.
    let data: Vec<Post> = state
        .source
        .recent_posts(&profile)
        .take(limit)
        .try_collect()
        .await
        .map_err(map_source_error)?;

    Ok(Json(PostsResponse {
        status: "success",
        count: Some(data.len()),
        profile: Some(ProfileSummary::from(&profile)),
        data,
        message: None,
    }))
}
