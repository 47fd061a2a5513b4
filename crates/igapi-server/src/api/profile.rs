use axum::{
    extract::{Path, State},
    Json,
};

use igapi_instagram::{Profile, ProfileSource};

use super::{map_source_error, ApiError, ApiResponse, AppState};

pub(super) async fn get_profile<S: ProfileSource>(
    State(state): State<AppState<S>>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Profile>>, ApiError> {
    tracing::info!(username = %username, "fetching profile");

    let profile = state
        .source
        .fetch_profile(&username)
        .await
        .map_err(map_source_error)?;

    Ok(Json(ApiResponse {
        status: "success",
        data: profile,
    }))
}
