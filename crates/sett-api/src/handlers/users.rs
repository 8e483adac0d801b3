use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{
    AppState,
    dto::{ApiResponse, UserAccount},
    errors::ApiError,
};

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "User",
    params(
        ("user_id" = String, Path, description = "User ethereum account address")
    ),
    responses(
        (status = 200, description = "User positions and earnings across setts", body = UserAccount),
        (status = 400, description = "Missing user id"),
        (status = 404, description = "User is not a protocol participant"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_user_account(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.accounts.get_user_account_summary(&user_id).await?;

    Ok(Json(ApiResponse::ok(UserAccount::from(summary))))
}
