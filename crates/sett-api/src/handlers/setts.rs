use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    AppState,
    dto::{ApiResponse, Sett},
};

#[utoipa::path(
    get,
    path = "/setts",
    tag = "Setts",
    responses(
        (status = 200, description = "Setts known to this service", body = [Sett])
    )
)]
pub async fn list_setts(State(state): State<AppState>) -> impl IntoResponse {
    let setts: Vec<Sett> = state.accounts.registry().iter().map(Sett::from).collect();

    Json(ApiResponse::ok(setts))
}
