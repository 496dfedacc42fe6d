//! Server listing handler
//!
//! The composable listing endpoint: raw string parameters are interpreted
//! by the listing service, so parse failures surface as structured 400s.

use axum::{
    extract::{Query, State},
    Json,
};
use commune_service::dto::{ServerListItemResponse, ServerSelectParams};
use commune_service::services::ListingService;

use crate::extractors::OptionalAuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List servers filtered by the query parameter matrix
///
/// GET /server/select
pub async fn select_servers(
    State(state): State<AppState>,
    auth: OptionalAuthUser,
    Query(params): Query<ServerSelectParams>,
) -> ApiResult<Json<Vec<ServerListItemResponse>>> {
    let service = ListingService::new(state.service_context());
    let response = service.select(&params, auth.user_id()).await?;
    Ok(Json(response))
}
