//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{categories, channels, health, listing, servers};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(listing_routes())
        .merge(category_routes())
        .merge(server_routes())
        .merge(channel_routes())
}

/// Server listing route
fn listing_routes() -> Router<AppState> {
    Router::new().route("/server/select", get(listing::select_servers))
}

/// Category routes
fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route("/categories", post(categories::create_category))
        .route("/categories/:category_id", get(categories::get_category))
        .route("/categories/:category_id", patch(categories::update_category))
        .route("/categories/:category_id", delete(categories::delete_category))
        .route("/categories/:category_id/icon", put(categories::upload_icon))
        .route("/categories/:category_id/icon", delete(categories::remove_icon))
}

/// Server routes
fn server_routes() -> Router<AppState> {
    Router::new()
        // Server CRUD
        .route("/servers", post(servers::create_server))
        .route("/servers/:server_id", get(servers::get_server))
        .route("/servers/:server_id", patch(servers::update_server))
        .route("/servers/:server_id", delete(servers::delete_server))
        // Server images
        .route("/servers/:server_id/icon", put(servers::upload_icon))
        .route("/servers/:server_id/icon", delete(servers::remove_icon))
        .route("/servers/:server_id/banner", put(servers::upload_banner))
        .route("/servers/:server_id/banner", delete(servers::remove_banner))
        // Membership
        .route("/servers/:server_id/members/@me", post(servers::join_server))
        .route("/servers/:server_id/members/@me", delete(servers::leave_server))
        // Server channels
        .route("/servers/:server_id/channels", get(channels::list_server_channels))
        .route("/servers/:server_id/channels", post(channels::create_channel))
}

/// Channel routes
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route("/channels/:channel_id", get(channels::get_channel))
        .route("/channels/:channel_id", patch(channels::update_channel))
        .route("/channels/:channel_id", delete(channels::delete_channel))
}
