use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pricebook_core::{Credentials, Item};

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::extract::LenientJson;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes and documentation.
pub fn router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/login", post(login));

    let public = Router::new()
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>),
    ),
    tag = "items"
)]
pub async fn list_items(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    axum::Json(state.items.list())
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "The first item with this ID, or an empty item", body = Item),
    ),
    tag = "items"
)]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    axum::Json(state.items.get_by_id(&id))
}

#[utoipa::path(
    post,
    path = "/items",
    request_body = Item,
    responses(
        (status = 200, description = "Item appended as given", body = Item),
    ),
    tag = "items"
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    LenientJson(item): LenientJson<Item>,
) -> impl IntoResponse {
    axum::Json(state.items.create(item))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID; overrides any id in the body")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "The replacement item, or the full collection if no item matched", body = pricebook_core::ReplaceOutcome),
    ),
    tag = "items"
)]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    LenientJson(item): LenientJson<Item>,
) -> impl IntoResponse {
    axum::Json(state.items.replace_by_id(&id, item))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(
        ("id" = String, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Collection after removing the first match", body = Vec<Item>),
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    axum::Json(state.items.delete_by_id(&id))
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/login",
    request_body = Credentials,
    responses(
        (status = 200, description = "Signed token, valid for five minutes", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    LenientJson(credentials): LenientJson<Credentials>,
) -> Result<String, ApiError> {
    Ok(state.tokens.login(&credentials)?)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy",
        items: state.items.len(),
    })
}
