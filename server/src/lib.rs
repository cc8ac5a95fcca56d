//! HTTP API for the shared shopping list service.
//!
//! Routes:
//! - `POST   /shopping-list/create`
//! - `POST   /shopping-list/{id}/item/add`
//! - `PATCH  /shopping-list/{id}/item/{item_id}/complete`
//! - `DELETE /shopping-list/{id}/delete`
//!
//! The caller is identified by the `user-id` header. Bodies are validated here
//! before the service sees them; service outcomes are mapped to status codes
//! and nothing else.

pub mod validation;

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Json, Response},
    routing::{delete, patch, post},
};
use serde::{Deserialize, Serialize};
use shoplist_access::RoleDirectory;
use shoplist_service::{Outcome, ResourceService};
use shoplist_types::{CallerId, ItemId, ListId};

pub use validation::{FieldError, ValidationErrors};

/// Header carrying the caller identifier.
pub const USER_ID_HEADER: &str = "user-id";

/// Body of 403, 404, and delete confirmation responses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// The caller making the request. A missing or unreadable `user-id` header
/// yields the anonymous caller, which every gate denies.
#[derive(Debug, Clone)]
pub struct Caller(pub CallerId);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let caller = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(CallerId::from)
            .unwrap_or_else(CallerId::anonymous);
        Ok(Self(caller))
    }
}

/// Maps a service outcome onto an HTTP response.
pub struct OutcomeResponse(pub Outcome);

impl IntoResponse for OutcomeResponse {
    fn into_response(self) -> Response {
        match self.0 {
            Outcome::Created(resource) => (StatusCode::CREATED, Json(resource)).into_response(),
            Outcome::Ok(resource) => (StatusCode::OK, Json(resource)).into_response(),
            Outcome::Deleted(message) => message_response(StatusCode::OK, message),
            Outcome::NotFound(message) => message_response(StatusCode::NOT_FOUND, message),
            Outcome::Forbidden(message) => message_response(StatusCode::FORBIDDEN, message),
        }
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(MessageResponse { message })).into_response()
}

type AppState<D> = Arc<ResourceService<D>>;

async fn create_list_handler<D: RoleDirectory + 'static>(
    State(service): State<AppState<D>>,
    Caller(caller): Caller,
    body: Bytes,
) -> Result<OutcomeResponse, ValidationErrors> {
    let request = validation::create_list(&body)?;
    Ok(OutcomeResponse(service.create_list(&caller, request)))
}

async fn add_item_handler<D: RoleDirectory + 'static>(
    State(service): State<AppState<D>>,
    Caller(caller): Caller,
    Path(list_id): Path<String>,
    body: Bytes,
) -> Result<OutcomeResponse, ValidationErrors> {
    let request = validation::add_item(&body)?;
    let list_id = ListId::from(list_id);
    Ok(OutcomeResponse(service.add_item(&caller, &list_id, request)))
}

async fn complete_item_handler<D: RoleDirectory + 'static>(
    State(service): State<AppState<D>>,
    Caller(caller): Caller,
    Path((list_id, item_id)): Path<(String, String)>,
    body: Bytes,
) -> Result<OutcomeResponse, ValidationErrors> {
    let request = validation::set_item_checked(&body)?;
    let (list_id, item_id) = (ListId::from(list_id), ItemId::from(item_id));
    Ok(OutcomeResponse(service.set_item_checked(
        &caller, &list_id, &item_id, request,
    )))
}

async fn delete_list_handler<D: RoleDirectory + 'static>(
    State(service): State<AppState<D>>,
    Caller(caller): Caller,
    Path(list_id): Path<String>,
) -> OutcomeResponse {
    OutcomeResponse(service.delete_list(&caller, &ListId::from(list_id)))
}

/// Build the HTTP API router over the given service.
pub fn build_router<D: RoleDirectory + 'static>(service: Arc<ResourceService<D>>) -> Router {
    Router::new()
        .route("/shopping-list/create", post(create_list_handler::<D>))
        .route("/shopping-list/{id}/item/add", post(add_item_handler::<D>))
        .route(
            "/shopping-list/{id}/item/{item_id}/complete",
            patch(complete_item_handler::<D>),
        )
        .route("/shopping-list/{id}/delete", delete(delete_list_handler::<D>))
        .with_state(service)
}
