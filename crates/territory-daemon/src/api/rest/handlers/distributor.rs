//! Distributor handlers: access checks and policy management

use crate::api::rest::state::AppState;
use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    Json,
};
use serde::Deserialize;
use territory_policy::{explain, Decision};
use territory_registry::RegistryError;
use territory_types::{CreatePolicyRequest, DistributorName, LocationCode, Policy};

/// Body of a granted access check
pub const ACCESS_GRANTED: &str = "YES";

/// Body of a denied access check
pub const ACCESS_DENIED: &str = "NO";

/// Header listing requested includes dropped because the parent does not
/// grant them, comma separated
pub const DROPPED_INCLUDES_HEADER: &str = "x-dropped-includes";

/// Access check query
#[derive(Debug, Deserialize)]
pub struct AccessQuery {
    #[serde(default)]
    pub distributor: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Check whether a distributor may serve a location
pub async fn check_access(
    State(state): State<AppState>,
    Query(query): Query<AccessQuery>,
) -> ApiResult<(StatusCode, &'static str)> {
    let (distributor, location) = match (query.distributor.as_deref(), query.location.as_deref())
    {
        (Some(d), Some(l)) if !d.is_empty() && !l.is_empty() => (d, l),
        _ => {
            tracing::warn!(?query, "Access check missing parameters");
            return Err(ApiError::MissingParameters);
        }
    };

    let name = DistributorName::new(distributor);
    let location = LocationCode::parse_strict(location)?;

    let policy = state.registry.get(&name).inspect_err(|_| {
        tracing::info!(distributor = %name, "Distributor not found");
    })?;

    let evaluation = explain(&policy, &location);
    tracing::debug!(
        distributor = %name,
        location = %location,
        source = ?evaluation.source,
        "Evaluated access"
    );
    tracing::info!(
        distributor = %name,
        location = %location,
        decision = %evaluation.decision,
        "Access checked"
    );

    Ok(match evaluation.decision {
        Decision::Granted => (StatusCode::OK, ACCESS_GRANTED),
        Decision::Denied => (StatusCode::FORBIDDEN, ACCESS_DENIED),
    })
}

/// Create a distributor policy.
///
/// A name that is already taken answers 409 with the stored policy.
pub async fn create_distributor(
    State(state): State<AppState>,
    payload: Result<Json<CreatePolicyRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, HeaderMap, Json<Policy>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Invalid create payload");
        ApiError::InvalidPayload(rejection.body_text())
    })?;
    let name = request.name.clone();

    match state.registry.create(request) {
        Ok(creation) => {
            let mut headers = HeaderMap::new();
            if !creation.dropped_includes.is_empty() {
                let dropped = creation
                    .dropped_includes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                tracing::warn!(
                    distributor = %name,
                    dropped = %dropped,
                    "Dropped includes not granted by parent"
                );
                match HeaderValue::from_str(&dropped) {
                    Ok(value) => {
                        headers.insert(DROPPED_INCLUDES_HEADER, value);
                    }
                    Err(_) => {
                        tracing::debug!(distributor = %name, "Dropped includes not header-safe");
                    }
                }
            }

            tracing::info!(
                distributor = %name,
                parent = ?creation.policy.parent_name,
                "Created distributor"
            );
            Ok((
                StatusCode::CREATED,
                headers,
                Json(Policy::clone(&creation.policy)),
            ))
        }
        Err(RegistryError::AlreadyExists { existing }) => {
            tracing::info!(distributor = %name, "Distributor already exists");
            Ok((
                StatusCode::CONFLICT,
                HeaderMap::new(),
                Json(Policy::clone(&existing)),
            ))
        }
        Err(err) => {
            tracing::warn!(distributor = %name, error = %err, "Create failed");
            Err(err.into())
        }
    }
}

/// Get a stored policy
pub async fn get_distributor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Policy>> {
    let policy = state.registry.get(&DistributorName::new(name))?;
    Ok(Json(Policy::clone(&policy)))
}

/// List stored distributor names
pub async fn list_distributors(State(state): State<AppState>) -> Json<Vec<DistributorName>> {
    Json(state.registry.names())
}

/// Reject methods other than GET and POST on the access endpoint
pub async fn method_not_allowed(method: Method) -> ApiError {
    tracing::warn!(%method, "Method not allowed");
    ApiError::MethodNotAllowed
}
