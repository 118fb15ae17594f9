//! JSON REST handlers for accessories.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use hapgate_app::ports::AccessoryClient;
use hapgate_app::services::characteristic_writer::SetCharacteristic;
use hapgate_domain::accessory::{AccessoryListing, AccessoryRecord};
use hapgate_domain::error::HubError;
use hapgate_domain::id::AccessoryUniqueId;
use hapgate_domain::layout::LayoutRoom;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for setting a characteristic value.
///
/// Both fields are optional here so that a missing field is reported with
/// its name instead of a generic deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCharacteristicRequest {
    pub characteristic_type: Option<String>,
    pub value: Option<serde_json::Value>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<AccessoryListing>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the layout endpoint.
pub enum LayoutResponse {
    Ok(Json<Vec<LayoutRoom>>),
}

impl IntoResponse for LayoutResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum AccessoryResponse {
    Ok(Json<AccessoryRecord>),
}

impl IntoResponse for AccessoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_unique_id(raw: &str) -> Result<AccessoryUniqueId, ApiError> {
    AccessoryUniqueId::from_str(raw).map_err(|err| ApiError::from(HubError::from(err)))
}

/// `GET /accessories`
pub async fn list<C>(State(state): State<AppState<C>>) -> Result<ListResponse, ApiError>
where
    C: AccessoryClient + 'static,
{
    state.gate.check()?;
    let accessories = state.directory.list_all().await?;
    Ok(ListResponse::Ok(Json(accessories)))
}

/// `GET /accessories/layout`
pub async fn layout<C>(State(state): State<AppState<C>>) -> Result<LayoutResponse, ApiError>
where
    C: AccessoryClient + 'static,
{
    let rooms = state.directory.layout().await?;
    Ok(LayoutResponse::Ok(Json(rooms)))
}

/// `GET /accessories/{unique_id}`
pub async fn get<C>(
    State(state): State<AppState<C>>,
    Path(unique_id): Path<String>,
) -> Result<AccessoryResponse, ApiError>
where
    C: AccessoryClient + 'static,
{
    state.gate.check()?;
    let unique_id = parse_unique_id(&unique_id)?;
    let accessory = state.directory.detail(&unique_id).await?;
    Ok(AccessoryResponse::Ok(Json(accessory)))
}

/// `PUT /accessories/{unique_id}`
pub async fn update<C>(
    State(state): State<AppState<C>>,
    Path(unique_id): Path<String>,
    body: Result<Json<SetCharacteristicRequest>, JsonRejection>,
) -> Result<AccessoryResponse, ApiError>
where
    C: AccessoryClient + 'static,
{
    let Json(req) = body?;
    let command = SetCharacteristic::new(req.characteristic_type, req.value)?;
    let unique_id = parse_unique_id(&unique_id)?;
    let accessory = state.writer.write(&unique_id, &command).await?;
    Ok(AccessoryResponse::Ok(Json(accessory)))
}
