use crate::{
    client::model::error::ApiError,
    model::{
        api::SuccessDto,
        role::{RoleCreationPayloadDto, RoleDto, RoleUpdatePayloadDto},
        scope::ScopeGroupsData,
    },
};

use super::{
    helper::{delete, get, parse_response, post, put, send_request, serialize_json},
    path,
};

pub async fn get_role_list() -> Result<Vec<RoleDto>, ApiError> {
    let response = send_request(get(path::ROLES)).await?;
    parse_response(response).await
}

pub async fn get_role(role_id: i64) -> Result<RoleDto, ApiError> {
    let response = send_request(get(&path::role(role_id))).await?;
    parse_response(response).await
}

pub async fn create_role(payload: &RoleCreationPayloadDto) -> Result<RoleDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post(path::ROLES).body(body)).await?;
    parse_response(response).await
}

pub async fn update_role(role_id: i64, payload: &RoleUpdatePayloadDto) -> Result<RoleDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(put(&path::role(role_id)).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_role(role_id: i64) -> Result<SuccessDto, ApiError> {
    let response = send_request(delete(&path::role(role_id))).await?;
    parse_response(response).await
}

/// Get every grantable scope, grouped by module
pub async fn get_scopes() -> Result<ScopeGroupsData, ApiError> {
    let response = send_request(get(path::SCOPES)).await?;
    parse_response(response).await
}
