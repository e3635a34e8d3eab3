use crate::{
    client::model::error::ApiError,
    model::{
        admin::{AdminCreationPayloadDto, AdminDto, AdminUpdatePayloadDto},
        api::SuccessDto,
    },
};

use super::{
    helper::{delete, get, parse_response, post, put, send_request, serialize_json},
    path,
};

pub async fn get_admin_list() -> Result<Vec<AdminDto>, ApiError> {
    let response = send_request(get(path::ADMINS)).await?;
    parse_response(response).await
}

pub async fn get_admin(admin_id: i64) -> Result<AdminDto, ApiError> {
    let response = send_request(get(&path::admin(admin_id))).await?;
    parse_response(response).await
}

pub async fn create_admin(payload: &AdminCreationPayloadDto) -> Result<AdminDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(post(path::ADMINS).body(body)).await?;
    parse_response(response).await
}

pub async fn update_admin(
    admin_id: i64,
    payload: &AdminUpdatePayloadDto,
) -> Result<AdminDto, ApiError> {
    let body = serialize_json(payload)?;

    let response = send_request(put(&path::admin(admin_id)).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_admin(admin_id: i64) -> Result<SuccessDto, ApiError> {
    let response = send_request(delete(&path::admin(admin_id))).await?;
    parse_response(response).await
}
