use axum::{body::Bytes, extract::State};
use scheduler_domain::entities::{JobClient, QueryClientParam};

use super::decode_body;
use crate::{
    error::ApiResult,
    projection::cluster,
    response::{ApiResponse, MSG_QUERIED},
    routes::AppState,
    validation::{query, ValidationError},
};

/// 任务集群下在线的客户端
pub async fn client_list(State(state): State<AppState>, body: Bytes) -> ApiResult<Vec<JobClient>> {
    let request: QueryClientParam = decode_body(&body, query::MSG_SELECT_GROUP)?;
    query::client_rules().validate(&request)?;

    let clients = cluster::list_clients(state.registry.as_ref(), &state.keys, &request.group)
        .await
        .ok_or_else(|| ValidationError::new(query::MSG_GROUP_NOT_FOUND))?;
    Ok(ApiResponse::success(clients, MSG_QUERIED))
}
