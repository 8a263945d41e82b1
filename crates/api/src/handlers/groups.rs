use axum::{body::Bytes, extract::State};
use scheduler_domain::entities::GroupConf;
use tracing::info;

use super::{decode_body, jobs::MSG_BODY_REQUIRED};
use crate::{
    error::ApiResult,
    response::{ApiResponse, MSG_ADDED, MSG_QUERIED},
    routes::AppState,
    validation::group,
};

/// 新建任务集群
pub async fn add_group(State(state): State<AppState>, body: Bytes) -> ApiResult<GroupConf> {
    let request: GroupConf = decode_body(&body, MSG_BODY_REQUIRED)?;
    group::add_rules().validate(&request)?;

    let created = state.manager.add_group(request).await?;
    info!(name = %created.name, "添加任务集群");
    Ok(ApiResponse::success(created, MSG_ADDED))
}

pub async fn group_list(State(state): State<AppState>) -> ApiResult<Vec<GroupConf>> {
    let groups = state.manager.group_list().await?;
    Ok(ApiResponse::success(groups, MSG_QUERIED))
}
