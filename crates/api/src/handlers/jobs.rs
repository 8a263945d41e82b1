use axum::{body::Bytes, extract::State};
use scheduler_domain::entities::JobConf;
use tracing::info;

use super::decode_body;
use crate::{
    error::ApiResult,
    response::{ApiResponse, MSG_CREATED, MSG_DELETED, MSG_QUERIED, MSG_UPDATED},
    routes::AppState,
    validation::job,
};

/// 任务类请求体解析失败时的消息
pub const MSG_BODY_REQUIRED: &str = "请求参数不能为空";

/// 新建任务
pub async fn add_job(State(state): State<AppState>, body: Bytes) -> ApiResult<JobConf> {
    let request: JobConf = decode_body(&body, MSG_BODY_REQUIRED)?;
    job::add_rules(state.cron.as_ref()).validate(&request)?;

    let created = state.manager.add_job(request).await?;
    info!(id = %created.id, name = %created.name, group = %created.group, "创建任务");
    Ok(ApiResponse::success(created, MSG_CREATED))
}

/// 修改任务
pub async fn edit_job(State(state): State<AppState>, body: Bytes) -> ApiResult<JobConf> {
    let request: JobConf = decode_body(&body, MSG_BODY_REQUIRED)?;
    job::edit_rules(state.cron.as_ref()).validate(&request)?;

    let updated = state.manager.edit_job(request).await?;
    info!(id = %updated.id, name = %updated.name, "修改任务");
    Ok(ApiResponse::success(updated, MSG_UPDATED))
}

/// 删除任务，只需要 `Id`
pub async fn delete_job(State(state): State<AppState>, body: Bytes) -> ApiResult<JobConf> {
    let request: JobConf = decode_body(&body, MSG_BODY_REQUIRED)?;
    job::delete_rules().validate(&request)?;

    let deleted = state.manager.delete_job(request).await?;
    info!(id = %deleted.id, "删除任务");
    Ok(ApiResponse::success(deleted, MSG_DELETED))
}

pub async fn job_list(State(state): State<AppState>) -> ApiResult<Vec<JobConf>> {
    let jobs = state.manager.job_list().await?;
    Ok(ApiResponse::success(jobs, MSG_QUERIED))
}
