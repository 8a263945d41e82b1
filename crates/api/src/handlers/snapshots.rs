use axum::{body::Bytes, extract::State};
use scheduler_domain::entities::{JobSnapshot, QuerySnapshotParam};
use scheduler_domain::keyspace::SnapshotScope;
use tracing::{debug, info};

use super::decode_body;
use crate::{
    error::ApiResult,
    projection::snapshot,
    response::{ApiResponse, MSG_DELETED, MSG_QUERIED},
    routes::AppState,
    validation::{query, ValidationError},
};

/// 按 group/ip/id 查询任务快照
pub async fn snapshot_list(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Vec<JobSnapshot>> {
    let request: QuerySnapshotParam = decode_body(&body, query::MSG_INVALID_PARAMS)?;
    let scope = SnapshotScope::resolve(&request);
    let prefix = state.keys.snapshot_scan_prefix(&scope);
    debug!(?scope, %prefix, "查询任务快照");

    let snapshots = match scope {
        SnapshotScope::Exact { .. } => {
            snapshot::find_exact_snapshot(state.store.as_ref(), &prefix).await?
        }
        _ => snapshot::list_snapshots(state.store.as_ref(), &prefix).await?,
    };
    Ok(ApiResponse::success(snapshots, MSG_QUERIED))
}

/// 删除单个任务快照
pub async fn snapshot_delete(State(state): State<AppState>, body: Bytes) -> ApiResult<()> {
    let request: QuerySnapshotParam = decode_body(&body, query::MSG_INVALID_PARAMS)?;
    query::snapshot_delete_rules().validate(&request)?;

    let key = state
        .keys
        .exact_snapshot_key(&request)
        .ok_or_else(|| ValidationError::new(query::MSG_INVALID_PARAMS))?;
    state.store.delete(&key).await?;

    info!(%key, "删除任务快照");
    Ok(ApiResponse::success_empty(MSG_DELETED))
}
