use axum::extract::State;
use scheduler_domain::entities::Node;

use crate::{
    error::ApiResult,
    projection::cluster,
    response::{ApiResponse, MSG_QUERIED},
    routes::AppState,
};

/// 集群节点及其角色
pub async fn node_list(State(state): State<AppState>) -> ApiResult<Vec<Node>> {
    let nodes = cluster::list_nodes(state.manager.as_ref(), state.store.as_ref(), &state.keys).await?;
    Ok(ApiResponse::success(nodes, MSG_QUERIED))
}
