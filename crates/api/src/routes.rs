use axum::{
    routing::{get, post},
    Router,
};
use scheduler_domain::keyspace::KeySpace;
use scheduler_domain::ports::{
    CoordinationStore, CronParser, GroupRegistry, JobManager, SchedulePlanSource,
};
use std::sync::Arc;

use crate::handlers::{
    clients::client_list,
    groups::{add_group, group_list},
    health::health_check,
    jobs::{add_job, delete_job, edit_job, job_list},
    nodes::node_list,
    plans::plan_list,
    snapshots::{snapshot_delete, snapshot_list},
};

/// API应用状态，集中持有所有协作方
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CoordinationStore>,
    pub manager: Arc<dyn JobManager>,
    pub plans: Arc<dyn SchedulePlanSource>,
    pub registry: Arc<dyn GroupRegistry>,
    pub cron: Arc<dyn CronParser>,
    pub keys: KeySpace,
}

/// 创建API路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // 健康检查
        .route("/health", get(health_check))
        // 任务
        .route("/job/add", post(add_job))
        .route("/job/edit", post(edit_job))
        .route("/job/delete", post(delete_job))
        .route("/job/list", post(job_list))
        // 任务集群
        .route("/group/add", post(add_group))
        .route("/group/list", post(group_list))
        // 集群状态
        .route("/node/list", post(node_list))
        .route("/plan/list", post(plan_list))
        .route("/client/list", post(client_list))
        // 任务快照
        .route("/snapshot/list", post(snapshot_list))
        .route("/snapshot/delete", post(snapshot_delete))
        .with_state(state)
}
