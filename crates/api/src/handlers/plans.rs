use axum::extract::State;
use scheduler_domain::entities::SchedulePlan;

use crate::{
    error::ApiResult,
    response::{ApiResponse, MSG_QUERIED},
    routes::AppState,
};

/// 调度器当前的执行计划
pub async fn plan_list(State(state): State<AppState>) -> ApiResult<Vec<SchedulePlan>> {
    let plans = state.plans.schedule_plans().await;
    Ok(ApiResponse::success(plans, MSG_QUERIED))
}
