//! # Scheduler API
//!
//! 分布式任务调度集群的管理控制面，提供任务、任务集群、节点、执行计划、
//! 客户端和任务快照的HTTP接口。
//!
//! ## API 端点
//!
//! 除健康检查外全部为 `POST`，请求体为JSON：
//!
//! - `/job/add` `/job/edit` `/job/delete` `/job/list`
//! - `/group/add` `/group/list`
//! - `/node/list` `/plan/list` `/client/list`
//! - `/snapshot/list` `/snapshot/delete`
//! - `GET /health`
//!
//! ## 响应格式
//!
//! 所有接口返回HTTP 200，业务结果由 `Code` 区分：
//!
//! ```json
//! {"Code": 0, "Data": {"Id": "9f1c...", "Name": "report"}, "Message": "创建成功"}
//! {"Code": -1, "Message": "任务名称不能为空"}
//! ```
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use scheduler_api::{create_app, routes::AppState};
//!
//! let app = create_app(state, &config.api);
//! let listener = tokio::net::TcpListener::bind(&config.api.bind_address).await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod projection;
pub mod response;
pub mod routes;
pub mod validation;

use axum::Router;
use scheduler_core::ApiConfig;

pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;
pub use routes::AppState;

/// 组装路由和中间件
pub fn create_app(state: AppState, config: &ApiConfig) -> Router {
    let app = routes::create_routes(state)
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .layer(middleware::trace_layer());

    if config.cors_enabled {
        app.layer(middleware::cors_layer())
    } else {
        app
    }
}
