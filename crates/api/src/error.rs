use axum::response::{IntoResponse, Response};
use scheduler_core::SchedulerError;
use tracing::warn;

use crate::response::ApiResponse;
use crate::validation::ValidationError;

/// 请求处理失败的原因
///
/// 三类错误都以失败信封返回，`Display` 即对外的 `Message`。
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 请求体无法解析，消息按接口固定
    #[error("{0}")]
    Decode(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// 协作方返回的错误，原样透传
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "请求处理失败");
        ApiResponse::<()>::failure(self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_scheduler_error_passes_through_verbatim() {
        let error: ApiError = SchedulerError::GroupAlreadyExists {
            name: "trade".to_string(),
        }
        .into();

        assert_eq!(error.to_string(), "任务集群已存在: trade");
    }

    #[test]
    fn test_validation_error_message() {
        let error: ApiError = ValidationError::new("任务名称不能为空").into();
        assert_eq!(error.to_string(), "任务名称不能为空");
    }

    #[test]
    fn test_decode_error_message() {
        assert_eq!(ApiError::Decode("请求参数不能为空").to_string(), "请求参数不能为空");
    }

    #[test]
    fn test_error_response_is_ok_status() {
        let response = ApiError::Decode("非法的请求参数").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
