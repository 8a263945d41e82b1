use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

pub const CODE_SUCCESS: i32 = 0;
pub const CODE_FAILURE: i32 = -1;

pub const MSG_CREATED: &str = "创建成功";
pub const MSG_UPDATED: &str = "修改成功";
pub const MSG_DELETED: &str = "删除成功";
pub const MSG_ADDED: &str = "添加成功";
pub const MSG_QUERIED: &str = "查询成功";

/// 统一响应
///
/// 对外序列化为扁平结构 `{"Code":0,"Data":...,"Message":"..."}`，
/// `Data` 为空时不输出。无论成功失败HTTP状态码都是200。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: Option<T>, message: String },
    Failure { message: String },
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::Success {
            data: Some(data),
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Success { .. } => CODE_SUCCESS,
            Self::Failure { .. } => CODE_FAILURE,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message } => message,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => data.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl ApiResponse<()> {
    /// 成功但没有返回数据
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self::Success {
            data: None,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Envelope<'a, T> {
    code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    message: &'a str,
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            code: self.code(),
            data: self.data(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serializes_flat() {
        let response = ApiResponse::success(vec!["a", "b"], MSG_QUERIED);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({"Code": 0, "Data": ["a", "b"], "Message": "查询成功"})
        );
    }

    #[test]
    fn test_empty_list_serializes_as_array() {
        let response = ApiResponse::success(Vec::<String>::new(), MSG_QUERIED);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["Data"], json!([]));
    }

    #[test]
    fn test_failure_omits_data() {
        let response: ApiResponse<Vec<String>> = ApiResponse::failure("此任务集群不存在");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({"Code": -1, "Message": "此任务集群不存在"}));
        assert!(!response.is_success());
        assert!(response.data().is_none());
    }

    #[test]
    fn test_success_empty_omits_data() {
        let response = ApiResponse::success_empty(MSG_DELETED);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({"Code": 0, "Message": "删除成功"}));
        assert_eq!(response.code(), CODE_SUCCESS);
    }

    #[test]
    fn test_into_response_is_always_ok() {
        let failure: ApiResponse<()> = ApiResponse::failure("x");
        assert_eq!(failure.into_response().status(), StatusCode::OK);
    }
}
