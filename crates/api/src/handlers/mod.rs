pub mod clients;
pub mod groups;
pub mod health;
pub mod jobs;
pub mod nodes;
pub mod plans;
pub mod snapshots;

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;

/// 解析JSON请求体
///
/// 空请求体按所有字段缺省处理，交给后续校验给出具体消息；
/// 无法解析时以接口约定的 `message` 失败。
pub(crate) fn decode_body<T>(body: &Bytes, message: &'static str) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "请求体解析失败");
        ApiError::Decode(message)
    })
}
