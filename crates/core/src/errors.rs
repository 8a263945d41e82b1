use thiserror::Error;

/// 调度器错误类型定义
///
/// 协作方（协调存储、任务管理器、集群注册表）返回的错误都收敛到此类型，
/// API层会把它的文本原样作为失败消息返回给调用方。
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("协调存储错误: {0}")]
    Store(String),

    #[error("此任务记录不存在: {id}")]
    JobNotFound { id: String },

    #[error("任务分组不存在: {name}")]
    GroupNotFound { name: String },

    #[error("任务集群已存在: {name}")]
    GroupAlreadyExists { name: String },

    #[error("任务名称已存在: {name}")]
    JobNameConflict { name: String },

    #[error("无效的CRON表达式: {expr} - {message}")]
    InvalidCron { expr: String, message: String },

    #[error("序列化错误: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Serialization(err.to_string())
    }
}
