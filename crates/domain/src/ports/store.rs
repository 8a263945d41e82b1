use async_trait::async_trait;
use scheduler_core::SchedulerResult;

/// 前缀扫描返回的一条记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: Vec<u8>,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 强一致的键值协调存储
#[async_trait]
pub trait CoordinationStore: Send + Sync {
    /// 读取单个键，键不存在时返回 `None`
    async fn get(&self, key: &str) -> SchedulerResult<Option<Vec<u8>>>;

    async fn put(&self, key: &str, value: Vec<u8>) -> SchedulerResult<()>;

    async fn delete(&self, key: &str) -> SchedulerResult<()>;

    /// 按键的字典序返回以 `prefix` 开头的记录，最多 `limit` 条
    async fn get_with_prefix(&self, prefix: &str, limit: usize) -> SchedulerResult<Vec<KeyValue>>;
}
