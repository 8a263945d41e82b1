use async_trait::async_trait;
use scheduler_core::SchedulerResult;
use scheduler_domain::ports::{CoordinationStore, KeyValue};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// 内存协调存储
///
/// 键按字典序保存，前缀扫描的返回顺序与etcd一致。单进程内读写线性一致。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCoordinationStore {
    entries: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
}

impl InMemoryCoordinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CoordinationStore for InMemoryCoordinationStore {
    async fn get(&self, key: &str) -> SchedulerResult<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> SchedulerResult<()> {
        debug!(key, bytes = value.len(), "写入协调存储");
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> SchedulerResult<()> {
        debug!(key, "删除协调存储键");
        self.entries.write().await.remove(key);
        Ok(())
    }

    /// `limit` 为 0 时不限制条数
    async fn get_with_prefix(&self, prefix: &str, limit: usize) -> SchedulerResult<Vec<KeyValue>> {
        let limit = if limit == 0 { usize::MAX } else { limit };
        let entries = self.entries.read().await;

        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .take(limit)
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> InMemoryCoordinationStore {
        let store = InMemoryCoordinationStore::new();
        for key in ["/a/2", "/a/1", "/a/3", "/ab/1", "/b/1"] {
            store.put(key, key.as_bytes().to_vec()).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_get_missing_key_is_none() {
        let store = InMemoryCoordinationStore::new();
        assert!(store.get("/nope").await.unwrap().is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = InMemoryCoordinationStore::new();
        store.put("/k", b"v".to_vec()).await.unwrap();
        assert_eq!(store.get("/k").await.unwrap(), Some(b"v".to_vec()));

        store.delete("/k").await.unwrap();
        assert!(store.get("/k").await.unwrap().is_none());

        // 删除不存在的键不是错误
        store.delete("/k").await.unwrap();
    }

    #[tokio::test]
    async fn test_prefix_scan_is_ordered_and_bounded_by_prefix() {
        let store = seeded().await;
        let keys: Vec<String> = store
            .get_with_prefix("/a/", 10)
            .await
            .unwrap()
            .into_iter()
            .map(|kv| kv.key)
            .collect();
        assert_eq!(keys, vec!["/a/1", "/a/2", "/a/3"]);
    }

    #[tokio::test]
    async fn test_prefix_scan_honours_limit() {
        let store = seeded().await;
        let entries = store.get_with_prefix("/a", 2).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].key, "/a/1");

        let unlimited = store.get_with_prefix("/a", 0).await.unwrap();
        assert_eq!(unlimited.len(), 4);
    }

    #[tokio::test]
    async fn test_prefix_scan_without_matches_is_empty() {
        let store = seeded().await;
        assert!(store.get_with_prefix("/c/", 10).await.unwrap().is_empty());
        assert_eq!(store.len().await, 5);
    }
}
