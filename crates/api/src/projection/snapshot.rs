use scheduler_core::SchedulerResult;
use scheduler_domain::entities::JobSnapshot;
use scheduler_domain::ports::{CoordinationStore, KeyValue};
use tracing::debug;

/// 单次快照查询最多返回的条数
pub const SNAPSHOT_SCAN_LIMIT: usize = 500;

/// 扫描 `prefix` 下的快照
///
/// 空值和无法解析的值被跳过，只记debug日志，不影响其余条目；
/// 没有任何匹配时返回空列表。存储本身的错误原样返回。
pub async fn list_snapshots(
    store: &dyn CoordinationStore,
    prefix: &str,
) -> SchedulerResult<Vec<JobSnapshot>> {
    let entries = store.get_with_prefix(prefix, SNAPSHOT_SCAN_LIMIT).await?;
    Ok(entries.iter().filter_map(decode_snapshot).collect())
}

/// 精确查询单个快照
///
/// 仍按前缀扫描，但只保留键与 `key` 完全相同的条目，
/// 避免 id 为 `4` 时把 `42`、`420` 一并返回。
pub async fn find_exact_snapshot(
    store: &dyn CoordinationStore,
    key: &str,
) -> SchedulerResult<Vec<JobSnapshot>> {
    let entries = store.get_with_prefix(key, SNAPSHOT_SCAN_LIMIT).await?;
    Ok(entries
        .iter()
        .filter(|entry| entry.key == key)
        .filter_map(decode_snapshot)
        .collect())
}

fn decode_snapshot(entry: &KeyValue) -> Option<JobSnapshot> {
    if entry.value.is_empty() {
        debug!(key = %entry.key, "跳过空快照");
        return None;
    }
    match serde_json::from_slice(&entry.value) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            debug!(key = %entry.key, error = %e, "跳过无法解析的快照");
            None
        }
    }
}
