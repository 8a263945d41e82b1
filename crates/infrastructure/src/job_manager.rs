use async_trait::async_trait;
use scheduler_core::{SchedulerError, SchedulerResult};
use scheduler_domain::entities::{GroupConf, JobConf};
use scheduler_domain::keyspace::KeySpace;
use scheduler_domain::ports::{CoordinationStore, JobManager};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::group_registry::InMemoryGroupRegistry;

/// 列表类查询的扫描上限
const LIST_SCAN_LIMIT: usize = 10_000;

/// 以协调存储为持久层的任务管理器
///
/// 任务定义以JSON保存在 `<root>/server/conf/<id>`，任务集群定义保存在
/// `<root>/server/group/<name>`，节点名称取自 `<root>/server/node/` 下的键。
/// 所有写操作经由 `write_lock` 串行执行，先检查后写入的过程不会被并发请求打断。
pub struct StoreJobManager {
    store: Arc<dyn CoordinationStore>,
    keys: KeySpace,
    registry: Option<Arc<InMemoryGroupRegistry>>,
    write_lock: Mutex<()>,
}

impl StoreJobManager {
    pub fn new(store: Arc<dyn CoordinationStore>, keys: KeySpace) -> Self {
        Self {
            store,
            keys,
            registry: None,
            write_lock: Mutex::new(()),
        }
    }

    /// 新建任务集群时同步注册到运行时注册表
    pub fn with_registry(mut self, registry: Arc<InMemoryGroupRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    async fn ensure_group_exists(&self, name: &str) -> SchedulerResult<()> {
        match self.store.get(&self.keys.group_conf_key(name)).await? {
            Some(_) => Ok(()),
            None => Err(SchedulerError::GroupNotFound {
                name: name.to_string(),
            }),
        }
    }

    /// 同一任务集群内任务名称唯一，`except_id` 为正在修改的任务
    async fn ensure_unique_name(&self, job: &JobConf, except_id: Option<&str>) -> SchedulerResult<()> {
        let conflict = self
            .job_list()
            .await?
            .into_iter()
            .any(|j| j.group == job.group && j.name == job.name && Some(j.id.as_str()) != except_id);
        if conflict {
            return Err(SchedulerError::JobNameConflict {
                name: job.name.clone(),
            });
        }
        Ok(())
    }

    async fn load_job(&self, id: &str) -> SchedulerResult<JobConf> {
        let value = self
            .store
            .get(&self.keys.job_conf_key(id))
            .await?
            .ok_or_else(|| SchedulerError::JobNotFound { id: id.to_string() })?;
        Ok(serde_json::from_slice(&value)?)
    }

    async fn save_job(&self, job: &JobConf) -> SchedulerResult<()> {
        let value = serde_json::to_vec(job)?;
        self.store.put(&self.keys.job_conf_key(&job.id), value).await
    }

    async fn scan<T: DeserializeOwned>(&self, prefix: &str) -> SchedulerResult<Vec<T>> {
        let entries = self.store.get_with_prefix(prefix, LIST_SCAN_LIMIT).await?;
        Ok(entries
            .into_iter()
            .filter_map(|kv| match serde_json::from_slice(&kv.value) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(key = %kv.key, error = %e, "跳过无法解析的记录");
                    None
                }
            })
            .collect())
    }
}

#[async_trait]
impl JobManager for StoreJobManager {
    async fn add_job(&self, mut job: JobConf) -> SchedulerResult<JobConf> {
        let _guard = self.write_lock.lock().await;
        self.ensure_group_exists(&job.group).await?;
        self.ensure_unique_name(&job, None).await?;

        job.id = Uuid::new_v4().simple().to_string();
        self.save_job(&job).await?;

        info!(id = %job.id, name = %job.name, group = %job.group, "任务已创建");
        Ok(job)
    }

    async fn edit_job(&self, job: JobConf) -> SchedulerResult<JobConf> {
        let _guard = self.write_lock.lock().await;
        self.load_job(&job.id).await?;
        self.ensure_group_exists(&job.group).await?;
        self.ensure_unique_name(&job, Some(&job.id)).await?;

        self.save_job(&job).await?;

        info!(id = %job.id, name = %job.name, "任务已修改");
        Ok(job)
    }

    async fn delete_job(&self, job: JobConf) -> SchedulerResult<JobConf> {
        let _guard = self.write_lock.lock().await;
        let existing = self.load_job(&job.id).await?;
        self.store.delete(&self.keys.job_conf_key(&job.id)).await?;

        info!(id = %existing.id, name = %existing.name, "任务已删除");
        Ok(existing)
    }

    async fn job_list(&self) -> SchedulerResult<Vec<JobConf>> {
        self.scan(&self.keys.job_conf_root()).await
    }

    async fn add_group(&self, group: GroupConf) -> SchedulerResult<GroupConf> {
        let _guard = self.write_lock.lock().await;
        let key = self.keys.group_conf_key(&group.name);
        if self.store.get(&key).await?.is_some() {
            return Err(SchedulerError::GroupAlreadyExists {
                name: group.name.clone(),
            });
        }

        self.store.put(&key, serde_json::to_vec(&group)?).await?;
        if let Some(registry) = &self.registry {
            registry.register_group(&key, &group.name).await;
        }

        info!(name = %group.name, "任务集群已创建");
        Ok(group)
    }

    async fn group_list(&self) -> SchedulerResult<Vec<GroupConf>> {
        self.scan(&self.keys.group_conf_root()).await
    }

    async fn node_list(&self) -> SchedulerResult<Vec<String>> {
        let root = self.keys.node_root();
        let entries = self.store.get_with_prefix(&root, LIST_SCAN_LIMIT).await?;
        Ok(entries
            .into_iter()
            .filter_map(|kv| kv.key.strip_prefix(&root).map(str::to_string))
            .filter(|name| !name.is_empty())
            .collect())
    }
}
