use async_trait::async_trait;
use scheduler_domain::entities::{ClientInfo, Group};
use scheduler_domain::ports::GroupRegistry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// 内存任务集群注册表
///
/// 键为任务集群定义在协调存储中的键，值为该集群及其当前连接的客户端。
/// 客户端的上线、下线由外部（客户端连接监听）驱动。
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupRegistry {
    groups: Arc<RwLock<HashMap<String, Group>>>,
}

impl InMemoryGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册任务集群，已存在时保持原有客户端
    pub async fn register_group(&self, key: &str, name: &str) {
        let mut groups = self.groups.write().await;
        groups.entry(key.to_string()).or_insert_with(|| {
            info!(key, name, "注册任务集群");
            Group {
                name: name.to_string(),
                clients: Vec::new(),
            }
        });
    }

    pub async fn remove_group(&self, key: &str) -> bool {
        self.groups.write().await.remove(key).is_some()
    }

    /// 客户端上线；同名客户端重复上线时更新其路径。集群不存在时返回 `false`
    pub async fn attach_client(&self, key: &str, client: ClientInfo) -> bool {
        let mut groups = self.groups.write().await;
        let Some(group) = groups.get_mut(key) else {
            return false;
        };

        debug!(group = %group.name, client = %client.name, "客户端上线");
        match group.clients.iter_mut().find(|c| c.name == client.name) {
            Some(existing) => existing.path = client.path,
            None => group.clients.push(client),
        }
        true
    }

    /// 客户端下线
    pub async fn detach_client(&self, key: &str, client_name: &str) -> bool {
        let mut groups = self.groups.write().await;
        let Some(group) = groups.get_mut(key) else {
            return false;
        };

        let before = group.clients.len();
        group.clients.retain(|c| c.name != client_name);
        debug!(group = %group.name, client = client_name, "客户端下线");
        group.clients.len() != before
    }
}

#[async_trait]
impl GroupRegistry for InMemoryGroupRegistry {
    async fn group(&self, key: &str) -> Option<Group> {
        self.groups.read().await.get(key).cloned()
    }
}
