use scheduler_core::SchedulerResult;
use scheduler_domain::entities::{JobClient, Node, NodeState};
use scheduler_domain::keyspace::KeySpace;
use scheduler_domain::ports::{CoordinationStore, GroupRegistry, JobManager};

/// 节点列表，按管理器返回的顺序标注Leader/Follower
///
/// 先取节点名称再读选主键，两步任一失败都直接返回错误。选主键不存在表示
/// 当前没有Leader，所有节点都是Follower。
pub async fn list_nodes(
    manager: &dyn JobManager,
    store: &dyn CoordinationStore,
    keys: &KeySpace,
) -> SchedulerResult<Vec<Node>> {
    let names = manager.node_list().await?;
    let leader = store.get(&keys.leader_key()).await?;

    if names.is_empty() {
        return Ok(Vec::new());
    }

    Ok(names
        .into_iter()
        .map(|name| {
            let state = match &leader {
                Some(value) if value.as_slice() == name.as_bytes() => NodeState::Leader,
                _ => NodeState::Follower,
            };
            Node { name, state }
        })
        .collect())
}

/// 任务集群下的客户端，集群不在注册表中时返回 `None`
pub async fn list_clients(
    registry: &dyn GroupRegistry,
    keys: &KeySpace,
    group: &str,
) -> Option<Vec<JobClient>> {
    let registered = registry.group(&keys.group_conf_key(group)).await?;
    Some(
        registered
            .clients
            .into_iter()
            .map(|client| JobClient {
                name: client.name,
                path: client.path,
                group: group.to_string(),
            })
            .collect(),
    )
}
