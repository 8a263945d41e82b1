//! 协调存储键空间
//!
//! 所有集群状态都以层级键的形式保存在协调存储中：
//!
//! ```text
//! <root>/client/snapshot/<group>/<ip>/<id>   任务执行快照
//! <root>/server/elect/leader                 当前主节点名称
//! <root>/server/conf/<id>                    任务定义
//! <root>/server/group/<name>                 任务集群定义（同时作为集群注册表的键）
//! <root>/server/node/<name>                  节点注册信息
//! ```
//!
//! 快照查询使用 [`SnapshotScope`] 把可选的 group/ip/id 过滤条件映射为唯一的键或键前缀。

use crate::entities::QuerySnapshotParam;

pub const DEFAULT_KEYSPACE_ROOT: &str = "/scheduler";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    root: String,
}

impl Default for KeySpace {
    fn default() -> Self {
        Self::new(DEFAULT_KEYSPACE_ROOT)
    }
}

impl KeySpace {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        Self {
            root: root.trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// 全部快照的前缀
    pub fn snapshot_root(&self) -> String {
        format!("{}/client/snapshot/", self.root)
    }

    /// 某个任务集群下全部快照的前缀
    pub fn group_snapshot_prefix(&self, group: &str) -> String {
        format!("{}{}/", self.snapshot_root(), group)
    }

    /// 某个任务集群中某个客户端的全部快照前缀
    pub fn client_snapshot_prefix(&self, group: &str, ip: &str) -> String {
        format!("{}{}/{}/", self.snapshot_root(), group, ip)
    }

    pub fn snapshot_key(&self, group: &str, ip: &str, id: &str) -> String {
        format!("{}{}", self.client_snapshot_prefix(group, ip), id)
    }

    pub fn leader_key(&self) -> String {
        format!("{}/server/elect/leader", self.root)
    }

    pub fn job_conf_root(&self) -> String {
        format!("{}/server/conf/", self.root)
    }

    pub fn job_conf_key(&self, id: &str) -> String {
        format!("{}{}", self.job_conf_root(), id)
    }

    pub fn group_conf_root(&self) -> String {
        format!("{}/server/group/", self.root)
    }

    /// 任务集群定义的键，集群注册表也以此作为查找键
    pub fn group_conf_key(&self, name: &str) -> String {
        format!("{}{}", self.group_conf_root(), name)
    }

    pub fn node_root(&self) -> String {
        format!("{}/server/node/", self.root)
    }

    pub fn node_key(&self, name: &str) -> String {
        format!("{}{}", self.node_root(), name)
    }

    /// 查询范围对应的扫描前缀
    pub fn snapshot_scan_prefix(&self, scope: &SnapshotScope<'_>) -> String {
        match scope {
            SnapshotScope::Exact { group, ip, id } => self.snapshot_key(group, ip, id),
            SnapshotScope::Client { group, ip } => self.client_snapshot_prefix(group, ip),
            SnapshotScope::Group { group } => self.group_snapshot_prefix(group),
            SnapshotScope::Cluster => self.snapshot_root(),
        }
    }

    /// 删除操作只允许精确到单个快照，三个条件缺一不可
    pub fn exact_snapshot_key(&self, query: &QuerySnapshotParam) -> Option<String> {
        if query.group.is_empty() || query.ip.is_empty() || query.id.is_empty() {
            return None;
        }
        Some(self.snapshot_key(&query.group, &query.ip, &query.id))
    }
}

/// 快照查询范围
///
/// 按 group → ip → id 的优先级逐级收窄。高位条件缺失时，低位条件被直接忽略，
/// 而不是报错或参与组合过滤：
///
/// | group | ip | id | 范围 |
/// |---|---|---|---|
/// | ✓ | ✓ | ✓ | `Exact` |
/// | ✓ | ✓ | – | `Client` |
/// | ✓ | – | 任意 | `Group` |
/// | – | 任意 | 任意 | `Cluster` |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotScope<'a> {
    Cluster,
    Group { group: &'a str },
    Client { group: &'a str, ip: &'a str },
    Exact { group: &'a str, ip: &'a str, id: &'a str },
}

impl<'a> SnapshotScope<'a> {
    pub fn resolve(query: &'a QuerySnapshotParam) -> Self {
        let (group, ip, id) = (query.group.as_str(), query.ip.as_str(), query.id.as_str());

        if !group.is_empty() && !ip.is_empty() && !id.is_empty() {
            SnapshotScope::Exact { group, ip, id }
        } else if !group.is_empty() && !ip.is_empty() {
            SnapshotScope::Client { group, ip }
        } else if !group.is_empty() {
            SnapshotScope::Group { group }
        } else {
            SnapshotScope::Cluster
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(group: &str, ip: &str, id: &str) -> QuerySnapshotParam {
        QuerySnapshotParam {
            group: group.to_string(),
            ip: ip.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_key_layout() {
        let keys = KeySpace::default();
        assert_eq!(keys.snapshot_root(), "/scheduler/client/snapshot/");
        assert_eq!(keys.group_snapshot_prefix("g"), "/scheduler/client/snapshot/g/");
        assert_eq!(
            keys.client_snapshot_prefix("g", "1.2.3.4"),
            "/scheduler/client/snapshot/g/1.2.3.4/"
        );
        assert_eq!(
            keys.snapshot_key("g", "1.2.3.4", "42"),
            "/scheduler/client/snapshot/g/1.2.3.4/42"
        );
        assert_eq!(keys.leader_key(), "/scheduler/server/elect/leader");
        assert_eq!(keys.group_conf_key("trade"), "/scheduler/server/group/trade");
        assert_eq!(keys.job_conf_key("7"), "/scheduler/server/conf/7");
        assert_eq!(keys.node_key("n1"), "/scheduler/server/node/n1");
    }

    #[test]
    fn test_root_trailing_slash_is_trimmed() {
        let keys = KeySpace::new("/forest/");
        assert_eq!(keys.root(), "/forest");
        assert_eq!(keys.leader_key(), "/forest/server/elect/leader");
    }

    #[test]
    fn test_resolve_all_filters_is_exact() {
        let q = query("g", "1.2.3.4", "42");
        let scope = SnapshotScope::resolve(&q);
        assert_eq!(
            scope,
            SnapshotScope::Exact {
                group: "g",
                ip: "1.2.3.4",
                id: "42"
            }
        );
        assert_eq!(
            KeySpace::default().snapshot_scan_prefix(&scope),
            "/scheduler/client/snapshot/g/1.2.3.4/42"
        );
    }

    #[test]
    fn test_resolve_group_and_ip() {
        let q = query("g", "1.2.3.4", "");
        let scope = SnapshotScope::resolve(&q);
        assert_eq!(scope, SnapshotScope::Client { group: "g", ip: "1.2.3.4" });
        assert_eq!(
            KeySpace::default().snapshot_scan_prefix(&scope),
            "/scheduler/client/snapshot/g/1.2.3.4/"
        );
    }

    #[test]
    fn test_resolve_group_without_ip_ignores_id() {
        let q = query("g", "", "42");
        let scope = SnapshotScope::resolve(&q);
        assert_eq!(scope, SnapshotScope::Group { group: "g" });
        assert_eq!(
            KeySpace::default().snapshot_scan_prefix(&scope),
            "/scheduler/client/snapshot/g/"
        );
    }

    #[test]
    fn test_resolve_without_group_ignores_ip_and_id() {
        for q in [query("", "", ""), query("", "1.2.3.4", ""), query("", "1.2.3.4", "42"), query("", "", "42")] {
            let scope = SnapshotScope::resolve(&q);
            assert_eq!(scope, SnapshotScope::Cluster);
            assert_eq!(
                KeySpace::default().snapshot_scan_prefix(&scope),
                "/scheduler/client/snapshot/"
            );
        }
    }

    #[test]
    fn test_exact_snapshot_key_requires_all_filters() {
        let keys = KeySpace::default();
        assert_eq!(
            keys.exact_snapshot_key(&query("g", "1.2.3.4", "42")).as_deref(),
            Some("/scheduler/client/snapshot/g/1.2.3.4/42")
        );
        assert!(keys.exact_snapshot_key(&query("", "1.2.3.4", "42")).is_none());
        assert!(keys.exact_snapshot_key(&query("g", "", "42")).is_none());
        assert!(keys.exact_snapshot_key(&query("g", "1.2.3.4", "")).is_none());
    }
}
