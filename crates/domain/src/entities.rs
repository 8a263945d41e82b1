use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 任务状态：启用
pub const JOB_STATUS_ENABLED: i32 = 1;
/// 任务状态：停用
pub const JOB_STATUS_DISABLED: i32 = 2;

/// 任务定义
///
/// `id` 在持久化之前为空，由任务管理器分配；`status` 为 0 表示未填写。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobConf {
    #[serde(alias = "id")]
    pub id: String,
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "group")]
    pub group: String,
    #[serde(alias = "cron")]
    pub cron: String,
    #[serde(alias = "target")]
    pub target: String,
    #[serde(alias = "status")]
    pub status: i32,
    #[serde(alias = "remark")]
    pub remark: String,
}

impl JobConf {
    pub fn is_enabled(&self) -> bool {
        self.status == JOB_STATUS_ENABLED
    }
}

/// 任务集群（分组）定义
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GroupConf {
    #[serde(alias = "name")]
    pub name: String,
    #[serde(alias = "remark")]
    pub remark: String,
}

/// 节点角色，每次查询时根据选主键的值推导
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeState {
    Leader,
    Follower,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Node {
    pub name: String,
    pub state: NodeState,
}

/// 已连接的执行客户端
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    /// 客户端在协调存储中的注册路径
    pub path: String,
}

/// 运行时的任务集群，及其当前连接的客户端
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub clients: Vec<ClientInfo>,
}

/// 客户端列表的投影视图，`group` 取自查询条件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobClient {
    pub name: String,
    pub path: String,
    pub group: String,
}

/// 任务执行快照，由远端执行客户端以JSON写入协调存储
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct JobSnapshot {
    pub id: String,
    pub job_id: String,
    pub name: String,
    pub group: String,
    pub ip: String,
    pub cron: String,
    pub target: String,
    pub params: String,
    pub remark: String,
    pub create_time: String,
}

/// 调度器计算出的执行计划
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchedulePlan {
    pub id: String,
    pub name: String,
    pub group: String,
    pub cron: String,
    pub target: String,
    pub next_time: DateTime<Utc>,
    pub before_time: Option<DateTime<Utc>>,
}

/// 快照查询条件，全部可选；`group` 是最高位的过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QuerySnapshotParam {
    #[serde(alias = "group")]
    pub group: String,
    #[serde(alias = "ip")]
    pub ip: String,
    #[serde(alias = "id")]
    pub id: String,
}

/// 客户端查询条件
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueryClientParam {
    #[serde(alias = "group")]
    pub group: String,
}
