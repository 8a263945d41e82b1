use async_trait::async_trait;
use scheduler_core::SchedulerResult;

use crate::entities::{Group, GroupConf, JobConf, SchedulePlan};

/// 任务与任务集群定义的管理器
///
/// 负责持久化和业务校验（如集群是否存在、名称是否重复），
/// 返回的错误会原样透传给API调用方。
#[async_trait]
pub trait JobManager: Send + Sync {
    /// 持久化新任务，返回带有已分配 `id` 的任务
    async fn add_job(&self, job: JobConf) -> SchedulerResult<JobConf>;

    async fn edit_job(&self, job: JobConf) -> SchedulerResult<JobConf>;

    async fn delete_job(&self, job: JobConf) -> SchedulerResult<JobConf>;

    async fn job_list(&self) -> SchedulerResult<Vec<JobConf>>;

    async fn add_group(&self, group: GroupConf) -> SchedulerResult<GroupConf>;

    async fn group_list(&self) -> SchedulerResult<Vec<GroupConf>>;

    /// 已注册节点的名称
    async fn node_list(&self) -> SchedulerResult<Vec<String>>;
}

/// 运行时任务集群注册表，键为任务集群定义的存储键
#[async_trait]
pub trait GroupRegistry: Send + Sync {
    async fn group(&self, key: &str) -> Option<Group>;
}

/// 调度器当前持有的执行计划
#[async_trait]
pub trait SchedulePlanSource: Send + Sync {
    async fn schedule_plans(&self) -> Vec<SchedulePlan>;
}

/// Cron表达式语法校验
pub trait CronParser: Send + Sync {
    fn parse(&self, expr: &str) -> SchedulerResult<()>;
}
