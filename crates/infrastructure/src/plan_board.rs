use async_trait::async_trait;
use scheduler_domain::entities::SchedulePlan;
use scheduler_domain::ports::SchedulePlanSource;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 执行计划看板
///
/// 调度器把计算好的执行计划按任务ID写入这里，控制面只读取。
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanBoard {
    plans: Arc<RwLock<BTreeMap<String, SchedulePlan>>>,
}

impl InMemoryPlanBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert(&self, plan: SchedulePlan) {
        self.plans.write().await.insert(plan.id.clone(), plan);
    }

    pub async fn remove(&self, job_id: &str) -> Option<SchedulePlan> {
        self.plans.write().await.remove(job_id)
    }
}

#[async_trait]
impl SchedulePlanSource for InMemoryPlanBoard {
    async fn schedule_plans(&self) -> Vec<SchedulePlan> {
        self.plans.read().await.values().cloned().collect()
    }
}
