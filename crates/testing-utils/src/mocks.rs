//! Mock implementations for all collaborator traits
//!
//! The mocks keep their state in memory and record the calls they receive so
//! tests can assert on *how* a collaborator was used (which prefix was
//! scanned, whether the manager was reached at all), not only on the result.

use async_trait::async_trait;
use scheduler_core::{SchedulerError, SchedulerResult};
use scheduler_domain::entities::{Group, GroupConf, JobConf, SchedulePlan};
use scheduler_domain::ports::{
    CoordinationStore, CronParser, GroupRegistry, JobManager, KeyValue, SchedulePlanSource,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

/// Mock coordination store that records every call
#[derive(Debug, Clone, Default)]
pub struct MockCoordinationStore {
    entries: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    gets: Arc<Mutex<Vec<String>>>,
    scans: Arc<Mutex<Vec<(String, usize)>>>,
    deletes: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl MockCoordinationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Vec<u8>>,
    {
        let store = Self::new();
        {
            let mut map = store.entries.lock().unwrap();
            for (key, value) in entries {
                map.insert(key.into(), value.into());
            }
        }
        store
    }

    pub fn insert(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.into());
    }

    /// Every subsequent call fails with `SchedulerError::Store(message)`.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().unwrap().contains_key(key)
    }

    pub fn recorded_gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn recorded_scans(&self) -> Vec<(String, usize)> {
        self.scans.lock().unwrap().clone()
    }

    pub fn recorded_deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    fn check_failure(&self) -> SchedulerResult<()> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(SchedulerError::Store(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CoordinationStore for MockCoordinationStore {
    async fn get(&self, key: &str) -> SchedulerResult<Option<Vec<u8>>> {
        self.gets.lock().unwrap().push(key.to_string());
        self.check_failure()?;
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> SchedulerResult<()> {
        self.check_failure()?;
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> SchedulerResult<()> {
        self.deletes.lock().unwrap().push(key.to_string());
        self.check_failure()?;
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn get_with_prefix(&self, prefix: &str, limit: usize) -> SchedulerResult<Vec<KeyValue>> {
        self.scans.lock().unwrap().push((prefix.to_string(), limit));
        self.check_failure()?;
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .take(limit)
            .map(|(key, value)| KeyValue::new(key.clone(), value.clone()))
            .collect())
    }
}

/// Calls received by [`MockJobManager`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerCall {
    AddJob(JobConf),
    EditJob(JobConf),
    DeleteJob(JobConf),
    JobList,
    AddGroup(GroupConf),
    GroupList,
    NodeList,
}

/// Mock job manager
///
/// Mutations echo their input back (add assigns `id = "generated-id"`);
/// `fail_with` makes the next call return the given error.
#[derive(Debug, Clone, Default)]
pub struct MockJobManager {
    jobs: Arc<Mutex<Vec<JobConf>>>,
    groups: Arc<Mutex<Vec<GroupConf>>>,
    nodes: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<ManagerCall>>>,
    failure: Arc<Mutex<Option<SchedulerError>>>,
}

impl MockJobManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nodes(nodes: &[&str]) -> Self {
        let manager = Self::new();
        *manager.nodes.lock().unwrap() = nodes.iter().map(|n| n.to_string()).collect();
        manager
    }

    pub fn with_jobs(jobs: Vec<JobConf>) -> Self {
        let manager = Self::new();
        *manager.jobs.lock().unwrap() = jobs;
        manager
    }

    pub fn with_groups(groups: Vec<GroupConf>) -> Self {
        let manager = Self::new();
        *manager.groups.lock().unwrap() = groups;
        manager
    }

    pub fn fail_with(&self, error: SchedulerError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> Vec<ManagerCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: ManagerCall) -> SchedulerResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobManager for MockJobManager {
    async fn add_job(&self, mut job: JobConf) -> SchedulerResult<JobConf> {
        self.record(ManagerCall::AddJob(job.clone()))?;
        job.id = "generated-id".to_string();
        self.jobs.lock().unwrap().push(job.clone());
        Ok(job)
    }

    async fn edit_job(&self, job: JobConf) -> SchedulerResult<JobConf> {
        self.record(ManagerCall::EditJob(job.clone()))?;
        Ok(job)
    }

    async fn delete_job(&self, job: JobConf) -> SchedulerResult<JobConf> {
        self.record(ManagerCall::DeleteJob(job.clone()))?;
        self.jobs.lock().unwrap().retain(|j| j.id != job.id);
        Ok(job)
    }

    async fn job_list(&self) -> SchedulerResult<Vec<JobConf>> {
        self.record(ManagerCall::JobList)?;
        Ok(self.jobs.lock().unwrap().clone())
    }

    async fn add_group(&self, group: GroupConf) -> SchedulerResult<GroupConf> {
        self.record(ManagerCall::AddGroup(group.clone()))?;
        self.groups.lock().unwrap().push(group.clone());
        Ok(group)
    }

    async fn group_list(&self) -> SchedulerResult<Vec<GroupConf>> {
        self.record(ManagerCall::GroupList)?;
        Ok(self.groups.lock().unwrap().clone())
    }

    async fn node_list(&self) -> SchedulerResult<Vec<String>> {
        self.record(ManagerCall::NodeList)?;
        Ok(self.nodes.lock().unwrap().clone())
    }
}

/// Mock group registry keyed by the group-conf store key
#[derive(Debug, Clone, Default)]
pub struct MockGroupRegistry {
    groups: Arc<Mutex<HashMap<String, Group>>>,
}

impl MockGroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(key: &str, group: Group) -> Self {
        let registry = Self::new();
        registry.insert(key, group);
        registry
    }

    pub fn insert(&self, key: &str, group: Group) {
        self.groups.lock().unwrap().insert(key.to_string(), group);
    }
}

#[async_trait]
impl GroupRegistry for MockGroupRegistry {
    async fn group(&self, key: &str) -> Option<Group> {
        self.groups.lock().unwrap().get(key).cloned()
    }
}

/// Mock scheduler holding a fixed set of plans
#[derive(Debug, Clone, Default)]
pub struct MockPlanSource {
    plans: Arc<Mutex<Vec<SchedulePlan>>>,
}

impl MockPlanSource {
    pub fn new(plans: Vec<SchedulePlan>) -> Self {
        Self {
            plans: Arc::new(Mutex::new(plans)),
        }
    }
}

#[async_trait]
impl SchedulePlanSource for MockPlanSource {
    async fn schedule_plans(&self) -> Vec<SchedulePlan> {
        self.plans.lock().unwrap().clone()
    }
}

/// Cron parser stub: every expression containing `invalid` fails, anything else passes
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCronParser;

impl CronParser for MockCronParser {
    fn parse(&self, expr: &str) -> SchedulerResult<()> {
        if expr.contains("invalid") {
            return Err(SchedulerError::InvalidCron {
                expr: expr.to_string(),
                message: "mock rejection".to_string(),
            });
        }
        Ok(())
    }
}
