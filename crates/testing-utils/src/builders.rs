//! Test data builders for creating test entities

use chrono::Utc;
use scheduler_domain::entities::{
    ClientInfo, Group, JobConf, JobSnapshot, SchedulePlan, JOB_STATUS_ENABLED,
};

/// Builder for a valid job definition; override the fields under test.
pub struct JobConfBuilder {
    job: JobConf,
}

impl JobConfBuilder {
    pub fn new() -> Self {
        Self {
            job: JobConf {
                id: String::new(),
                name: "report".to_string(),
                group: "trade".to_string(),
                cron: "*/5 * * * *".to_string(),
                target: "com.example.ReportJob".to_string(),
                status: JOB_STATUS_ENABLED,
                remark: String::new(),
            },
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.job.id = id.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.job.name = name.to_string();
        self
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.job.group = group.to_string();
        self
    }

    pub fn with_cron(mut self, cron: &str) -> Self {
        self.job.cron = cron.to_string();
        self
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.job.target = target.to_string();
        self
    }

    pub fn with_status(mut self, status: i32) -> Self {
        self.job.status = status;
        self
    }

    pub fn build(self) -> JobConf {
        self.job
    }
}

impl Default for JobConfBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot as a remote client would write it.
pub fn snapshot(group: &str, ip: &str, id: &str) -> JobSnapshot {
    JobSnapshot {
        id: id.to_string(),
        job_id: format!("job-{id}"),
        name: "report".to_string(),
        group: group.to_string(),
        ip: ip.to_string(),
        cron: "*/5 * * * *".to_string(),
        target: "com.example.ReportJob".to_string(),
        params: String::new(),
        remark: String::new(),
        create_time: "2024-01-01 00:00:00".to_string(),
    }
}

/// The snapshot encoded the way it is stored.
pub fn snapshot_bytes(snapshot: &JobSnapshot) -> Vec<u8> {
    serde_json::to_vec(snapshot).expect("snapshot serializes")
}

pub fn plan(id: &str) -> SchedulePlan {
    SchedulePlan {
        id: id.to_string(),
        name: format!("job-{id}"),
        group: "trade".to_string(),
        cron: "*/5 * * * *".to_string(),
        target: "com.example.ReportJob".to_string(),
        next_time: Utc::now(),
        before_time: None,
    }
}

pub fn group_with_clients(name: &str, clients: &[&str]) -> Group {
    Group {
        name: name.to_string(),
        clients: clients
            .iter()
            .map(|c| ClientInfo {
                name: c.to_string(),
                path: format!("/scheduler/client/{name}/clients/{c}"),
            })
            .collect(),
    }
}
