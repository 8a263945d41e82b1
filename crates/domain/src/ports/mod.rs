//! 外部协作方接口
//!
//! 控制面只通过这些窄接口访问集群状态，具体实现由启动方注入。

pub mod cluster;
pub mod store;

pub use cluster::{CronParser, GroupRegistry, JobManager, SchedulePlanSource};
pub use store::{CoordinationStore, KeyValue};
