//! 控制面协作方的内存实现
//!
//! 供单机运行和测试使用：协调存储、基于存储的任务管理器、任务集群注册表、
//! 执行计划看板以及Cron表达式解析器。

pub mod cron_parser;
pub mod group_registry;
pub mod in_memory_store;
pub mod job_manager;
pub mod plan_board;

pub use cron_parser::StandardCronParser;
pub use group_registry::InMemoryGroupRegistry;
pub use in_memory_store::InMemoryCoordinationStore;
pub use job_manager::StoreJobManager;
pub use plan_board::InMemoryPlanBoard;
