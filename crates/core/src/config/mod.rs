//! 配置管理
//!
//! 加载顺序：内置默认值 → TOML配置文件 → `SCHEDULER_` 前缀的环境变量。
//! 环境变量使用 `__` 分隔嵌套字段，例如 `SCHEDULER_API__BIND_ADDRESS=0.0.0.0:9000`。

pub mod models;

pub use models::{
    ApiConfig, AppConfig, KeySpaceConfig, LogFormat, NodeConfig, ObservabilityConfig,
};
