use serde::{Deserialize, Serialize};

/// 本节点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// 节点名称，集群内唯一，选主结果中存放的也是该名称
    pub name: String,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: default_node_name(),
        }
    }
}

impl NodeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow::anyhow!("节点名称不能为空"));
        }
        if self.name.contains('/') {
            return Err(anyhow::anyhow!("节点名称不能包含'/'"));
        }
        Ok(())
    }
}

/// 主机名作为默认节点名称
pub fn default_node_name() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| "scheduler-node".to_string())
}

/// 协调存储键空间配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySpaceConfig {
    /// 所有键的公共根路径
    pub root: String,
}

impl Default for KeySpaceConfig {
    fn default() -> Self {
        Self {
            root: "/scheduler".to_string(),
        }
    }
}

impl KeySpaceConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.root.is_empty() {
            return Err(anyhow::anyhow!("键空间根路径不能为空"));
        }
        if !self.root.starts_with('/') {
            return Err(anyhow::anyhow!("键空间根路径必须以'/'开头"));
        }
        if self.root.ends_with('/') {
            return Err(anyhow::anyhow!("键空间根路径不能以'/'结尾"));
        }
        Ok(())
    }
}
