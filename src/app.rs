use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use scheduler_api::{create_app, AppState};
use scheduler_core::AppConfig;
use scheduler_domain::keyspace::KeySpace;
use scheduler_domain::ports::CoordinationStore;
use scheduler_infrastructure::{
    InMemoryCoordinationStore, InMemoryGroupRegistry, InMemoryPlanBoard, StandardCronParser,
    StoreJobManager,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::shutdown::ShutdownManager;

/// 单机运行的控制面
///
/// 协作方全部使用内存实现。当前节点启动时登记到节点目录，并作为唯一节点写入选主键。
pub struct Application {
    config: AppConfig,
    state: AppState,
    registry: Arc<InMemoryGroupRegistry>,
    plans: Arc<InMemoryPlanBoard>,
}

impl Application {
    pub async fn new(config: AppConfig) -> Result<Self> {
        info!(node = %config.node.name, root = %config.keyspace.root, "初始化控制面");

        let keys = KeySpace::new(config.keyspace.root.clone());
        let store = Arc::new(InMemoryCoordinationStore::new());
        let registry = Arc::new(InMemoryGroupRegistry::new());
        let plans = Arc::new(InMemoryPlanBoard::new());
        let manager = StoreJobManager::new(store.clone(), keys.clone())
            .with_registry(registry.clone());

        register_node(store.as_ref(), &keys, &config.node.name).await?;

        let state = AppState {
            store,
            manager: Arc::new(manager),
            plans: plans.clone(),
            registry: registry.clone(),
            cron: Arc::new(StandardCronParser::new()),
            keys,
        };

        Ok(Self {
            config,
            state,
            registry,
            plans,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 运行时任务集群注册表，客户端上下线时更新
    pub fn registry(&self) -> &Arc<InMemoryGroupRegistry> {
        &self.registry
    }

    /// 调度器写入执行计划的看板
    pub fn plans(&self) -> &Arc<InMemoryPlanBoard> {
        &self.plans
    }

    pub fn router(&self) -> Router {
        create_app(self.state.clone(), &self.config.api)
    }

    /// 绑定配置中的监听地址
    pub async fn bind(&self) -> Result<TcpListener> {
        let address = &self.config.api.bind_address;
        TcpListener::bind(address)
            .await
            .with_context(|| format!("绑定地址失败: {address}"))
    }

    /// 在 `listener` 上提供服务，直到收到关闭信号
    pub async fn serve(&self, listener: TcpListener, shutdown: ShutdownManager) -> Result<()> {
        let address: SocketAddr = listener.local_addr().context("读取监听地址失败")?;
        info!("API服务器启动在 http://{address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown.signal())
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }
}

async fn register_node(store: &dyn CoordinationStore, keys: &KeySpace, name: &str) -> Result<()> {
    store
        .put(&keys.node_key(name), name.as_bytes().to_vec())
        .await
        .context("登记节点失败")?;
    store
        .put(&keys.leader_key(), name.as_bytes().to_vec())
        .await
        .context("写入选主键失败")?;
    info!(node = name, "节点已登记为Leader");
    Ok(())
}
