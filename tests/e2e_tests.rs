use scheduler_admin::{app::Application, shutdown::ShutdownManager};
use scheduler_core::AppConfig;
use scheduler_domain::entities::ClientInfo;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct TestServer {
    address: String,
    client: reqwest::Client,
    app: Arc<Application>,
    shutdown: ShutdownManager,
    handle: JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let mut config = AppConfig::default();
        config.node.name = "node-1".to_string();
        config.api.bind_address = "127.0.0.1:0".to_string();

        let app = Arc::new(Application::new(config).await.expect("应用初始化失败"));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let shutdown = ShutdownManager::new();
        let handle = {
            let app = Arc::clone(&app);
            let shutdown = shutdown.clone();
            tokio::spawn(async move {
                app.serve(listener, shutdown).await.expect("服务运行失败");
            })
        };

        Self {
            address,
            client: reqwest::Client::new(),
            app,
            shutdown,
            handle,
        }
    }

    async fn post(&self, path: &str, body: Value) -> Value {
        let response = self
            .client
            .post(format!("{}{}", self.address, path))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }

    async fn stop(self) {
        drop(self.client);
        self.shutdown.shutdown();
        self.handle.await.unwrap();
    }
}

#[tokio::test]
async fn test_job_lifecycle() {
    let server = TestServer::spawn().await;

    // 任务集群不存在时不能建任务
    let job = json!({
        "Name": "report",
        "Group": "trade",
        "Cron": "*/5 * * * *",
        "Target": "com.example.ReportJob",
        "Status": 1
    });
    let json = server.post("/job/add", job.clone()).await;
    assert_eq!(json["Code"], -1);
    assert_eq!(json["Message"], "任务分组不存在: trade");

    let json = server
        .post("/group/add", json!({"Name": "trade", "Remark": "交易"}))
        .await;
    assert_eq!(json["Code"], 0);

    let json = server.post("/group/add", json!({"Name": "trade", "Remark": "交易"})).await;
    assert_eq!(json["Message"], "任务集群已存在: trade");

    let json = server.post("/job/add", job.clone()).await;
    assert_eq!(json["Code"], 0);
    let id = json["Data"]["Id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let mut edited = job.clone();
    edited["Id"] = json!(id);
    edited["Cron"] = json!("0 3 * * *");
    let json = server.post("/job/edit", edited).await;
    assert_eq!(json["Message"], "修改成功");

    let json = server.post("/job/list", json!({})).await;
    assert_eq!(json["Data"][0]["Cron"], "0 3 * * *");

    let json = server.post("/job/delete", json!({"Id": id})).await;
    assert_eq!(json["Code"], 0);
    assert_eq!(json["Data"]["Name"], "report");

    let json = server.post("/job/list", json!({})).await;
    assert_eq!(json["Data"], json!([]));

    server.stop().await;
}

#[tokio::test]
async fn test_cluster_views() {
    let server = TestServer::spawn().await;

    let json = server.post("/node/list", json!({})).await;
    assert_eq!(json["Data"], json!([{"Name": "node-1", "State": "Leader"}]));

    let json = server.post("/plan/list", json!({})).await;
    assert_eq!(json["Data"], json!([]));

    server
        .post("/group/add", json!({"Name": "trade", "Remark": "交易"}))
        .await;
    let key = server.app.config().keyspace.root.clone() + "/server/group/trade";
    assert!(
        server
            .app
            .registry()
            .attach_client(
                &key,
                ClientInfo {
                    name: "10.0.0.1".to_string(),
                    path: "/scheduler/client/trade/10.0.0.1".to_string(),
                },
            )
            .await
    );

    let json = server.post("/client/list", json!({"Group": "trade"})).await;
    assert_eq!(json["Data"][0]["Name"], "10.0.0.1");
    assert_eq!(json["Data"][0]["Group"], "trade");

    let json = server.post("/snapshot/list", json!({"Group": "trade"})).await;
    assert_eq!(json, json!({"Code": 0, "Data": [], "Message": "查询成功"}));

    server.stop().await;
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .get(format!("{}/health", server.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "ok");

    server.stop().await;
}
