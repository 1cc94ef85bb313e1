#![allow(dead_code)]

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use std::sync::{Arc, Mutex};

/// 模拟服务收到的一次请求
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: &'static str,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: String,
}

pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

/// 一条模拟路由：路径、状态码、响应体
pub struct MockRoute {
    pub path: &'static str,
    pub status: u16,
    pub response: &'static str,
}

/// 启动只有一条路由的模拟分析服务
pub async fn spawn_mock(path: &'static str, status: u16, response: &'static str) -> (String, Captured) {
    spawn_mock_routes(vec![MockRoute { path, status, response }]).await
}

/// 在 127.0.0.1 的随机端口上启动模拟分析服务，返回 (base_url, 已收到的请求)
pub async fn spawn_mock_routes(routes: Vec<MockRoute>) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));

    let mut app = Router::new();
    for route in routes {
        let sink = captured.clone();
        let MockRoute { path, status, response } = route;
        app = app.route(
            path,
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    sink.lock().unwrap().push(CapturedRequest {
                        path,
                        content_type: header("content-type"),
                        accept: header("accept"),
                        body,
                    });
                    (StatusCode::from_u16(status).unwrap(), response)
                }
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve") });

    (format!("http://{}", addr), captured)
}

pub fn requests(captured: &Captured) -> Vec<CapturedRequest> {
    captured.lock().unwrap().clone()
}
