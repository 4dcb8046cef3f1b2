//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tool_portal::config::PortalConfig;
use tool_portal::http::HttpServer;
use tool_portal::lifecycle::Shutdown;

/// A portal running on an ephemeral loopback port.
pub struct TestPortal {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestPortal {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestPortal {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a portal with `config` and wait until it accepts connections.
pub async fn start_portal(config: PortalConfig) -> TestPortal {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    for _ in 0..50 {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    TestPortal { addr, shutdown }
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
