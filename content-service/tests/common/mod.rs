use content_service::config::ServiceConfig;
use content_service::startup::Application;
use reqwest::RequestBuilder;
use uuid::Uuid;

/// Test harness: the service on a random port with the in-memory store.
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

/// An identity as the BFF would propagate it.
#[derive(Debug, Clone, Copy)]
pub struct TestUser {
    pub id: Uuid,
    pub role: &'static str,
}

impl TestUser {
    pub fn new(role: &'static str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
        }
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let config = ServiceConfig {
            port: 0, // Random port for testing
            log_level: "info".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, client }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    /// GET with identity headers.
    pub fn get_as(&self, path: &str, user: &TestUser) -> RequestBuilder {
        self.with_identity(self.client.get(self.url(path)), user)
    }

    /// POST with identity headers.
    pub fn post_as(&self, path: &str, user: &TestUser) -> RequestBuilder {
        self.with_identity(self.client.post(self.url(path)), user)
    }

    /// PUT with identity headers.
    pub fn put_as(&self, path: &str, user: &TestUser) -> RequestBuilder {
        self.with_identity(self.client.put(self.url(path)), user)
    }

    /// DELETE with identity headers.
    pub fn delete_as(&self, path: &str, user: &TestUser) -> RequestBuilder {
        self.with_identity(self.client.delete(self.url(path)), user)
    }

    fn with_identity(&self, builder: RequestBuilder, user: &TestUser) -> RequestBuilder {
        builder
            .header("X-User-Id", user.id.to_string())
            .header("X-User-Role", user.role)
    }
}
