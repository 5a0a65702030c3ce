use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{ContentStore, InMemoryStore};

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    pub store: Arc<dyn ContentStore>,
}

pub struct Application {
    port: u16,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = std::io::Result<()>> + Send>>,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        let store: Arc<dyn ContentStore> = Arc::new(InMemoryStore::new());
        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: ServiceConfig,
        store: Arc<dyn ContentStore>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Submittable content
        .route(
            "/businesses",
            post(handlers::businesses::create_business).get(handlers::businesses::list_businesses),
        )
        .route(
            "/businesses/:id",
            get(handlers::businesses::get_business)
                .put(handlers::businesses::update_business)
                .delete(handlers::businesses::delete_business),
        )
        .route(
            "/businesses/:id/review",
            post(handlers::businesses::review_business),
        )
        .route(
            "/agencies",
            post(handlers::agencies::create_agency).get(handlers::agencies::list_agencies),
        )
        .route(
            "/agencies/:id",
            get(handlers::agencies::get_agency)
                .put(handlers::agencies::update_agency)
                .delete(handlers::agencies::delete_agency),
        )
        .route(
            "/agencies/:id/review",
            post(handlers::agencies::review_agency),
        )
        .route(
            "/tours",
            post(handlers::tours::create_tour).get(handlers::tours::list_tours),
        )
        .route(
            "/tours/:id",
            get(handlers::tours::get_tour)
                .put(handlers::tours::update_tour)
                .delete(handlers::tours::delete_tour),
        )
        .route("/tours/:id/review", post(handlers::tours::review_tour))
        // Reference data
        .route(
            "/beaches",
            get(handlers::beaches::list_beaches).post(handlers::beaches::create_beach),
        )
        .route(
            "/beaches/:id",
            put(handlers::beaches::update_beach).delete(handlers::beaches::delete_beach),
        )
        .route(
            "/tags",
            get(handlers::tags::list_tags).post(handlers::tags::create_tag),
        )
        .route(
            "/tags/:id",
            put(handlers::tags::update_tag).delete(handlers::tags::delete_tag),
        )
        // Authorization introspection for the BFF
        .route("/authz/check", post(handlers::authz::check))
        .route("/authz/route", post(handlers::authz::check_route))
        // Public site reads (approved content only)
        .route("/public/businesses", get(handlers::public::public_businesses))
        .route("/public/agencies", get(handlers::public::public_agencies))
        .route("/public/beaches", get(handlers::public::public_beaches))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
