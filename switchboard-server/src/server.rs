use crate::config::ServerConfig;
use crate::coordinator::Coordinator;
use crate::error::ServerError;
use crate::signaling::{ws_handler, SignalingService};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Command channel depth between the connection tasks and the
/// coordinator. Joins and relays are tiny; backpressure here only
/// matters if the coordinator task has stalled entirely.
const COMMAND_BUFFER: usize = 256;

/// Binds the WebSocket listener, spawns the coordinator task, and
/// serves until the shutdown future resolves.
pub struct SignalingServer {
    config: ServerConfig,
}

impl SignalingServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub async fn serve<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let service = SignalingService::new(command_tx);

        let coordinator = Coordinator::new(command_rx, Arc::new(service.clone()));
        tokio::spawn(coordinator.run());

        let cors = match &self.config.client_origin {
            Some(origin) => {
                let origin_value =
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|source| ServerError::InvalidOrigin {
                            origin: origin.clone(),
                            source,
                        })?;
                CorsLayer::new().allow_origin(origin_value)
            }
            None => CorsLayer::new().allow_origin(Any),
        };

        let app = Router::new()
            .route("/ws", get(ws_handler))
            .layer(cors)
            .with_state(service);

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await.map_err(ServerError::Bind)?;
        info!("Signaling server listening on ws://{addr}/ws");

        axum::serve(listener, app.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }
}
