//! `ChessroomServer` builder and server loop.
//!
//! This is the entry point for running a Chessroom server. It ties
//! together the layers: HTTP → session → room store.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chessroom_room::{CodeGenerator, RoomStore, StoreConfig};
use chessroom_session::SessionService;
use tokio::net::TcpListener;

use crate::handler::router;
use crate::{ChessroomError, ServerConfig};

/// Shared server state handed to every request handler.
///
/// Cloned per request by axum; the service inside is an `Arc` wrapper.
#[derive(Clone)]
pub(crate) struct ServerState {
    pub(crate) sessions: SessionService,
}

/// Builder for configuring and starting a Chessroom server.
///
/// # Example
///
/// ```rust,no_run
/// use chessroom::prelude::*;
///
/// # async fn run() -> Result<(), ChessroomError> {
/// let server = ChessroomServer::builder()
///     .bind("0.0.0.0:5000")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
pub struct ChessroomServerBuilder {
    config: ServerConfig,
    generator: Option<Box<dyn CodeGenerator>>,
    store: Option<Arc<RoomStore>>,
}

impl ChessroomServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            generator: None,
            store: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Sets the room store configuration.
    ///
    /// Ignored if a ready-made store is supplied with [`store`](Self::store).
    pub fn store_config(mut self, config: StoreConfig) -> Self {
        self.config.store = config;
        self
    }

    /// Sets where new room codes come from. Defaults to random codes.
    ///
    /// Ignored if a ready-made store is supplied with [`store`](Self::store).
    pub fn code_generator(mut self, generator: impl CodeGenerator) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    /// Uses an existing room store instead of building one.
    pub fn store(mut self, store: Arc<RoomStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Binds the listener and assembles the router.
    pub async fn build(self) -> Result<ChessroomServer, ChessroomError> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;

        let store = match (self.store, self.generator) {
            (Some(store), _) => store,
            (None, Some(generator)) => Arc::new(RoomStore::with_boxed_generator(
                self.config.store,
                generator,
            )),
            (None, None) => Arc::new(RoomStore::new(self.config.store)),
        };
        let sessions = SessionService::new(store);
        let router = router(ServerState {
            sessions: sessions.clone(),
        });

        Ok(ChessroomServer {
            listener,
            router,
            sessions,
        })
    }
}

impl Default for ChessroomServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A bound Chessroom server.
///
/// Call [`run()`](Self::run) to start serving requests.
pub struct ChessroomServer {
    listener: TcpListener,
    router: Router,
    sessions: SessionService,
}

impl ChessroomServer {
    /// Creates a new builder.
    pub fn builder() -> ChessroomServerBuilder {
        ChessroomServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// The session service requests are dispatched to.
    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    /// Serves requests until the process is terminated.
    pub async fn run(self) -> Result<(), ChessroomError> {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "Chessroom server running");
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }

    /// Serves requests until `shutdown` resolves, then drains in-flight
    /// requests and returns.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ChessroomError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!(addr = ?self.listener.local_addr().ok(), "Chessroom server running");
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("Chessroom server stopped");
        Ok(())
    }
}
