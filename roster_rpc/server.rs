use std::net::SocketAddr;
use tokio::net::TcpListener;
use tonic::transport::{Server, server::TcpIncoming};

use roster_app::endpoints::Endpoints;
use roster_types::{Result, errors::ApplicationError};

use crate::{middleware, pb::players_server::PlayersServer, transport::RosterRpc};

/// Configuration for the RPC server.
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 50051,
        }
    }
}

pub struct RpcServer {}

impl RpcServer {
    pub async fn serve(endpoints: Endpoints, config: RpcConfig) -> Result<(), ApplicationError> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(infra_error)?;
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_listener(endpoints, listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_listener(
        endpoints: Endpoints,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        let incoming = TcpIncoming::from_listener(listener, true, None)
            .map_err(infra_error)?;

        tracing::info!("RPC Server started, listening on {}", addr);

        Server::builder()
            .add_service(PlayersServer::with_interceptor(
                RosterRpc::new(endpoints),
                middleware::logging_interceptor,
            ))
            .serve_with_incoming(incoming)
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: impl std::fmt::Debug) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
