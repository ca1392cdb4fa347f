use std::sync::Arc;

use roster_app::{
    config::Config,
    context::Context,
    endpoints::Endpoints,
    logging::LoggingService,
    service::{PlayerService, RosterService},
};
use roster_db::{PostgresPlayerRepository, establish_connection_pool, migrate};
use roster_rpc::{RpcConfig, RpcServer};
use roster_types::{Result, errors::ApplicationError};
use roster_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let config = Config::from_env();
    let service = setup_service().await?;

    log_players(service.as_ref(), &config.list_position).await;

    let endpoints = Endpoints::new(service);
    let rpc_config = RpcConfig {
        port: config.rpc_port,
        ..Default::default()
    };

    tokio::try_join!(
        WebRouter::serve(AppState::new(endpoints.clone()), config.http_port),
        RpcServer::serve(endpoints, rpc_config),
    )?;

    Ok(())
}

async fn setup_service() -> Result<Arc<dyn PlayerService>, ApplicationError> {
    let db_pool = establish_connection_pool().await?;
    migrate(&db_pool).await?;

    let repository = Arc::new(PostgresPlayerRepository::new(db_pool));
    Ok(Arc::new(LoggingService::new(
        tracing::info_span!("players"),
        RosterService::new(repository),
    )))
}

/// Dumps the players at `position` to the log. Failures are logged, not fatal.
async fn log_players(service: &dyn PlayerService, position: &str) {
    match service.list_players(&Context::new(), position).await {
        Ok(players) => {
            for player in players {
                tracing::info!("{}", player);
            }
        }
        Err(ApplicationError::NotFound) => {
            tracing::info!(position, "No players found");
        }
        Err(e) => tracing::error!(position, "Error listing players: {e}"),
    }
}
