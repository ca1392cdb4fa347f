use axum::{Router, middleware, routing::get};
use std::{io::Error, net::SocketAddr};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use roster_app::endpoints::Endpoints;
use roster_types::{Result, errors::ApplicationError};

use crate::handlers::{
    access_control, create_player, delete_player, get_player, list_players, not_found,
    update_player,
};

#[derive(Clone)]
pub struct AppState {
    pub endpoints: Endpoints,
}

impl AppState {
    pub fn new(endpoints: Endpoints) -> AppState {
        AppState { endpoints }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/v1/players", get(list_players).post(create_player))
            .route(
                "/v1/players/{id}",
                get(get_player).put(update_player).delete(delete_player),
            )
            .fallback(not_found)
            .with_state(state)
            .layer(middleware::from_fn(access_control))
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_listener(state, listener).await
    }

    /// Serves on an already bound listener.
    pub async fn serve_listener(
        state: AppState,
        listener: TcpListener,
    ) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
