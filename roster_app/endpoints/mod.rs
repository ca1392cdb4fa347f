use async_trait::async_trait;
use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{context::Context, service::PlayerService};

mod delete_player;
mod get_player;
mod list_players;
mod response_error;
mod save_player;

pub use delete_player::{DeletePlayerEndpoint, DeletePlayerRequest, DeletePlayerResponse};
pub use get_player::{GetPlayerEndpoint, GetPlayerRequest, GetPlayerResponse};
pub use list_players::{ListPlayersEndpoint, ListPlayersRequest, ListPlayersResponse};
pub use response_error::ResponseError;
pub use save_player::{SavePlayerEndpoint, SavePlayerRequest, SavePlayerResponse};

/// A transport-agnostic request handler for one service operation.
///
/// Domain failures are carried inside `Self::Response`; an `Err` is reserved
/// for failures the transport itself has to deal with.
#[async_trait]
pub trait Endpoint: Send + Sync {
    type Request: Send;
    type Response: Send;

    async fn call(
        &self,
        ctx: &Context,
        request: Self::Request,
    ) -> Result<Self::Response, ApplicationError>;
}

/// All the endpoints of the players service, shared by every transport.
#[derive(Clone)]
pub struct Endpoints {
    pub list_players: ListPlayersEndpoint,
    pub get_player: GetPlayerEndpoint,
    pub save_player: SavePlayerEndpoint,
    pub delete_player: DeletePlayerEndpoint,
}

impl Endpoints {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self {
            list_players: ListPlayersEndpoint::new(service.clone()),
            get_player: GetPlayerEndpoint::new(service.clone()),
            save_player: SavePlayerEndpoint::new(service.clone()),
            delete_player: DeletePlayerEndpoint::new(service),
        }
    }
}
