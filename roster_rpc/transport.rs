use tonic::{Request, Response, Status};

use roster_app::{
    context::Context,
    endpoints::{
        DeletePlayerRequest, Endpoint, Endpoints, GetPlayerRequest, ListPlayersRequest,
        ResponseError, SavePlayerRequest,
    },
};
use roster_types::{Player, errors::ApplicationError};

use crate::pb::{self, players_server::Players};

/// Serves the players endpoints over gRPC.
///
/// Domain errors travel as text in each reply's `err` field; a `Status` only
/// reports a malformed request or a reply that can't be encoded.
#[derive(Clone)]
pub struct RosterRpc {
    endpoints: Endpoints,
}

impl RosterRpc {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

#[tonic::async_trait]
impl Players for RosterRpc {
    async fn list_players(
        &self,
        request: Request<pb::ListPlayersRequest>,
    ) -> Result<Response<pb::ListPlayersResponse>, Status> {
        let request = ListPlayersRequest {
            position: request.into_inner().position,
        };
        let response = self
            .endpoints
            .list_players
            .call(&Context::new(), request)
            .await
            .map_err(internal)?;

        let players = response
            .players
            .into_iter()
            .map(pb::Player::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Response::new(pb::ListPlayersResponse {
            players,
            err: error_text(response.err),
        }))
    }

    async fn get_player(
        &self,
        request: Request<pb::GetPlayerRequest>,
    ) -> Result<Response<pb::GetPlayerResponse>, Status> {
        let request = GetPlayerRequest {
            id: request.into_inner().id.into(),
        };
        let response = self
            .endpoints
            .get_player
            .call(&Context::new(), request)
            .await
            .map_err(internal)?;

        Ok(Response::new(pb::GetPlayerResponse {
            player: response.player.map(pb::Player::try_from).transpose()?,
            err: error_text(response.err),
        }))
    }

    async fn save_player(
        &self,
        request: Request<pb::SavePlayerRequest>,
    ) -> Result<Response<pb::SavePlayerResponse>, Status> {
        let player = request
            .into_inner()
            .player
            .ok_or_else(|| Status::invalid_argument("player is required"))?;

        let request = SavePlayerRequest {
            player: player.into(),
        };
        let response = self
            .endpoints
            .save_player
            .call(&Context::new(), request)
            .await
            .map_err(internal)?;

        Ok(Response::new(pb::SavePlayerResponse {
            player: response.player.map(pb::Player::try_from).transpose()?,
            created: response.created,
            err: error_text(response.err),
        }))
    }

    async fn delete_player(
        &self,
        request: Request<pb::DeletePlayerRequest>,
    ) -> Result<Response<pb::DeletePlayerResponse>, Status> {
        let request = DeletePlayerRequest {
            id: request.into_inner().id.into(),
        };
        let response = self
            .endpoints
            .delete_player
            .call(&Context::new(), request)
            .await
            .map_err(internal)?;

        Ok(Response::new(pb::DeletePlayerResponse {
            err: error_text(response.err),
        }))
    }
}

impl From<pb::Player> for Player {
    fn from(player: pb::Player) -> Self {
        Player {
            id: player.id.into(),
            name: player.name,
            number: player.number,
            position: player.position,
            height: player.height,
            weight: player.weight,
            age: player.age,
            experience: player.experience,
            college: player.college,
        }
    }
}

impl TryFrom<Player> for pb::Player {
    type Error = Status;

    fn try_from(player: Player) -> Result<Self, Self::Error> {
        let id = i32::try_from(player.id)
            .map_err(|_| Status::internal(format!("player id {} out of range", player.id)))?;

        Ok(pb::Player {
            id,
            name: player.name,
            number: player.number,
            position: player.position,
            height: player.height,
            weight: player.weight,
            age: player.age,
            experience: player.experience,
            college: player.college,
        })
    }
}

fn error_text(err: Option<ResponseError>) -> String {
    err.map(|e| e.message().to_string()).unwrap_or_default()
}

fn internal(err: ApplicationError) -> Status {
    tracing::error!(error = %err, "Endpoint failed");
    Status::internal(err.to_string())
}
