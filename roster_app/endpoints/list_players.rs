use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use roster_types::{Player, errors::ApplicationError};

use crate::{
    context::Context,
    endpoints::{Endpoint, ResponseError},
    service::PlayerService,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListPlayersRequest {
    /// Empty means every position.
    #[serde(default)]
    pub position: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPlayersResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub err: Option<ResponseError>,
}

#[derive(Clone)]
pub struct ListPlayersEndpoint {
    service: Arc<dyn PlayerService>,
}

impl ListPlayersEndpoint {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for ListPlayersEndpoint {
    type Request = ListPlayersRequest;
    type Response = ListPlayersResponse;

    async fn call(
        &self,
        ctx: &Context,
        request: ListPlayersRequest,
    ) -> Result<ListPlayersResponse, ApplicationError> {
        match self.service.list_players(ctx, &request.position).await {
            Ok(players) => Ok(ListPlayersResponse { players, err: None }),
            Err(err) => Ok(ListPlayersResponse {
                players: vec![],
                err: Some(err.into()),
            }),
        }
    }
}
