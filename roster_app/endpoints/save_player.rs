use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use roster_types::{Player, errors::ApplicationError};

use crate::{
    context::Context,
    endpoints::{Endpoint, ResponseError},
    service::PlayerService,
};

/// Creates the player when its id is 0 or below, updates it otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavePlayerRequest {
    pub player: Player,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SavePlayerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub created: bool,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub err: Option<ResponseError>,
}

#[derive(Clone)]
pub struct SavePlayerEndpoint {
    service: Arc<dyn PlayerService>,
}

impl SavePlayerEndpoint {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for SavePlayerEndpoint {
    type Request = SavePlayerRequest;
    type Response = SavePlayerResponse;

    async fn call(
        &self,
        ctx: &Context,
        request: SavePlayerRequest,
    ) -> Result<SavePlayerResponse, ApplicationError> {
        match self.service.save_player(ctx, request.player).await {
            Ok((player, created)) => Ok(SavePlayerResponse {
                player: Some(player),
                created,
                err: None,
            }),
            Err(err) => Ok(SavePlayerResponse {
                player: None,
                created: false,
                err: Some(err.into()),
            }),
        }
    }
}
