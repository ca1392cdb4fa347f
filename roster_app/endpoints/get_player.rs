use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use roster_types::{Player, errors::ApplicationError};

use crate::{
    context::Context,
    endpoints::{Endpoint, ResponseError},
    service::PlayerService,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPlayerRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPlayerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub err: Option<ResponseError>,
}

#[derive(Clone)]
pub struct GetPlayerEndpoint {
    service: Arc<dyn PlayerService>,
}

impl GetPlayerEndpoint {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for GetPlayerEndpoint {
    type Request = GetPlayerRequest;
    type Response = GetPlayerResponse;

    async fn call(
        &self,
        ctx: &Context,
        request: GetPlayerRequest,
    ) -> Result<GetPlayerResponse, ApplicationError> {
        match self.service.get_player(ctx, request.id).await {
            Ok(player) => Ok(GetPlayerResponse {
                player: Some(player),
                err: None,
            }),
            Err(err) => Ok(GetPlayerResponse {
                player: None,
                err: Some(err.into()),
            }),
        }
    }
}
