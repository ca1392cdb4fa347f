use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use roster_types::errors::ApplicationError;

use crate::{
    context::Context,
    endpoints::{Endpoint, ResponseError},
    service::PlayerService,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePlayerRequest {
    pub id: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletePlayerResponse {
    #[serde(rename = "error", skip_serializing_if = "Option::is_none")]
    pub err: Option<ResponseError>,
}

#[derive(Clone)]
pub struct DeletePlayerEndpoint {
    service: Arc<dyn PlayerService>,
}

impl DeletePlayerEndpoint {
    pub fn new(service: Arc<dyn PlayerService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Endpoint for DeletePlayerEndpoint {
    type Request = DeletePlayerRequest;
    type Response = DeletePlayerResponse;

    async fn call(
        &self,
        ctx: &Context,
        request: DeletePlayerRequest,
    ) -> Result<DeletePlayerResponse, ApplicationError> {
        let err = self
            .service
            .delete_player(ctx, request.id)
            .await
            .err()
            .map(ResponseError::from);

        Ok(DeletePlayerResponse { err })
    }
}
