use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;

use roster_app::{
    context::Context,
    endpoints::{
        DeletePlayerRequest, Endpoint, GetPlayerRequest, ListPlayersRequest, SavePlayerRequest,
    },
};
use roster_types::{Player, errors::ApplicationError};

use crate::{
    handlers::helpers::{HttpError, error_response, json_response},
    http::AppState,
};

/// GET /v1/players?position=
pub async fn list_players(
    State(state): State<AppState>,
    WithRejection(Query(request), _): WithRejection<Query<ListPlayersRequest>, HttpError>,
) -> Result<Response, HttpError> {
    let ctx = Context::new();
    let response = state.endpoints.list_players.call(&ctx, request).await?;

    Ok(match &response.err {
        Some(err) => error_response(err),
        None => json_response(StatusCode::OK, &response),
    })
}

/// GET /v1/players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Response, HttpError> {
    let ctx = Context::new();
    let response = state
        .endpoints
        .get_player
        .call(&ctx, GetPlayerRequest { id })
        .await?;

    Ok(match &response.err {
        Some(err) => error_response(err),
        None => json_response(StatusCode::OK, &response),
    })
}

/// POST /v1/players – only new players (id <= 0) are accepted.
pub async fn create_player(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, HttpError> {
    let player = decode_player(&body)?;
    if !player.is_new() {
        return Err(ApplicationError::BadRequest.into());
    }

    save(&state, player).await
}

/// PUT /v1/players/{id} – the body id must match the path.
pub async fn update_player(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
    body: Bytes,
) -> Result<Response, HttpError> {
    let player = decode_player(&body)?;
    if player.id != id {
        return Err(ApplicationError::BadRequest.into());
    }

    save(&state, player).await
}

/// DELETE /v1/players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, HttpError>,
) -> Result<Response, HttpError> {
    let ctx = Context::new();
    let response = state
        .endpoints
        .delete_player
        .call(&ctx, DeletePlayerRequest { id })
        .await?;

    Ok(match &response.err {
        Some(err) => error_response(err),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

async fn save(state: &AppState, player: Player) -> Result<Response, HttpError> {
    let ctx = Context::new();
    let response = state
        .endpoints
        .save_player
        .call(&ctx, SavePlayerRequest { player })
        .await?;

    if let Some(err) = &response.err {
        return Ok(error_response(err));
    }

    let status = match response.created {
        true => StatusCode::CREATED,
        false => StatusCode::OK,
    };
    Ok(json_response(status, &response))
}

fn decode_player(body: &[u8]) -> Result<Player, HttpError> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!("Invalid player body: {}", err);
        HttpError(ApplicationError::BadRequest)
    })
}
