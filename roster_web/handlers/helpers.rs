use axum::{
    extract::{
        Request,
        rejection::{PathRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use roster_app::endpoints::ResponseError;
use roster_types::errors::{ApplicationError, ErrorKind};

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A failure detected by the transport itself, before or around an endpoint call.
#[derive(Debug)]
pub struct HttpError(pub ApplicationError);

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        HttpError(err)
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(%rejection, "Invalid path parameter");
        HttpError(ApplicationError::BadRequest)
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(%rejection, "Invalid query string");
        HttpError(ApplicationError::BadRequest)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        error_response(&ResponseError::from(&self.0))
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{"error": "<message>"}` with the status matching the error kind.
pub fn error_response(err: &ResponseError) -> Response {
    let status = status_for(err.kind());
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }

    json_response(
        status,
        &ErrorBody {
            error: err.message(),
        },
    )
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response(),
        Err(err) => {
            tracing::error!("JSON encode error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
                r#"{"error":"internal server error"}"#,
            )
                .into_response()
        }
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    HttpError(ApplicationError::NotFound).into_response()
}

/// Sets the CORS headers on every response; `OPTIONS` stops here with an empty 200.
pub async fn access_control(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        set_cors_headers(response.headers_mut());
        return response;
    }

    let mut response = next.run(request).await;
    set_cors_headers(response.headers_mut());
    response
}

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, PUT, DELETE, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, Content-Type"),
    );
}
