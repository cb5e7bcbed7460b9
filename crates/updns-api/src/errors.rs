use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use updns_core::Error;

/// Wrapper mapping pipeline errors onto HTTP responses
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Every request-path failure maps to 500 with a plain-text body;
        // the wire contract does not distinguish client faults from
        // server faults.
        let message = match &self.0 {
            Error::InvalidAddress { .. } | Error::Unauthorized { .. } | Error::Upstream(_) => {
                self.0.to_string()
            }

            // Startup-only kinds; a request should never carry them.
            _ => "internal error".to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}
