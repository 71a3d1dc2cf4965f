use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use derive_more::Display;
use serde_json::json;
use strum_macros::AsRefStr;

use crate::store::StoreError;

#[derive(Debug, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceError {
    /// Referenced employee does not exist
    #[display(fmt = "Employee not found: {}", _0)]
    NotFound(String),

    /// Unknown gate, malformed timestamp or date, or an invalid seed record
    #[display(fmt = "{}", _0)]
    InvalidInput(String),

    #[display(fmt = "Store unavailable: {}", _0)]
    StoreUnavailable(String),
}

impl std::error::Error for AttendanceError {}

impl AttendanceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Stable machine-readable kind, e.g. `not_found`
    pub fn kind(&self) -> &str {
        self.as_ref()
    }
}

impl From<StoreError> for AttendanceError {
    fn from(e: StoreError) -> Self {
        Self::StoreUnavailable(e.to_string())
    }
}

impl ResponseError for AttendanceError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_snake_case() {
        assert_eq!(AttendanceError::NotFound("EMP-9".into()).kind(), "not_found");
        assert_eq!(AttendanceError::invalid("bad gate").kind(), "invalid_input");
        assert_eq!(
            AttendanceError::StoreUnavailable("down".into()).kind(),
            "store_unavailable"
        );
    }

    #[test]
    fn store_errors_surface_as_unavailable() {
        let err: AttendanceError = StoreError::Connection("pool timed out".into()).into();

        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.to_string().contains("pool timed out"));
    }
}
