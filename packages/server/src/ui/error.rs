//! Mapping of use case errors to HTTP responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    domain::{RoomError, ValueObjectError},
    infrastructure::dto::http::ErrorDto,
    usecase::{ChatUseCaseError, RoomUseCaseError},
};

/// Error returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// Body is not JSON or does not match the request shape
    Body(JsonRejection),
    /// Request field failed validation
    InvalidInput(ValueObjectError),
    /// Path or body referenced a room that cannot exist
    NotFound(String),
    Room(RoomUseCaseError),
    Chat(ChatUseCaseError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Body(rejection) => rejection.status(),
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Room(e) => match e {
                RoomUseCaseError::RoomNotFound(_) => StatusCode::NOT_FOUND,
                RoomUseCaseError::RoomCodeConflict(_) => StatusCode::BAD_REQUEST,
                RoomUseCaseError::Room(RoomError::NotYourTurn(_)) => StatusCode::FORBIDDEN,
                RoomUseCaseError::Room(_) => StatusCode::BAD_REQUEST,
                RoomUseCaseError::Contention(_) => StatusCode::CONFLICT,
                RoomUseCaseError::Generation(_) | RoomUseCaseError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            ApiError::Chat(ChatUseCaseError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            ApiError::Body(rejection) => rejection.body_text(),
            ApiError::InvalidInput(e) => e.to_string(),
            ApiError::NotFound(code) => format!("Room not found: {code}"),
            ApiError::Room(e) => e.to_string(),
            ApiError::Chat(e) => e.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(e: ValueObjectError) -> Self {
        ApiError::InvalidInput(e)
    }
}

impl From<RoomUseCaseError> for ApiError {
    fn from(e: RoomUseCaseError) -> Self {
        ApiError::Room(e)
    }
}

impl From<ChatUseCaseError> for ApiError {
    fn from(e: ChatUseCaseError) -> Self {
        ApiError::Chat(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!("Request failed: {}", self.detail());
            "Internal server error".to_string()
        } else {
            tracing::warn!("Request rejected ({}): {}", status.as_u16(), self.detail());
            self.detail()
        };
        (status, Json(ErrorDto { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, extract::FromRequest, http::Request};

    use crate::{
        domain::{PlayerId, RepositoryError, RoomCode},
        infrastructure::dto::http::RollDiceRequest,
    };

    fn code() -> RoomCode {
        RoomCode::new("ABC123".to_string()).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        // テスト項目: エラーごとに対応する HTTP ステータスが返される
        let cases = [
            (
                ApiError::Room(RoomUseCaseError::RoomNotFound(code())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Room(RoomUseCaseError::RoomCodeConflict(code())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Room(RoomError::GameAlreadyStarted.into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Room(RoomError::RoomFull { capacity: 4 }.into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Room(
                    RoomError::NotEnoughPlayers {
                        required: 2,
                        current: 1,
                    }
                    .into(),
                ),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Room(RoomError::GameNotStarted.into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Room(
                    RoomError::NotYourTurn(PlayerId::new("x-p1".to_string()).unwrap()).into(),
                ),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::Room(RoomUseCaseError::Contention(code())),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Room(RepositoryError::RoomNotFound(code()).into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::InvalidInput(ValueObjectError::PlayerNameEmpty),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::NotFound("x".repeat(40)), StatusCode::NOT_FOUND),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status(), expected, "{error:?}");
        }
    }

    #[tokio::test]
    async fn test_missing_field_rejection_keeps_status_and_message() {
        // テスト項目: JSON ボディの抽出エラーは元のステータスと理由を保つ
        // given (前提条件): 必須フィールドのないボディ
        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"room_code":"ABC123"}"#))
            .unwrap();

        // when (操作):
        let rejection = Json::<RollDiceRequest>::from_request(request, &())
            .await
            .unwrap_err();
        let error = ApiError::from(rejection);

        // then (期待する結果):
        assert_eq!(error.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(error.detail().contains("player_id"));
    }
}
