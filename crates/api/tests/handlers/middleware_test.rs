use axum::http::StatusCode;
use roomsync_api::middleware::error_handling::{map_error, AppError};
use roomsync_core::errors::RoomError;
use rstest::rstest;

#[rstest]
#[case(RoomError::NotFound("Room not found".to_string()), StatusCode::NOT_FOUND)]
#[case(RoomError::Validation("Invalid input".to_string()), StatusCode::BAD_REQUEST)]
#[case(RoomError::Conflict("Room is occupied".to_string()), StatusCode::CONFLICT)]
#[case(RoomError::Internal(eyre::eyre!("Lock poisoned")), StatusCode::INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn test_error_status_mapping(#[case] error: RoomError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn test_error_body_is_json() {
    let response = map_error(RoomError::NotFound("Session with ID 42 not found".to_string()));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        body["error"],
        "Resource not found: Session with ID 42 not found"
    );
}

#[test]
fn test_from_conversions() {
    let from_room: AppError = RoomError::Conflict("busy".to_string()).into();
    assert!(matches!(from_room.0, RoomError::Conflict(_)));

    let from_report: AppError = eyre::eyre!("boom").into();
    assert!(matches!(from_report.0, RoomError::Internal(_)));
}
