use axum::http::StatusCode;
use rstest::rstest;
use timetable_api::middleware::error_handling::{map_error, AppError};
use timetable_core::errors::TimetableError;

#[rstest]
#[case(TimetableError::InvalidInput("abc".to_string()), StatusCode::BAD_REQUEST)]
#[case(TimetableError::NotFound("section 9".to_string()), StatusCode::NOT_FOUND)]
#[case(TimetableError::MissingExportTarget("2".to_string()), StatusCode::NOT_FOUND)]
#[case(
    TimetableError::ExportEncodingFailure("encoder crashed".to_string()),
    StatusCode::INTERNAL_SERVER_ERROR
)]
#[case(TimetableError::Internal(eyre::eyre!("lock poisoned")), StatusCode::INTERNAL_SERVER_ERROR)]
fn test_error_status_mapping(#[case] error: TimetableError, #[case] expected: StatusCode) {
    let response = map_error(error);
    assert_eq!(response.status(), expected);
}

#[test]
fn test_eyre_report_becomes_internal_error() {
    let error: AppError = eyre::eyre!("unexpected").into();

    assert!(matches!(error.0, TimetableError::Internal(_)));
    assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
