use easylaw_api::limits::{
    enforce_max_message_size, enforce_max_target_len, LimitError, MAX_MESSAGE_BYTES,
    MAX_TARGET_BYTES,
};
use easylaw_api::status::StatusCode;

#[test]
fn message_at_exact_max_is_allowed() {
    assert!(enforce_max_message_size(MAX_MESSAGE_BYTES).is_ok());
}

#[test]
fn message_over_max_reports_sizes() {
    let err = enforce_max_message_size(MAX_MESSAGE_BYTES + 1).expect_err("should reject");
    match err {
        LimitError::TooLarge { max, actual } => {
            assert_eq!(max, MAX_MESSAGE_BYTES);
            assert_eq!(actual, MAX_MESSAGE_BYTES + 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn long_target_is_rejected() {
    let target = format!("/laws?search_query={}", "a".repeat(MAX_TARGET_BYTES));
    let err = enforce_max_target_len(&target).expect_err("should reject");
    assert!(err.to_string().contains("request target too long"));
    assert!(enforce_max_target_len("/laws?page=2").is_ok());
}

#[test]
fn status_codes_map_to_numbers() {
    assert_eq!(StatusCode::RequestEntityTooLarge.as_u16(), 413);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.reason(), "Internal Server Error");
}
