use super::*;

#[test]
fn error_message_from_body_reads_structured_message() {
    assert_eq!(
        error_message_from_body(r#"{"message":"Email already in use"}"#),
        Some("Email already in use".to_owned())
    );
}

#[test]
fn error_message_from_body_ignores_unstructured_bodies() {
    assert_eq!(error_message_from_body("Internal Server Error"), None);
    assert_eq!(error_message_from_body(r#"{"error":"nope"}"#), None);
    assert_eq!(error_message_from_body(r#"{"message":null}"#), None);
    assert_eq!(error_message_from_body(""), None);
}

#[test]
fn generic_error_is_the_documented_fallback() {
    assert_eq!(GENERIC_ERROR, "Something went wrong. Please try again.");
}
