use super::*;

#[test]
fn accepts_common_addresses() {
    assert!(is_valid_email("alex@example.com"));
    assert!(is_valid_email("first.last+tag@sub.example.co"));
}

#[test]
fn rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("missing-domain@"));
    assert!(!is_valid_email("@missing-local.com"));
    assert!(!is_valid_email("spaces in@example.com"));
}
