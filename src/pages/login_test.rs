use super::*;

#[test]
fn bad_email_fails_before_password_is_checked() {
    assert_eq!(
        validate_login_input("not-an-email", ""),
        Err("Please enter a valid email address.")
    );
}

#[test]
fn empty_password_fails_after_email() {
    assert_eq!(
        validate_login_input("alex@example.com", ""),
        Err("Please enter your password.")
    );
}

#[test]
fn valid_fields_build_the_wire_payload() {
    let payload = validate_login_input(" alex@example.com ", "secret123").unwrap();
    assert_eq!(payload.email, "alex@example.com");
    assert_eq!(payload.password, "secret123");
}
