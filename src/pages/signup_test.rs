use super::*;

#[test]
fn empty_name_fails_first_regardless_of_other_fields() {
    assert_eq!(
        validate_signup_input("", "alex@example.com", "secret123"),
        Err("Please enter your name.")
    );
    assert_eq!(validate_signup_input("   ", "", ""), Err("Please enter your name."));
}

#[test]
fn bad_email_fails_before_password_is_checked() {
    assert_eq!(
        validate_signup_input("Alex", "not-an-email", ""),
        Err("Please enter a valid email address.")
    );
}

#[test]
fn empty_password_fails_last() {
    assert_eq!(
        validate_signup_input("Alex", "alex@example.com", ""),
        Err("Please enter your password.")
    );
}

#[test]
fn valid_fields_build_the_wire_payload() {
    let payload = validate_signup_input("Alex", "alex@example.com", "secret123").unwrap();
    assert_eq!(payload.username, "Alex");
    assert_eq!(payload.email, "alex@example.com");
    assert_eq!(payload.password, "secret123");
}

#[test]
fn identity_fields_are_trimmed_but_password_is_kept_raw() {
    let payload = validate_signup_input(" Alex ", " alex@example.com ", " secret ").unwrap();
    assert_eq!(payload.username, "Alex");
    assert_eq!(payload.email, "alex@example.com");
    assert_eq!(payload.password, " secret ");
}
