use super::*;

#[test]
fn join_url_appends_endpoint_paths_to_the_base() {
    assert_eq!(
        join_url("/auth/signup"),
        "https://travelog-backend.onrender.com/api/auth/signup"
    );
    assert_eq!(
        join_url("/auth/me"),
        "https://travelog-backend.onrender.com/api/auth/me"
    );
}

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!BASE_URL.ends_with('/'));
}
