use super::*;

#[test]
fn classify_status_passes_success_through() {
    assert!(classify_status(StatusCode::OK, "someone").is_none());
    assert!(classify_status(StatusCode::CREATED, "someone").is_none());
}

#[test]
fn classify_status_404_is_not_found() {
    let err = classify_status(StatusCode::NOT_FOUND, "ghost").unwrap();
    assert!(
        matches!(err, SourceError::NotFound { ref username } if username == "ghost"),
        "expected NotFound, got: {err:?}"
    );
}

#[test]
fn classify_status_401_and_403_are_login_required() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
        let err = classify_status(status, "gated").unwrap();
        assert!(
            matches!(err, SourceError::LoginRequired { ref username } if username == "gated"),
            "expected LoginRequired for {status}, got: {err:?}"
        );
    }
}

#[test]
fn classify_status_5xx_is_connection() {
    for status in [
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::BAD_GATEWAY,
        StatusCode::SERVICE_UNAVAILABLE,
    ] {
        let err = classify_status(status, "anyone").unwrap();
        assert!(
            matches!(err, SourceError::Connection { .. }),
            "expected Connection for {status}, got: {err:?}"
        );
    }
}

#[test]
fn classify_status_other_4xx_is_unclassified() {
    let err = classify_status(StatusCode::TOO_MANY_REQUESTS, "anyone").unwrap();
    assert!(
        matches!(err, SourceError::Other(_)),
        "expected Other, got: {err:?}"
    );
}

#[test]
fn with_base_url_overrides_default() {
    let client = InstagramClient::new(5, "test/0.1")
        .unwrap()
        .with_base_url("http://127.0.0.1:9999");
    assert_eq!(client.base_url, "http://127.0.0.1:9999");
}
