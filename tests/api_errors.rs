use femtrack::api::{encode_path_segment, parse_body, ApiError};

#[test]
fn ok_status_returns_parsed_body() {
    let value = parse_body(200, r#"{"status": "ok"}"#).unwrap();
    assert_eq!(value["status"], "ok");
}

#[test]
fn ok_status_with_junk_body_yields_sentinel() {
    let value = parse_body(204, "<html>nope</html>").unwrap();
    assert_eq!(value["detail"], "No JSON response");
}

#[test]
fn error_status_surfaces_detail() {
    let err = parse_body(400, r#"{"detail": "Email already registered"}"#).unwrap_err();
    match err {
        ApiError::Backend { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Email already registered");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_status_falls_back_to_message_field() {
    let err = parse_body(502, r#"{"message": "upstream down"}"#).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 502: upstream down");
}

#[test]
fn error_status_without_fields_reports_http_status() {
    let err = parse_body(500, r#"{"oops": 1}"#).unwrap_err();
    assert_eq!(err.to_string(), "HTTP 500: HTTP 500");
}

#[test]
fn error_status_with_junk_body_uses_sentinel_detail() {
    let err = parse_body(503, "Service Unavailable").unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503: No JSON response");
}

#[test]
fn email_path_segment_encoding() {
    assert_eq!(
        encode_path_segment("user+tag@example.com"),
        "user%2Btag%40example.com"
    );
    assert_eq!(encode_path_segment("plain-name_1.2~x"), "plain-name_1.2~x");
    assert_eq!(encode_path_segment("a b"), "a%20b");
}
