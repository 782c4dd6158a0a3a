//! Tests for HTTP request/response types.

use super::{HttpError, HttpRequest, HttpResponse};

fn example_url() -> url::Url {
    url::Url::parse("https://example.com/api").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::DELETE, example_url());

        assert_eq!(req.method, http::Method::DELETE);
        assert_eq!(req.url, example_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn shorthand_constructors_set_method() {
        assert_eq!(HttpRequest::get(example_url()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(example_url()).method, http::Method::POST);
        assert_eq!(HttpRequest::put(example_url()).method, http::Method::PUT);
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::get(example_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/plain"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn with_json_sets_body_and_content_type() {
        let req = HttpRequest::put(example_url())
            .with_json(&serde_json::json!({"ttl": 120}))
            .unwrap();

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.body.as_deref(), Some(br#"{"ttl":120}"#.as_slice()));
    }

    #[test]
    fn with_bearer_sets_authorization_header() {
        let req = HttpRequest::get(example_url())
            .with_bearer("secret-token")
            .unwrap();

        assert_eq!(
            req.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer secret-token"
        );
    }

    #[test]
    fn with_bearer_hides_token_from_debug_output() {
        let req = HttpRequest::get(example_url())
            .with_bearer("secret-token")
            .unwrap();

        assert!(!format!("{req:?}").contains("secret-token"));
    }

    #[test]
    fn with_bearer_rejects_control_characters() {
        let result = HttpRequest::get(example_url()).with_bearer("bad\ntoken");
        assert!(result.is_err());
    }
}

mod http_response {
    use super::*;

    fn response(status: http::StatusCode, body: &[u8]) -> HttpResponse {
        HttpResponse::new(status, body.to_vec())
    }

    #[test]
    fn is_success_only_for_2xx() {
        assert!(response(http::StatusCode::OK, b"").is_success());
        assert!(response(http::StatusCode::NO_CONTENT, b"").is_success());
        assert!(!response(http::StatusCode::BAD_REQUEST, b"").is_success());
        assert!(!response(http::StatusCode::INTERNAL_SERVER_ERROR, b"").is_success());
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = response(http::StatusCode::OK, &[0xFF, 0xFE]);
        assert!(resp.body_text().is_none());
    }

    #[test]
    fn json_decodes_body() {
        let resp = response(http::StatusCode::OK, br#"{"success":true}"#);
        let value: serde_json::Value = resp.json().unwrap();

        assert_eq!(value["success"], true);
    }

    #[test]
    fn json_fails_on_non_json_body() {
        let resp = response(http::StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert!(resp.json::<serde_json::Value>().is_err());
    }
}

mod http_error {
    use super::*;
    use std::error::Error;

    #[test]
    fn connection_error_preserves_source() {
        let error = HttpError::Connection(Box::new(std::io::Error::other("network unavailable")));

        assert!(error.to_string().contains("Connection error"));
        assert!(
            error
                .source()
                .unwrap()
                .to_string()
                .contains("network unavailable")
        );
    }

    #[test]
    fn timeout_displays_message() {
        assert_eq!(HttpError::Timeout.to_string(), "Request timed out");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
    }
}
