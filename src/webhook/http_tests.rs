//! Tests for HTTP request/response types and the error taxonomy.

use std::time::Duration;

use super::{HttpError, HttpRequest, HttpResponse, SendError, TransportError};

fn webhook_url() -> url::Url {
    url::Url::parse("https://qyapi.weixin.qq.com/cgi-bin/webhook/send?key=abc").unwrap()
}

mod http_request {
    use super::*;

    #[test]
    fn new_creates_request_with_method_and_url() {
        let req = HttpRequest::new(http::Method::PUT, webhook_url());

        assert_eq!(req.method, http::Method::PUT);
        assert_eq!(req.url, webhook_url());
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
        assert!(req.timeout.is_none());
    }

    #[test]
    fn get_and_post_set_method() {
        assert_eq!(HttpRequest::get(webhook_url()).method, http::Method::GET);
        assert_eq!(HttpRequest::post(webhook_url()).method, http::Method::POST);
    }

    #[test]
    fn with_body_sets_body() {
        let body = br#"{"msgtype":"text"}"#.to_vec();
        let req = HttpRequest::post(webhook_url()).with_body(body.clone());

        assert_eq!(req.body, Some(body));
    }

    #[test]
    fn with_header_adds_content_type() {
        let req = HttpRequest::post(webhook_url()).with_header(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );

        assert_eq!(
            req.headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn with_header_appends_multiple_values_for_same_name() {
        let req = HttpRequest::get(webhook_url())
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("text/html"),
            )
            .with_header(
                http::header::ACCEPT,
                http::HeaderValue::from_static("application/json"),
            );

        assert_eq!(req.headers.get_all(http::header::ACCEPT).iter().count(), 2);
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let req = HttpRequest::post(webhook_url()).with_timeout(Duration::from_secs(3));

        assert_eq!(req.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn debug_format_is_readable() {
        let debug = format!("{:?}", HttpRequest::post(webhook_url()));

        assert!(debug.contains("HttpRequest"));
        assert!(debug.contains("POST"));
    }
}

mod http_response {
    use super::*;

    #[test]
    fn new_creates_response_with_all_fields() {
        let body = br#"{"errcode":0,"errmsg":"ok"}"#.to_vec();
        let resp = HttpResponse::new(http::StatusCode::OK, http::HeaderMap::new(), body.clone());

        assert_eq!(resp.status, http::StatusCode::OK);
        assert!(resp.headers.is_empty());
        assert_eq!(resp.body, body);
    }

    #[test]
    fn is_success_reflects_status_class() {
        for status in [http::StatusCode::OK, http::StatusCode::NO_CONTENT] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(resp.is_success(), "Expected {status} to be success");
        }

        for status in [
            http::StatusCode::BAD_REQUEST,
            http::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let resp = HttpResponse::new(status, http::HeaderMap::new(), vec![]);
            assert!(!resp.is_success(), "Expected {status} to not be success");
        }
    }

    #[test]
    fn body_text_returns_valid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            b"Hello, World!".to_vec(),
        );

        assert_eq!(resp.body_text(), Some("Hello, World!"));
    }

    #[test]
    fn body_text_returns_none_for_invalid_utf8() {
        let resp = HttpResponse::new(
            http::StatusCode::OK,
            http::HeaderMap::new(),
            vec![0xFF, 0xFE],
        );

        assert!(resp.body_text().is_none());
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
        assert!(HttpError::Timeout.source().is_none());
    }

    #[test]
    fn body_error_preserves_source() {
        let error = HttpError::Body(Box::new(std::io::Error::other("stream reset")));

        assert!(error.to_string().contains("response body"));
        assert!(error.source().is_some());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpError>();
        assert_send_sync::<SendError>();
    }
}

mod send_error_conversion {
    use super::*;

    #[test]
    fn connection_maps_to_transport_connection() {
        let err = SendError::from(HttpError::Connection(Box::new(std::io::Error::other(
            "refused",
        ))));

        assert!(matches!(
            err,
            SendError::Transport(TransportError::Connection(_))
        ));
        assert!(err.is_transport());
        assert!(!err.is_timeout());
    }

    #[test]
    fn timeout_maps_to_transport_timeout() {
        let err = SendError::from(HttpError::Timeout);

        assert!(matches!(err, SendError::Transport(TransportError::Timeout)));
        assert!(err.is_timeout());
    }

    #[test]
    fn invalid_url_maps_to_request_build() {
        let err = SendError::from(HttpError::InvalidUrl("relative URL".to_string()));

        assert!(matches!(err, SendError::RequestBuild(ref r) if r == "relative URL"));
        assert!(!err.is_transport());
    }

    #[test]
    fn body_maps_to_response_read() {
        let err = SendError::from(HttpError::Body(Box::new(std::io::Error::other(
            "truncated",
        ))));

        assert!(matches!(err, SendError::ResponseRead(_)));
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn serde_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SendError::from(json_err);

        assert!(matches!(err, SendError::Serialization(_)));
    }
}
