//! Tests for `ReqwestClient` against a local stub server.

use std::time::Duration;

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::{HttpClient, HttpError, HttpRequest, ReqwestClient};

/// Client that ignores proxy environment variables so loopback stays local.
fn direct_client() -> ReqwestClient {
    ReqwestClient::from_client(reqwest::Client::builder().no_proxy().build().unwrap())
}

mod construction {
    use super::*;

    #[test]
    fn default_creates_same_as_new() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        assert!(format!("{client1:?}").contains("ReqwestClient"));
        assert!(format!("{client2:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }
}

mod requests {
    use super::*;

    #[tokio::test]
    async fn forwards_method_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .and(header("content-type", "application/json"))
            .and(body_string(r#"{"a":1}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
            .expect(1)
            .mount(&server)
            .await;

        let url = url::Url::parse(&format!("{}/hook", server.uri())).unwrap();
        let req = HttpRequest::post(url)
            .with_header(
                http::header::CONTENT_TYPE,
                http::HeaderValue::from_static("application/json"),
            )
            .with_body(br#"{"a":1}"#.to_vec());

        let resp = direct_client().request(req).await.unwrap();

        assert_eq!(resp.status, http::StatusCode::OK);
        assert_eq!(resp.body_text(), Some("accepted"));
    }

    #[tokio::test]
    async fn non_success_status_is_a_response_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
            .mount(&server)
            .await;

        let url = url::Url::parse(&server.uri()).unwrap();
        let resp = direct_client()
            .request(HttpRequest::post(url))
            .await
            .unwrap();

        assert_eq!(resp.status, http::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(resp.body, b"busy".to_vec());
    }

    #[tokio::test]
    async fn slow_server_yields_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let url = url::Url::parse(&server.uri()).unwrap();
        let req = HttpRequest::post(url).with_timeout(Duration::from_millis(200));

        let result = direct_client().request(req).await;

        assert!(matches!(result, Err(HttpError::Timeout)), "got {result:?}");
    }

    #[tokio::test]
    async fn refused_connection_yields_connection_error() {
        // Bind then drop to get a local port nobody listens on
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = url::Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();

        let result = direct_client().request(HttpRequest::post(url)).await;

        assert!(
            matches!(result, Err(HttpError::Connection(_))),
            "got {result:?}"
        );
    }
}
