//! Tests for `ReqwestClient`.
//!
//! These cover construction and error mapping. Requests against a live push
//! server are not exercised here.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn default_creates_same_as_new() {
        let client1 = ReqwestClient::new();
        let client2 = ReqwestClient::default();

        let _ = format!("{client1:?}");
        let _ = format!("{client2:?}");
    }

    #[test]
    fn from_client_accepts_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestClient::from_client(custom);

        assert!(format!("{client:?}").contains("ReqwestClient"));
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
        assert_send_sync::<PushClient<ReqwestClient>>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/api/push").unwrap();

        let result = client.request(HttpRequest::post(url)).await;

        // Behind a proxy the failure may come back as an HTTP error response.
        match result {
            Err(HttpError::Connection(_)) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn push_to_invalid_host_is_transport_or_decode_error() {
        let endpoint = url::Url::parse("http://invalid.invalid.invalid/api/push").unwrap();
        let client = PushClient::new(ReqwestClient::new()).with_endpoint(endpoint);
        let owner = Owner::new("uuid", "key");

        let err = client.push(&owner, "code", "body").await.unwrap_err();

        assert!(
            matches!(err, PushError::Transport(_) | PushError::Decode(_)),
            "unexpected error: {err:?}"
        );
    }
}
