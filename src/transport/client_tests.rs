//! Tests for `ReqwestClient`.

use super::*;

mod reqwest_client {
    use super::*;

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReqwestClient>();
    }

    #[tokio::test]
    async fn request_to_invalid_host_returns_error_or_proxy_response() {
        let client = ReqwestClient::new();
        let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();
        let req = HttpRequest::get(url).with_timeout(std::time::Duration::from_secs(5));

        let result = client.request(req).await;

        // Behind a proxy the failure may surface as an error response instead.
        match result {
            Err(HttpError::Connection(_) | HttpError::Timeout) => {}
            Ok(resp) if !resp.is_success() => {}
            other => panic!("Expected connection error or proxy error response, got {other:?}"),
        }
    }
}
