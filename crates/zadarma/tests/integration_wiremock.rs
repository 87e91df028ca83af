//! Integration tests against a wiremock server
//!
//! Checks what actually goes over the wire: query strings, form bodies,
//! multipart uploads and the `Authorization` header.

mod common;

use std::time::Duration;

use pretty_assertions::assert_eq;
use rstest::rstest;
use wiremock::matchers::{body_string, header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zadarma::{Client, Error, FilePart, Method, ParameterSet, ResponseFormat};

#[tokio::test]
async fn test_balance_get_query_and_signature() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/info/balance/"))
        .and(query_param("format", "json"))
        .and(header("authorization", common::BALANCE_JSON_AUTH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("balance_success.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    let response = client.info().balance().await.expect("Request failed");

    assert!(response.is_success());
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["balance"], 10.5);
    assert_eq!(body["currency"], "USD");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("format=json"));
    assert!(requests[0].body.is_empty());

    mock_server.verify().await;
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/sms/send/"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(header(
            "authorization",
            "testkey:MjI0ZDc0NmYwNzZiN2M3ZTE3YmRiM2I4YWFmMGJlOTRhMWE0NjczZg==",
        ))
        .and(body_string(
            "format=json&message=hello+world+%26+more&number=%2B7+123",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    let response = client
        .sms()
        .send("+7 123", "hello world & more", None)
        .await
        .unwrap();

    assert!(response.is_success());
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_put_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/v1/sip/callerid/"))
        .and(body_string("format=json&id=100&number=71234567890"))
        .and(header(
            "authorization",
            "testkey:OGFlNDQyNjg4MzBhNTZkYjZlYWFlMjhhZDViY2M4NGMzYTNlMTlmNw==",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    client
        .sip()
        .set_caller_id("100", "71234567890")
        .await
        .unwrap();

    mock_server.verify().await;
}

#[tokio::test]
async fn test_unauthenticated_call_has_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/info/timezone/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    client
        .call_unauthenticated(Method::GET, "/v1/info/timezone/", ParameterSet::new())
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
    assert_eq!(requests[0].url.query(), Some("format=json"));
}

#[tokio::test]
async fn test_multipart_upload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pbx/ivr/sounds/upload/"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    let file = FilePart::new("file", "greeting.mp3", "audio/mpeg", b"ID3-fake-audio".to_vec());
    let params = ParameterSet::new().with("name", "greeting");

    client
        .call_multipart(Method::POST, "/v1/pbx/ivr/sounds/upload/", params, file)
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let request = &requests[0];
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains(r#"name="format""#));
    assert!(body.contains(r#"name="name""#));
    assert!(body.contains(r#"filename="greeting.mp3""#));
    assert!(body.contains("ID3-fake-audio"));
    assert!(request.headers.contains_key("authorization"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_non_success_status_is_returned_not_raised() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/info/balance/"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(common::load_response_fixture("error_not_authorized.json")),
        )
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    let response = client.info().balance().await.expect("non-2xx is not an error");

    assert_eq!(response.status().as_u16(), 401);
    assert!(response.is_error());
    assert!(response.text().unwrap().contains("Not authorized"));

    match response.error_for_status() {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Not authorized");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[rstest]
#[case::json(ResponseFormat::Json, "json", "balance_success.json")]
#[case::xml(ResponseFormat::Xml, "xml", "balance_success.xml")]
#[tokio::test]
async fn test_requested_format(
    #[case] format: ResponseFormat,
    #[case] expected: &str,
    #[case] fixture: &str,
) {
    let mock_server = MockServer::start().await;
    let body = common::load_response_fixture(fixture);

    Mock::given(method("GET"))
        .and(path("/v1/info/balance/"))
        .and(query_param("format", expected))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    let response = client
        .call_with_format(Method::GET, "/v1/info/balance/", ParameterSet::new(), format)
        .await
        .unwrap();

    assert_eq!(response.text().unwrap(), body);
    mock_server.verify().await;
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("x-request-source", "integration-test"))
        .and(header_regex("user-agent", "^zadarma-rust/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::TEST_KEY)
        .api_secret(common::TEST_SECRET)
        .base_url(mock_server.uri())
        .default_header("x-request-source", "integration-test")
        .unwrap()
        .build()
        .unwrap();

    client.info().timezone().await.unwrap();
    mock_server.verify().await;
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = Client::builder()
        .api_key(common::TEST_KEY)
        .api_secret(common::TEST_SECRET)
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.info().balance().await.unwrap_err();
    assert!(matches!(err, Error::Timeout(d) if d == Duration::from_millis(100)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_error_is_propagated() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = common::test_client(format!("http://{}", addr));
    let err = client.info().balance().await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)), "got {err:?}");
}

#[tokio::test]
async fn test_endpoint_helpers_hit_expected_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .mount(&mock_server)
        .await;

    let client = common::test_client(mock_server.uri());
    client.info().price("79123456789", None).await.unwrap();
    client.info().tariff().await.unwrap();
    client.sip().list().await.unwrap();
    client.sip().status("100").await.unwrap();
    client.sip().redirection(Some("100")).await.unwrap();
    client
        .requests()
        .callback("100", "79123456789", None, true)
        .await
        .unwrap();
    client
        .statistics()
        .overall("2024-01-01 00:00:00", "2024-01-02 00:00:00")
        .await
        .unwrap();
    client
        .statistics()
        .pbx("2024-01-01 00:00:00", "2024-01-02 00:00:00")
        .await
        .unwrap();

    let paths: Vec<String> = mock_server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.url.path().to_string())
        .collect();

    assert_eq!(
        paths,
        vec![
            "/v1/info/price/",
            "/v1/tariff/",
            "/v1/sip/",
            "/v1/sip/100/status/",
            "/v1/sip/redirection/",
            "/v1/request/callback/",
            "/v1/statistics/",
            "/v1/statistics/pbx/",
        ]
    );
}
