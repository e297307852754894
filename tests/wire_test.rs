//! End-to-end wire shape against a mock cluster.

use esconn::prelude::*;
use esconn::esconn_http::{HttpClient, HttpClientConfig};
use serde_json::{Value, json};
use std::sync::Arc;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn connect(server: &MockServer) -> Connection {
    Connection::from_uri(&server.uri()).unwrap()
}

#[tokio::test]
async fn test_search_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/articles/_doc/_search"))
        .and(query_param("size", "5"))
        .and(body_json(json!({"query": {"match_all": {}}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hits": {"hits": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let response = conn
        .search(
            Some("articles"),
            Some("_doc"),
            None,
            &QueryParams::new().with("size", 5),
        )
        .await
        .unwrap();

    let body: Value = response.json().unwrap();
    assert!(body["hits"]["hits"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_msearch_payload_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_msearch"))
        .and(header("content-type", "application/x-ndjson"))
        .and(body_string(
            "{\"index\":\"a\"}\n{\"q\":1}\n{\"index\":\"b\"}\n{\"q\":2}\n",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"responses": [{}, {}]})))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    conn.multi_search("a", json!({"q": 1}));
    conn.multi_search("b", json!({"q": 2}));

    let response = conn.apply_search(&QueryParams::new()).await.unwrap();
    let body: Value = response.json().unwrap();
    assert_eq!(body["responses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_returns_decoded_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/user/42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"_id": "42", "found": true, "_source": {"name": "Ada"}})),
        )
        .mount(&server)
        .await;

    let conn = connect(&server);
    let doc: Value = conn
        .get("users", "user", "42", &QueryParams::new())
        .await
        .unwrap();

    assert_eq!(doc["_source"]["name"], "Ada");
}

#[tokio::test]
async fn test_update_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users/user/42/_update"))
        .and(body_json(json!({"doc": {"name": "Grace"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "updated"})))
        .expect(1)
        .mount(&server)
        .await;

    let conn = connect(&server);
    let response = conn
        .update("users", "user", "42", &json!({"name": "Grace"}))
        .await
        .unwrap();

    assert!(response.is_success());
}

#[tokio::test]
async fn test_missing_document_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"found": false})))
        .mount(&server)
        .await;

    let conn = connect(&server);
    let err = conn
        .get::<Value>("users", "user", "missing", &QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.as_transport().and_then(|e| e.status_code()), Some(404));
}

#[tokio::test]
async fn test_delete_response_is_returned_raw_when_status_errors_disabled() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/user/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"result": "not_found"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(HttpClientConfig::builder().error_for_status(false).build()).unwrap();
    let config = ConnectionConfig::from_uri(&server.uri()).unwrap();
    let conn = Connection::with_transport(config, Arc::new(client));

    let response = conn
        .delete("users", "user", "42", &QueryParams::new())
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().unwrap();
    assert_eq!(body["result"], "not_found");
}
