//! End-to-end tests against a mock API server

use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;
use taskwire::{Client, Error, HttpClientConfig, RequestConfig};
use wiremock::matchers::{body_partial_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::new(
        HttpClientConfig::builder()
            .base_url(server.uri())
            .bearer_token("t-test")
            .build(),
    )
}

#[tokio::test]
async fn paginates_tasks_across_three_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": {
                "items": [{"guid": "t-1"}],
                "has_more": true,
                "page_token": "p2"
            }
        })))
        .mount(&server)
        .await;

    // Second page answers with the alias field only.
    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .and(query_param("page_token", "p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": {
                "items": [{"guid": "t-2"}],
                "has_more": true,
                "next_page_token": "p3"
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .and(query_param("page_token", "p3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": {
                "items": [{"guid": "t-3"}],
                "has_more": false
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stream = client
        .tasks()
        .list(RequestConfig::new().query("page_size", "1"))
        .unwrap();

    let pages: Vec<_> = stream.collect().await;
    assert_eq!(pages.len(), 3);

    let guids: Vec<String> = pages
        .iter()
        .map(|page| {
            let page = page.as_ref().unwrap();
            page.items()[0]["guid"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(guids, vec!["t-1", "t-2", "t-3"]);

    // Static filters rode along on every request.
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    for request in &requests {
        assert!(request
            .url
            .query_pairs()
            .any(|(k, v)| k == "page_size" && v == "1"));
    }
}

#[tokio::test]
async fn pagination_failure_yields_err_then_ends() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .and(query_param_is_missing("page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "items": [{"guid": "t-1"}], "has_more": true, "page_token": "p2" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .and(query_param("page_token", "p2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut stream = client.tasks().list(RequestConfig::new()).unwrap();

    assert!(stream.next().await.unwrap().is_ok());
    let second = stream.next().await.unwrap();
    match second {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn empty_filters_are_omitted_from_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "items": [], "has_more": false }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stream = client
        .tasks()
        .list(
            RequestConfig::new()
                .query("completed", "")
                .query("user_id_type", "open_id"),
        )
        .unwrap();
    let pages: Vec<_> = stream.collect().await;
    assert_eq!(pages.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let url = &requests[0].url;
    assert!(!url.query_pairs().any(|(k, _)| k == "completed"));
    assert!(url
        .query_pairs()
        .any(|(k, v)| k == "user_id_type" && v == "open_id"));
}

#[tokio::test]
async fn get_task_renders_path_template() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks/guid-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "task": { "guid": "guid-42", "summary": "write tests" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client.tasks().get("guid-42").await.unwrap();
    assert_eq!(data["task"]["summary"], "write tests");
}

#[tokio::test]
async fn create_task_posts_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/task/v2/tasks"))
        .and(body_partial_json(json!({"summary": "new task"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "task": { "guid": "t-new" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client
        .tasks()
        .create(json!({"summary": "new task"}))
        .await
        .unwrap();
    assert_eq!(data["task"]["guid"], "t-new");
}

#[tokio::test]
async fn envelope_error_code_surfaces_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/tasks/gone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 230001, "msg": "task not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.tasks().get("gone").await.unwrap_err();
    match err {
        Error::Api { code, msg } => {
            assert_eq!(code, 230_001);
            assert_eq!(msg, "task not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn comments_list_filters_by_resource() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/task/v2/comments"))
        .and(query_param("resource_type", "task"))
        .and(query_param("resource_id", "t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "items": [{"id": "c-1", "content": "looks good"}], "has_more": false }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stream = client
        .comments()
        .list(
            RequestConfig::new()
                .query("resource_type", "task")
                .query("resource_id", "t-1"),
        )
        .unwrap();

    let items = taskwire::pagination::collect_items(stream).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["content"], "looks good");
}

#[tokio::test]
async fn custom_field_option_patch_renders_both_params() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/task/v2/custom_fields/cf-1/options/opt-2"))
        .and(body_partial_json(json!({"name": "Done"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0, "msg": "ok",
            "data": { "option": { "guid": "opt-2", "name": "Done" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let data = client
        .custom_fields()
        .patch_option("cf-1", "opt-2", json!({"name": "Done"}))
        .await
        .unwrap();
    assert_eq!(data["option"]["name"], "Done");
}

#[tokio::test]
async fn unknown_endpoint_is_rejected() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .call(
            "task.frobnicate",
            &taskwire::PathParams::new(),
            RequestConfig::new(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownEndpoint { .. }));

    // Non-paginated endpoints cannot be opened as streams.
    let err = client
        .list("task.get", &taskwire::PathParams::new(), RequestConfig::new())
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}
