//! Pagination driver behavior against a mocked server.

use parley::{Client, Credentials, Paging};
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> Client {
    Client::new(Credentials::new("master-token", "junior-token")).with_base_url(server.uri())
}

#[tokio::test]
async fn follows_cursors_until_the_last_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "A"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "B", "last": false })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "B"))
        .and(query_param("limit", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": null, "last": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            startkey: Some("A".into()),
            limit: Some(20),
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].next_cursor(), Some("B".into()));
    assert!(pages[1].is_last_page());
}

#[tokio::test]
async fn without_follow_a_single_page_is_fetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param_is_missing("follow"))
        .and(query_param_is_missing("endkey"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "B", "last": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            endkey: Some("K".into()),
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn first_fetch_omits_the_cursor_when_none_is_given() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param_is_missing("startkey"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "B", "last": false })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "last": true })))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn last_page_wins_over_a_dangling_next_cursor() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "B", "last": true })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn missing_next_cursor_is_a_clean_stop() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "last": false })))
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn a_cursor_that_does_not_advance_stops_the_loop() {
    let server = MockServer::start().await;

    // expect(1) doubles as the fetch counter: a second request would fail
    // the mock expectation.
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "A"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "A", "last": false })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            startkey: Some("A".into()),
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
}

#[tokio::test]
async fn a_next_cursor_past_the_endkey_is_never_fetched() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "2021-03-01T00:00:00.000Z_900"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": "2021-02-15T00:00:00.000Z_600",
            "last": false,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "2021-02-15T00:00:00.000Z_600"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "next": "2021-01-15T00:00:00.000Z_300",
            "last": false,
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "2021-01-15T00:00:00.000Z_300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "last": true })))
        .expect(0)
        .mount(&server)
        .await;

    let pages = client(&server)
        .feed()
        .get(Paging {
            startkey: Some("2021-03-01T00:00:00.000Z_900".into()),
            endkey: Some("2021-02-01T00:00:00.000Z_000".into()),
            follow: true,
            ..Paging::default()
        })
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn a_transport_error_aborts_the_whole_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param_is_missing("startkey"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "next": "B", "last": false })),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/feed"))
        .and(query_param("startkey", "B"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .feed()
        .get(Paging {
            follow: true,
            ..Paging::default()
        })
        .await;

    assert!(matches!(result, Err(parley::Error::Request(_))));
}
