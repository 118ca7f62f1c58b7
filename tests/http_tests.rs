use std::sync::Arc;

use bookshelf::config::ServerSettings;
use bookshelf::graphql::build_schema;
use bookshelf::server::router;
use bookshelf::storage::Store;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Serves a freshly seeded store on an ephemeral port and returns its URL.
async fn spawn_server(settings: ServerSettings) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(build_schema(Arc::new(Store::seeded())), &settings);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}{}", addr, settings.path)
}

async fn post(url: &str, body: Value) -> Value {
    reqwest::Client::new()
        .post(url)
        .json(&body)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_post_query() {
    let url = spawn_server(ServerSettings::default()).await;
    let body = post(&url, json!({ "query": "{ author(id: 2) { name books { id } } }" })).await;
    assert_eq!(
        body,
        json!({
            "data": {
                "author": {
                    "name": "J. R. R. Tolkien",
                    "books": [{ "id": 4 }, { "id": 5 }, { "id": 6 }]
                }
            }
        })
    );
}

#[tokio::test]
async fn test_post_mutation_with_variables_persists_across_requests() {
    let url = spawn_server(ServerSettings::default()).await;
    let added = post(
        &url,
        json!({
            "query": "mutation ($name: String!) { addAuthor(name: $name) { id name } }",
            "variables": { "name": "Ursula K. Le Guin" }
        }),
    )
    .await;
    assert_eq!(added["data"]["addAuthor"], json!({ "id": 4, "name": "Ursula K. Le Guin" }));

    let authors = post(&url, json!({ "query": "{ authors { id } }" })).await;
    assert_eq!(authors["data"]["authors"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_concurrent_mutations_get_distinct_ids() {
    let url = spawn_server(ServerSettings::default()).await;
    let requests = (0..10).map(|i| {
        let url = url.clone();
        tokio::spawn(async move {
            post(
                &url,
                json!({ "query": format!("mutation {{ addBook(name: \"Vol {i}\", authorId: 1) {{ id }} }}") }),
            )
            .await
        })
    });

    let mut ids = Vec::new();
    for handle in requests.collect::<Vec<_>>() {
        let body = handle.await.unwrap();
        ids.push(body["data"]["addBook"]["id"].as_i64().unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (9..=18).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_errors_are_returned_in_body() {
    let url = spawn_server(ServerSettings::default()).await;
    let body = post(&url, json!({ "query": "{ author(id: \"x\") { name } }" })).await;
    let errors = body["errors"].as_array().unwrap();
    assert!(!errors.is_empty());
    assert!(errors[0]["message"].is_string());
}

async fn get_html(url: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(url)
        .header(reqwest::header::ACCEPT, "text/html")
        .send()
        .await
        .unwrap()
}

fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[tokio::test]
async fn test_get_serves_graphiql_to_browsers() {
    let url = spawn_server(ServerSettings::default()).await;
    let response = get_html(&url).await;
    assert!(response.status().is_success());
    assert!(content_type(&response).starts_with("text/html"));
    let page = response.text().await.unwrap();
    assert!(page.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_get_with_query_returns_json() {
    let url = spawn_server(ServerSettings::default()).await;
    let response = reqwest::get(format!("{url}?query=%7Bbooks%7Bname%7D%7D"))
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert!(content_type(&response).contains("json"));

    let body: Value = response.json().await.unwrap();
    let books = body["data"]["books"].as_array().unwrap();
    assert_eq!(books.len(), 8);
    assert_eq!(books[0]["name"], "Harry Potter and the Chamber of Secrets");
}

#[tokio::test]
async fn test_get_with_query_and_html_accept_still_executes() {
    let url = spawn_server(ServerSettings::default()).await;
    let response = get_html(&format!("{url}?query=%7Bauthor(id%3A3)%7Bname%7D%7D")).await;
    assert!(content_type(&response).contains("json"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["author"]["name"], "Brent Weeks");
}

#[tokio::test]
async fn test_graphiql_can_be_disabled() {
    let settings = ServerSettings {
        graphiql: false,
        ..ServerSettings::default()
    };
    let url = spawn_server(settings).await;
    let response = get_html(&url).await;
    assert!(!content_type(&response).starts_with("text/html"));

    let body: Value = reqwest::get(format!("{url}?query=%7Bbooks%7Bid%7D%7D"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["books"].as_array().unwrap().len(), 8);

    let body = post(&url, json!({ "query": "{ books { id } }" })).await;
    assert_eq!(body["data"]["books"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn test_custom_path() {
    let settings = ServerSettings {
        path: "/api".to_string(),
        ..ServerSettings::default()
    };
    let url = spawn_server(settings).await;
    assert!(url.ends_with("/api"));
    let body = post(&url, json!({ "query": "{ book(id: 1) { name } }" })).await;
    assert_eq!(body["data"]["book"]["name"], "Harry Potter and the Chamber of Secrets");
}
