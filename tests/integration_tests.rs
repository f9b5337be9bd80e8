use axum::http::StatusCode;
use axum_test::TestServer;
use product_api::{app::product::model::Product, build_app, config::Config};
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn server() -> TestServer {
    TestServer::new(build_app(&Config::default())).unwrap()
}

async fn create(server: &TestServer, body: Value) -> Product {
    let response = server.post("/api/products").json(&body).await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

fn error_of(response: &axum_test::TestResponse) -> String {
    let body: Value = response.json();
    body["error"].as_str().unwrap_or_default().to_string()
}

#[tokio::test]
async fn test_greeting() {
    let server = server();
    let response = server.get("/").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "Hello World");
}

#[tokio::test]
async fn test_create_and_get_product() {
    let server = server();
    let created = create(
        &server,
        json!({ "name": "Blue Shirt", "category": "apparel", "price": 25.0 }),
    )
    .await;

    assert_eq!(created.name, "Blue Shirt");
    assert_eq!(created.attributes["price"], json!(25.0));

    let response = server.get(&format!("/api/products/{}", created.id)).await;
    response.assert_status_ok();
    let fetched: Product = response.json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_body_id() {
    let server = server();
    let created = create(
        &server,
        json!({ "id": "fixed", "name": "Lamp", "category": "home" }),
    )
    .await;

    let raw: Value = server
        .get(&format!("/api/products/{}", created.id))
        .await
        .json();
    assert_eq!(raw["id"], json!(created.id.to_string()));
}

#[tokio::test]
async fn test_create_validation_errors() {
    let server = server();

    let response = server
        .post("/api/products")
        .json(&json!({ "category": "apparel" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&response), "ValidationError: Name is required");

    let response = server
        .post("/api/products")
        .json(&json!({ "name": "Hat", "category": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&response), "ValidationError: Category is required");

    let response = server
        .post("/api/products")
        .json(&json!({ "name": 42, "category": "apparel" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(error_of(&response).starts_with("ValidationError: "));

    let response = server.post("/api/products").text("not json").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(error_of(&response).starts_with("ValidationError: "));

    let list: Vec<Product> = server.get("/api/products").await.json();
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_get_missing_product() {
    let server = server();
    for id in ["00000000-0000-0000-0000-000000000000", "not-a-uuid"] {
        let response = server.get(&format!("/api/products/{}", id)).await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(error_of(&response), "NotFoundError: Product not found");
    }
}

#[tokio::test]
async fn test_update_replaces_record() {
    let server = server();
    let created = create(
        &server,
        json!({ "name": "Chair", "category": "furniture", "color": "red" }),
    )
    .await;

    let response = server
        .put(&format!("/api/products/{}", created.id))
        .json(&json!({ "name": "Stool", "category": "furniture", "legs": 3 }))
        .await;
    response.assert_status_ok();

    let fetched: Value = server
        .get(&format!("/api/products/{}", created.id))
        .await
        .json();
    assert_eq!(
        fetched,
        json!({
            "id": created.id.to_string(),
            "name": "Stool",
            "category": "furniture",
            "legs": 3
        })
    );
}

#[tokio::test]
async fn test_update_errors() {
    let server = server();
    let created = create(&server, json!({ "name": "Desk", "category": "furniture" })).await;

    let response = server
        .put("/api/products/00000000-0000-0000-0000-000000000000")
        .json(&json!({ "name": "Desk", "category": "furniture" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .put(&format!("/api/products/{}", created.id))
        .json(&json!({ "name": "Desk" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let fetched: Product = server
        .get(&format!("/api/products/{}", created.id))
        .await
        .json();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_delete_product() {
    let server = server();
    let created = create(&server, json!({ "name": "Mug", "category": "kitchen" })).await;

    let response = server.delete(&format!("/api/products/{}", created.id)).await;
    response.assert_status_ok();
    let deleted: Product = response.json();
    assert_eq!(deleted, created);

    server
        .get(&format!("/api/products/{}", created.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let response = server.delete(&format!("/api/products/{}", created.id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_of(&response), "NotFoundError: Product not found");
}

#[tokio::test]
async fn test_list_filter_and_pagination() {
    let server = server();
    let first = create(&server, json!({ "name": "a1", "category": "A" })).await;
    create(&server, json!({ "name": "b1", "category": "B" })).await;
    let third = create(&server, json!({ "name": "a2", "category": "A" })).await;

    let only_a: Vec<Product> = server
        .get("/api/products")
        .add_query_param("category", "A")
        .await
        .json();
    assert_eq!(only_a, vec![first.clone(), third.clone()]);

    let page_two: Vec<Product> = server
        .get("/api/products")
        .add_query_param("category", "A")
        .add_query_param("page", 2)
        .add_query_param("limit", 1)
        .await
        .json();
    assert_eq!(page_two, vec![third]);

    let page_three: Vec<Product> = server
        .get("/api/products")
        .add_query_param("category", "A")
        .add_query_param("page", 3)
        .add_query_param("limit", 1)
        .await
        .json();
    assert!(page_three.is_empty());
}

#[tokio::test]
async fn test_list_rejects_invalid_pagination() {
    let server = server();
    for query in ["page=0", "limit=0", "limit=1000", "page=abc", "limit=-1"] {
        let response = server.get(&format!("/api/products?{}", query)).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(error_of(&response).starts_with("ValidationError: "));
    }
}

#[tokio::test]
async fn test_search_by_name() {
    let server = server();
    create(&server, json!({ "name": "Blue Shirt", "category": "apparel" })).await;
    create(&server, json!({ "name": "Red Hat", "category": "apparel" })).await;

    let found: Vec<Product> = server
        .get("/api/search")
        .add_query_param("name", "shirt")
        .await
        .json();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Blue Shirt");

    for path in ["/api/search", "/api/search?name="] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(error_of(&response), "ValidationError: Name query required");
    }
}

#[tokio::test]
async fn test_stats() {
    let server = server();
    let empty: BTreeMap<String, usize> = server.get("/api/products/stats").await.json();
    assert!(empty.is_empty());

    for (name, category) in [("x", "A"), ("y", "A"), ("z", "B")] {
        create(&server, json!({ "name": name, "category": category })).await;
    }

    let response = server.get("/api/products/stats").await;
    response.assert_status_ok();
    let stats: Value = response.json();
    assert_eq!(stats, json!({ "A": 2, "B": 1 }));
}

#[tokio::test]
async fn test_unknown_route() {
    let server = server();
    let response = server.get("/api/unknown").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(error_of(&response), "NotFoundError: Route not found");
}

#[tokio::test]
async fn test_wrong_method_returns_structured_error() {
    let server = server();
    let responses = [
        server.patch("/api/products").await,
        server.delete("/api/products").await,
        server.post("/api/search").await,
        server.post("/api/products/stats").await,
    ];
    for response in responses {
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(error_of(&response), "NotFoundError: Route not found");
    }
}
