mod common;

use common::{error_of, read, TestServer};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn health_answers_ok() {
    let server = TestServer::start().await;
    let resp = server.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn brands_are_listed_by_name_and_duplicates_conflict() {
    let server = TestServer::start().await;
    server
        .create("/api/production/brands/", json!({"brand_id": 5, "brand_name": "Trek"}))
        .await;
    let created = server
        .create("/api/production/brands/", json!({"brand_id": 9, "brand_name": "Electra"}))
        .await;
    assert_eq!(created["message"], "Brand created successfully");
    assert_eq!(created["brand_name"], "Electra");

    let (status, body) = read(server.get("/api/production/brands/").await).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["brand_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Electra", "Trek"]);

    let (status, body) = read(
        server
            .post("/api/production/brands/", &json!({"brand_id": 5, "brand_name": "Haro"}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_of(&body), "Brand with brand_id '5' already exists.");
}

#[tokio::test]
async fn create_rejects_bad_payloads() {
    let server = TestServer::start().await;

    let (status, body) = read(server.post_raw("/api/production/categories/", "{not json").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Invalid JSON payload");

    let (status, body) = read(
        server
            .post("/api/production/categories/", &json!({"category_id": 1}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Missing required field: category_name");
}

#[tokio::test]
async fn product_lifecycle() {
    let server = TestServer::start().await;
    server.seed_catalogue().await;

    let (status, body) = read(
        server
            .post(
                "/api/production/products/",
                &json!({
                    "product_id": 10,
                    "product_name": "Ghost Bike",
                    "brand_id": 77,
                    "category_id": 1,
                    "model_year": 2018,
                    "list_price": "100.00",
                }),
            )
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Brand with ID '77' does not exist.");

    let (status, body) = read(
        server
            .post(
                "/api/production/products/",
                &json!({
                    "product_id": 1,
                    "product_name": "Copy",
                    "brand_id": 1,
                    "category_id": 1,
                    "model_year": 2018,
                    "list_price": "1",
                }),
            )
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error_of(&body), "Product with product_id '1' already exists.");

    let (status, body) = read(server.get("/api/production/products/1/").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brand_name"], "Trek");
    assert_eq!(body["category_name"], "Mountain Bikes");
    assert_eq!(body["list_price"], "379.99");

    let (status, body) = read(
        server
            .patch("/api/production/products/1/", &json!({"list_price": "399.5"}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list_price"], "399.50");

    let (status, body) = read(
        server
            .patch("/api/production/products/1/", &json!({"category_id": 42}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Category with ID '42' does not exist.");

    let (status, body) = read(server.delete("/api/production/products/1/").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Product Trek 820 - 2016 (ID: 1) was deleted successfully."
    );

    let (status, body) = read(server.get("/api/production/products/1/").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Product not found");
}

#[tokio::test]
async fn product_list_filters_and_sorting() {
    let server = TestServer::start().await;
    server.seed_catalogue().await;

    let (_, body) = read(server.get("/api/production/products/?brand_id=2").await).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [1, 3]);

    let (_, body) = read(
        server
            .get("/api/production/products/?min_price=400&max_price=2899.99&sort_by=list_price&order_by=desc")
            .await,
    )
    .await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [3, 2]);

    let (status, body) = read(server.get("/api/production/products/?brand_id=trek").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "brand_id must be a valid integer.");

    let (status, body) = read(server.get("/api/production/products/?sort_by=weight").await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_of(&body),
        "Invalid sort field. Allowed: product_name, list_price, model_year"
    );
}

#[tokio::test]
async fn stock_lifecycle() {
    let server = TestServer::start().await;
    server.seed_catalogue().await;

    let created = server
        .create(
            "/api/production/stocks/",
            json!({"store_id": 1, "product_id": 2, "quantity": 14}),
        )
        .await;
    assert_eq!(created, json!({"store_id": 1, "product_id": 2, "quantity": 14}));

    let (status, body) = read(
        server
            .post(
                "/api/production/stocks/",
                &json!({"store_id": 1, "product_id": 2, "quantity": 3}),
            )
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        error_of(&body),
        "A stock record for this product at this store already exists. Use PATCH to update it."
    );

    let (status, _) = read(
        server
            .post(
                "/api/production/stocks/",
                &json!({"store_id": 9, "product_id": 2, "quantity": 3}),
            )
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = read(server.get("/api/production/stocks/1/2/").await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store_name"], "Santa Cruz Bikes");
    assert_eq!(body["product_name"], "Electra Townie Original 7D - 2015");

    let (status, body) = read(
        server
            .patch("/api/production/stocks/1/2/", &json!({"quantity": 14}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No changes were made.");

    let (status, body) = read(
        server
            .patch("/api/production/stocks/1/2/", &json!({"quantity": -1}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "quantity must not be negative");

    let (status, body) = read(server.patch("/api/production/stocks/1/2/", &json!({})).await).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_of(&body), "Missing required field: quantity");

    let (status, body) = read(
        server
            .patch("/api/production/stocks/1/2/", &json!({"quantity": 6}))
            .await,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quantity"], 6);

    let (status, _) = read(server.delete("/api/production/stocks/1/2/").await).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = read(server.get("/api/production/stocks/1/2/").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_of(&body), "Stock record not found");
}

#[tokio::test]
async fn deleting_a_brand_removes_its_products() {
    let server = TestServer::start().await;
    server.seed_catalogue().await;

    let (status, _) = read(server.delete("/api/production/brands/2/").await).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = read(server.get("/api/production/products/").await).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["product_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [2]);
}
