//! Test server harness: the full router on a private in-memory database.

#![allow(dead_code)]

use backend::routes::configure_routes;
use backend::shared::data::db;
use backend::shared::state::AppState;
use reqwest::{Response, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Self {
        let conn = db::initialize_in_memory()
            .await
            .expect("in-memory database");
        Self::with_connection(conn).await
    }

    /// Serve an already prepared database
    pub async fn with_connection(conn: DatabaseConnection) -> Self {
        let app = configure_routes(AppState::new(conn, "USD"));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client.get(self.url(path)).send().await.expect("GET")
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST")
    }

    pub async fn post_raw(&self, path: &str, body: &str) -> Response {
        self.client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("POST")
    }

    pub async fn patch(&self, path: &str, body: &Value) -> Response {
        self.client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PATCH")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client.delete(self.url(path)).send().await.expect("DELETE")
    }

    /// POST that must succeed with 201
    pub async fn create(&self, path: &str, body: Value) -> Value {
        let resp = self.post(path, &body).await;
        let status = resp.status();
        let payload: Value = resp.json().await.expect("json body");
        assert_eq!(status, StatusCode::CREATED, "POST {} -> {}", path, payload);
        payload
    }

    /// Two brands, two categories, three products, two stores with one
    /// manager and one clerk, two customers.
    pub async fn seed_catalogue(&self) {
        for (id, name) in [(1, "Electra"), (2, "Trek")] {
            self.create("/api/production/brands/", json!({"brand_id": id, "brand_name": name}))
                .await;
        }
        for (id, name) in [(1, "Cruisers Bicycles"), (2, "Mountain Bikes")] {
            self.create(
                "/api/production/categories/",
                json!({"category_id": id, "category_name": name}),
            )
            .await;
        }
        for (id, name, brand, category, year, price) in [
            (1, "Trek 820 - 2016", 2, 2, 2016, "379.99"),
            (2, "Electra Townie Original 7D - 2015", 1, 1, 2015, "499.99"),
            (3, "Trek Fuel EX 8 29 - 2016", 2, 2, 2016, "2899.99"),
        ] {
            self.create(
                "/api/production/products/",
                json!({
                    "product_id": id,
                    "product_name": name,
                    "brand_id": brand,
                    "category_id": category,
                    "model_year": year,
                    "list_price": price,
                }),
            )
            .await;
        }
        for (id, name, city) in [(1, "Santa Cruz Bikes", "Santa Cruz"), (2, "Baldwin Bikes", "Baldwin")] {
            self.create(
                "/api/sales/stores/",
                json!({"store_id": id, "store_name": name, "city": city}),
            )
            .await;
        }
        self.create(
            "/api/sales/staffs/",
            json!({
                "staff_id": 1,
                "first_name": "Fabiola",
                "last_name": "Jackson",
                "email": "fabiola.jackson@bikes.shop",
                "active": true,
                "store_id": 1,
            }),
        )
        .await;
        self.create(
            "/api/sales/staffs/",
            json!({
                "staff_id": 2,
                "first_name": "Mireya",
                "last_name": "Copeland",
                "email": "mireya.copeland@bikes.shop",
                "active": true,
                "store_id": 1,
                "manager_id": 1,
            }),
        )
        .await;
        for (id, first, last, city, state) in [
            (1, "Debra", "Burks", "Orchard Park", "NY"),
            (2, "Kasha", "Todd", "Campbell", "CA"),
        ] {
            self.create(
                "/api/sales/customer/",
                json!({
                    "customer_id": id,
                    "first_name": first,
                    "last_name": last,
                    "email": format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
                    "city": city,
                    "state": state,
                }),
            )
            .await;
        }
    }

    pub async fn create_order(
        &self,
        order_id: i32,
        customer_id: Option<i32>,
        status: i32,
        order_date: &str,
    ) -> Value {
        self.create(
            "/api/sales/orders/",
            json!({
                "order_id": order_id,
                "customer_id": customer_id,
                "order_status": status,
                "order_date": order_date,
                "required_date": order_date,
                "store_id": 1,
                "staff_id": 2,
            }),
        )
        .await
    }

    pub async fn create_item(
        &self,
        order_id: i32,
        item_id: i32,
        product_id: i32,
        quantity: i32,
        list_price: &str,
        discount: &str,
    ) -> Value {
        self.create(
            "/api/sales/order-items/",
            json!({
                "order_id": order_id,
                "item_id": item_id,
                "product_id": product_id,
                "quantity": quantity,
                "list_price": list_price,
                "discount": discount,
            }),
        )
        .await
    }
}

/// Status plus the decoded JSON body
pub async fn read(resp: Response) -> (StatusCode, Value) {
    let status = resp.status();
    let body = resp.json().await.expect("json body");
    (status, body)
}

pub fn error_of(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
