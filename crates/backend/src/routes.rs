use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Production app: catalogue and stock
fn production_routes() -> Router<AppState> {
    Router::new()
        // A001 Brand handlers
        .route(
            "/api/production/brands/",
            get(handlers::a001_brand::list_all).post(handlers::a001_brand::create),
        )
        .route(
            "/api/production/brands/:brand_id/",
            get(handlers::a001_brand::get_by_id)
                .patch(handlers::a001_brand::update)
                .delete(handlers::a001_brand::delete),
        )
        // A002 Category handlers
        .route(
            "/api/production/categories/",
            get(handlers::a002_category::list_all).post(handlers::a002_category::create),
        )
        .route(
            "/api/production/categories/:category_id/",
            get(handlers::a002_category::get_by_id)
                .patch(handlers::a002_category::update)
                .delete(handlers::a002_category::delete),
        )
        // A003 Product handlers
        .route(
            "/api/production/products/",
            get(handlers::a003_product::list).post(handlers::a003_product::create),
        )
        .route(
            "/api/production/products/:product_id/",
            get(handlers::a003_product::get_by_id)
                .patch(handlers::a003_product::update)
                .delete(handlers::a003_product::delete),
        )
        // A005 Stock handlers
        .route(
            "/api/production/stocks/",
            get(handlers::a005_stock::list).post(handlers::a005_stock::create),
        )
        .route(
            "/api/production/stocks/:store_id/:product_id/",
            get(handlers::a005_stock::get_by_key)
                .patch(handlers::a005_stock::update)
                .delete(handlers::a005_stock::delete),
        )
}

/// Sales app: stores, people and orders
fn sales_routes() -> Router<AppState> {
    Router::new()
        // A004 Store handlers
        .route(
            "/api/sales/stores/",
            get(handlers::a004_store::list_all).post(handlers::a004_store::create),
        )
        .route(
            "/api/sales/stores/:store_id/",
            get(handlers::a004_store::get_by_id)
                .patch(handlers::a004_store::update)
                .delete(handlers::a004_store::delete),
        )
        // A006 Customer handlers
        .route(
            "/api/sales/customer/",
            get(handlers::a006_customer::list).post(handlers::a006_customer::create),
        )
        .route(
            "/api/sales/customer/create/",
            axum::routing::post(handlers::a006_customer::create),
        )
        .route(
            "/api/sales/customer/update/:customer_id/",
            axum::routing::patch(handlers::a006_customer::update),
        )
        .route(
            "/api/sales/customer/delete/:customer_id/",
            axum::routing::delete(handlers::a006_customer::delete),
        )
        .route(
            "/api/sales/customer/:customer_id/",
            get(handlers::a006_customer::get_by_id)
                .patch(handlers::a006_customer::update)
                .delete(handlers::a006_customer::delete),
        )
        // A007 Staff handlers
        .route(
            "/api/sales/staffs/",
            get(handlers::a007_staff::list).post(handlers::a007_staff::create),
        )
        .route(
            "/api/sales/staffs/:staff_id/",
            get(handlers::a007_staff::get_by_id)
                .patch(handlers::a007_staff::update)
                .delete(handlers::a007_staff::delete),
        )
        // A008 Order handlers
        .route(
            "/api/sales/orders/",
            get(handlers::a008_order::list).post(handlers::a008_order::create),
        )
        .route(
            "/api/sales/orders/:order_id/",
            get(handlers::a008_order::get_by_id)
                .patch(handlers::a008_order::update)
                .delete(handlers::a008_order::delete),
        )
        // A009 Order item handlers
        .route(
            "/api/sales/order-items/",
            get(handlers::a009_order_item::list).post(handlers::a009_order_item::create),
        )
        .route(
            "/api/sales/order-items/:order_id/:item_id/",
            get(handlers::a009_order_item::get_by_key)
                .patch(handlers::a009_order_item::update)
                .delete(handlers::a009_order_item::delete),
        )
}

/// Report app
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/report/inventory-by-store/",
            get(handlers::d400_inventory_by_store::get_inventory_report),
        )
        .route(
            "/api/report/revenue-over-time/",
            get(handlers::d401_revenue_over_time::get_revenue_over_time),
        )
        .route(
            "/api/report/customer-pareto/",
            get(handlers::d402_customer_pareto::get_customer_pareto),
        )
}

/// Full application router with CORS and request logging
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(production_routes())
        .merge(sales_routes())
        .merge(report_routes())
        .layer(middleware::from_fn(request_logger))
        .layer(cors_layer())
        .with_state(state)
}
