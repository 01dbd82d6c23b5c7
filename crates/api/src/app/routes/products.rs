use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_core::ProductId;

use crate::app::dto::{self, PriceQuery, ProductRequest, TextQuery};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/count", get(count_products))
        .route("/search", get(search_products))
        .route("/by-name", get(find_by_name))
        .route("/by-description", get(find_by_description))
        .route("/price/at-most", get(find_by_price_at_most))
        .route("/price/at-least", get(find_by_price_at_least))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn parse_id(id: &str) -> Result<ProductId, axum::response::Response> {
    id.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id")
    })
}

fn parse_body(
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<catalog_products::NewProduct, axum::response::Response> {
    let Json(body) = body.map_err(|rejection| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_body", rejection.body_text())
    })?;
    body.into_new_product().map_err(errors::domain_error_to_response)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products().list().await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let new_product = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.products().create(new_product).await {
        Ok(product) => {
            tracing::info!(id = %product.id, name = %product.name, "product created");
            (StatusCode::CREATED, Json(dto::product_to_json(&product))).into_response()
        }
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.products().get(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let new_product = match parse_body(body) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match services.products().update(id, new_product).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::not_found(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.products().delete(id).await {
        Ok(true) => {
            tracing::info!(%id, "product deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Ok(false) => errors::not_found(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn count_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products().count().await {
        Ok(count) => (StatusCode::OK, Json(serde_json::json!({ "count": count }))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn search_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<TextQuery>,
) -> axum::response::Response {
    match services.products().search(&query.q).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn find_by_name(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<TextQuery>,
) -> axum::response::Response {
    match services.products().find_by_name_containing(&query.q).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn find_by_description(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<TextQuery>,
) -> axum::response::Response {
    match services.products().find_by_description_containing(&query.q).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn find_by_price_at_most(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<PriceQuery>,
) -> axum::response::Response {
    let bound = match query.bound() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products().find_by_price_at_most(bound).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}

pub async fn find_by_price_at_least(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<PriceQuery>,
) -> axum::response::Response {
    let bound = match query.bound() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.products().find_by_price_at_least(bound).await {
        Ok(items) => (StatusCode::OK, Json(dto::products_to_json(&items))).into_response(),
        Err(e) => errors::repository_error_to_response(e),
    }
}
