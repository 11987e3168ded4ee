use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use super::catalog::{CatalogError, ListingCatalog};
use super::domain::ListingId;
use super::form::SearchForm;
use super::views::{ListingCardView, ListingDetailView, SearchResultsView};
use crate::error::AppError;

/// Router builder exposing listing search and lookup endpoints.
pub fn listing_router<C>(catalog: Arc<C>) -> Router
where
    C: ListingCatalog + 'static,
{
    Router::new()
        .route("/api/v1/listings", get(search_handler::<C>))
        .route("/api/v1/listings/featured", get(featured_handler::<C>))
        .route("/api/v1/listings/:listing_id", get(detail_handler::<C>))
        .with_state(catalog)
}

pub(crate) async fn search_handler<C>(
    State(catalog): State<Arc<C>>,
    Query(form): Query<SearchForm>,
) -> Json<SearchResultsView>
where
    C: ListingCatalog + 'static,
{
    let criteria = form.criteria();
    let sort = form.sort_key();
    let results = catalog.search(&criteria, sort);

    Json(SearchResultsView::new(
        &results,
        sort,
        criteria.active_count(),
    ))
}

pub(crate) async fn featured_handler<C>(
    State(catalog): State<Arc<C>>,
) -> Json<Vec<ListingCardView>>
where
    C: ListingCatalog + 'static,
{
    Json(
        catalog
            .featured()
            .into_iter()
            .map(ListingCardView::from)
            .collect(),
    )
}

pub(crate) async fn detail_handler<C>(
    State(catalog): State<Arc<C>>,
    Path(listing_id): Path<String>,
) -> Result<Json<ListingDetailView>, AppError>
where
    C: ListingCatalog + 'static,
{
    let id = ListingId(listing_id);
    match catalog.find(&id) {
        Some(listing) => Ok(Json(ListingDetailView::from(listing))),
        None => Err(CatalogError::NotFound(id).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::catalog::InMemoryListingCatalog;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        listing_router(Arc::new(InMemoryListingCatalog::sample()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body collects");
        let body = serde_json::from_slice(&bytes).expect("json body");
        (status, body)
    }

    fn result_ids(body: &Value) -> Vec<String> {
        body["listings"]
            .as_array()
            .expect("listings array")
            .iter()
            .map(|card| card["id"].as_str().expect("id").to_string())
            .collect()
    }

    #[tokio::test]
    async fn search_applies_query_string_filters() {
        let (status, body) =
            get_json("/api/v1/listings?price_min=1000000&sort=price-low").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_found"], 3);
        assert_eq!(body["sort"], "price-ascending");
        assert_eq!(body["active_criteria"], 1);
        assert_eq!(result_ids(&body), ["4", "1", "2"]);
    }

    #[tokio::test]
    async fn search_ignores_blank_and_malformed_values() {
        let (status, body) =
            get_json("/api/v1/listings?location=&priceMax=abc&propertyType=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["active_criteria"], 0);
        assert_eq!(result_ids(&body), ["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn featured_lists_highlighted_listings() {
        let (status, body) = get_json("/api/v1/listings/featured").await;

        assert_eq!(status, StatusCode::OK);
        let cards = body.as_array().expect("array");
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0]["price_label"], "$2,500,000");
    }

    #[tokio::test]
    async fn detail_returns_listing_or_not_found() {
        let (status, body) = get_json("/api/v1/listings/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Contemporary Garden Condo");
        assert_eq!(body["amenities"].as_array().map(Vec::len), Some(4));

        let (status, body) = get_json("/api/v1/listings/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().expect("error").contains("42"));
    }
}
