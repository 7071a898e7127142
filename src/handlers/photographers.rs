use actix_web::{HttpResponse, Responder, web};

use crate::cache::{ResponseCache, keys};
use crate::client::SourceError;
use crate::directory::engine;
use crate::directory::reveal::RevealWindow;
use crate::directory::store::DirectoryStore;
use crate::models::BrowseQuery;
use crate::models::filters::FilterState;
use crate::models::photographers::{BrowseResponse, PhotographerSummary};

/// GET /api/photographers — filtered, sorted, windowed listing.
/// Query params: ?search=&location=&min_price=&max_price=&min_rating=&styles=a,b&sort_by=rating&visible=9
pub async fn list_photographers(
    store: web::Data<DirectoryStore>,
    cache: web::Data<ResponseCache>,
    query: web::Query<BrowseQuery>,
) -> impl Responder {
    let filters = query.filter_state();
    let window = RevealWindow::with_visible(query.visible());

    // The cache holds the full filtered set; windowing is applied per request.
    let cache_key = keys::photographer_list(&filters);
    let summaries: Vec<PhotographerSummary> = match cache.get_list(&cache_key).await {
        Some(cached) => match serde_json::from_str(&cached) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Discarding undecodable cached listing: {e}");
                filter_snapshot(store.get_ref(), cache.get_ref(), &filters, cache_key).await
            }
        },
        None => filter_snapshot(store.get_ref(), cache.get_ref(), &filters, cache_key).await,
    };

    let shown = window.take(&summaries);
    HttpResponse::Ok().json(BrowseResponse {
        total: summaries.len(),
        visible: shown.len(),
        has_more: window.has_more(&summaries),
        photographers: shown.to_vec(),
    })
}

/// Run the filter engine over the current snapshot and cache the result.
async fn filter_snapshot(
    store: &DirectoryStore,
    cache: &ResponseCache,
    filters: &FilterState,
    cache_key: String,
) -> Vec<PhotographerSummary> {
    let records = store.all().await;
    let summaries: Vec<PhotographerSummary> = engine::apply_filters(&records, filters)
        .iter()
        .map(PhotographerSummary::from)
        .collect();
    if let Ok(body) = serde_json::to_string(&summaries) {
        cache.put_list(cache_key, body).await;
    }
    summaries
}

/// GET /api/photographers/{id} — full profile for one photographer.
///
/// A miss against the in-memory snapshot triggers the bounded reconciliation
/// (re-fetch the collection, re-check, at most 3 attempts) before reporting
/// not-found.
pub async fn get_photographer(
    store: web::Data<DirectoryStore>,
    cache: web::Data<ResponseCache>,
    path: web::Path<u64>,
) -> impl Responder {
    let id = path.into_inner();

    // Try the response cache first.
    if let Some(cached) = cache.get_detail(id).await {
        if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&cached) {
            return HttpResponse::Ok().json(parsed);
        }
    }

    match store.get_or_reconcile(id).await {
        Ok(photographer) => {
            if let Ok(body) = serde_json::to_string(&photographer) {
                cache.put_detail(id, body).await;
            }
            HttpResponse::Ok().json(photographer)
        }
        Err(SourceError::NotFound(_)) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Photographer {id} not found"),
        })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Failed to fetch photographer {id}: {e}"),
        })),
    }
}
