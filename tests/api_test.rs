//! HTTP-surface tests driven through actix's in-process test service: the
//! browse listing with its windowed reveal, detail-route error surfacing and
//! inquiry intake.
//!
//! Run with: `cargo test --test api_test`

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, test, web};
use std::net::TcpListener;
use std::time::Duration;

use lensbook_backend::cache::{CacheConfig, ResponseCache};
use lensbook_backend::client::UpstreamClient;
use lensbook_backend::directory::store::DirectoryStore;
use lensbook_backend::handlers;
use lensbook_backend::inquiries::InquiryBook;
use lensbook_backend::models::photographers::PhotographerRecord;

fn record(
    id: u64,
    name: &str,
    location: &str,
    price: u32,
    rating: f64,
    styles: &[&str],
    tags: &[&str],
) -> PhotographerRecord {
    PhotographerRecord {
        id,
        name: name.to_string(),
        location: location.to_string(),
        price,
        rating,
        styles: styles.iter().map(|s| s.to_string()).collect(),
        tags: tags.iter().map(|s| s.to_string()).collect(),
        profile_pic: None,
        portfolio: vec![format!("/portfolio/{id}/1.jpg")],
        bio: Some(format!("{name} has shot across {location} for a decade.")),
        reviews: Vec::new(),
    }
}

/// Twelve records — enough to leave a second page behind the reveal window.
fn sample() -> Vec<PhotographerRecord> {
    vec![
        record(1, "Aarav Mehta", "Bengaluru", 12_000, 4.6, &["Outdoor", "Candid"], &["wedding"]),
        record(2, "Diya Sharma", "Delhi", 8_000, 4.9, &["Studio"], &["fashion"]),
        record(3, "Kabir Rao", "Mumbai", 25_000, 4.1, &["Outdoor", "Studio"], &["wedding", "travel"]),
        record(4, "Meera Iyer", "Bengaluru", 5_000, 3.4, &["Traditional"], &["newborn"]),
        record(5, "Rohan Das", "Hyderabad", 18_000, 4.6, &["Candid", "Indoor"], &["events"]),
        record(6, "Sana Kapoor", "Delhi", 30_000, 4.7, &["Candid"], &["wedding"]),
        record(7, "Vikram Nair", "Mumbai", 9_000, 3.9, &["Studio", "Indoor"], &["product"]),
        record(8, "Anya Bose", "Bengaluru", 15_000, 4.8, &["Candid", "Outdoor"], &["travel"]),
        record(9, "Ishaan Gupta", "Hyderabad", 7_000, 3.6, &["Traditional"], &["family"]),
        record(10, "Tara Menon", "Delhi", 22_000, 4.3, &["Outdoor"], &["fashion"]),
        record(11, "Dev Patel", "Mumbai", 11_000, 4.0, &["Indoor"], &["corporate"]),
        record(12, "Nisha Verma", "Bengaluru", 40_000, 5.0, &["Candid", "Studio"], &["wedding"]),
    ]
}

/// Client pointed at a released port: every upstream call is a fast
/// connection failure.
fn offline_client() -> UpstreamClient {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    UpstreamClient::new(&format!("http://{addr}"), Duration::from_millis(500))
}

fn offline_store() -> DirectoryStore {
    DirectoryStore::with_records(offline_client(), sample())
}

macro_rules! init_app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($store))
                .app_data(web::Data::new(ResponseCache::new(CacheConfig::default())))
                .app_data(web::Data::new(InquiryBook::new()))
                .service(web::scope("/api").configure(handlers::init_routes)),
        )
        .await
    };
}

#[actix_web::test]
async fn listing_applies_defaults_and_reveals_one_page() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::get().uri("/api/photographers").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 12);
    assert_eq!(body["visible"], 9);
    assert_eq!(body["hasMore"], true);

    let shown = body["photographers"].as_array().expect("photographers array");
    assert_eq!(shown.len(), 9);
    assert_eq!(shown[0]["name"], "Nisha Verma"); // 5.0 leads the rating sort
    for pair in shown.windows(2) {
        let (left, right) = (
            pair[0]["rating"].as_f64().expect("rating"),
            pair[1]["rating"].as_f64().expect("rating"),
        );
        assert!(left >= right);
    }
    // Card projection only — no portfolio or bio in the grid.
    assert!(shown[0].get("portfolio").is_none());
}

#[actix_web::test]
async fn visible_param_grows_the_prefix_and_caps_at_total() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::get()
        .uri("/api/photographers?visible=18")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["visible"], 12); // capped at the filtered total
    assert_eq!(body["hasMore"], false);

    // A window below one page is brought back up to the initial nine.
    let req = test::TestRequest::get()
        .uri("/api/photographers?visible=3")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["visible"], 9);
}

#[actix_web::test]
async fn query_filters_compose() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::get()
        .uri("/api/photographers?location=Bengaluru&min_rating=4.5&styles=Candid&sort_by=price")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let shown = body["photographers"].as_array().expect("photographers array");
    let names: Vec<&str> = shown.iter().filter_map(|p| p["name"].as_str()).collect();
    // Aarav (12k) before Nisha (40k); Anya (15k) sits between.
    assert_eq!(names, vec!["Aarav Mehta", "Anya Bose", "Nisha Verma"]);
    assert_eq!(body["hasMore"], false);
}

#[actix_web::test]
async fn search_matches_tags_case_insensitively() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::get()
        .uri("/api/photographers?search=WEDDING&sort_by=recent")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<u64> = body["photographers"]
        .as_array()
        .expect("photographers array")
        .iter()
        .filter_map(|p| p["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![12, 6, 3, 1]);
}

#[actix_web::test]
async fn detail_returns_the_full_record() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::get().uri("/api/photographers/3").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["name"], "Kabir Rao");
    assert!(body["portfolio"].as_array().is_some());
    assert!(body["bio"].as_str().is_some());
}

#[actix_web::test]
async fn upstream_outage_surfaces_bad_gateway_not_empty_success() {
    let app = init_app!(offline_store());

    // Id 999 misses the snapshot; the reconciliation re-fetch hits a dead
    // upstream and the transport failure aborts the retry loop.
    let req = test::TestRequest::get().uri("/api/photographers/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().expect("error body").contains("Failed to fetch"));
}

#[actix_web::test]
async fn unknown_photographer_is_not_found_after_reconciliation() {
    // A live upstream that simply never has the requested id.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind upstream listener");
    let addr = listener.local_addr().expect("upstream addr");
    let server = HttpServer::new(|| {
        App::new().route(
            "/photographers",
            web::get().to(|| async { HttpResponse::Ok().json(sample()) }),
        )
    })
    .listen(listener)
    .expect("listen on upstream port")
    .workers(1)
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let client = UpstreamClient::new(&format!("http://{addr}"), Duration::from_secs(5));
    let store = DirectoryStore::load(client).await.expect("load");
    let app = init_app!(store);

    let req = test::TestRequest::get().uri("/api/photographers/999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    handle.stop(true).await;
}

#[actix_web::test]
async fn inquiry_roundtrip() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::post()
        .uri("/api/photographers/2/inquiries")
        .set_json(serde_json::json!({
            "name": "Priya Singh",
            "email": "priya@example.com",
            "eventDate": "2026-11-20",
            "message": "Looking for a studio shoot in December."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["photographerId"], 2);
    assert!(created["id"].as_str().is_some());
    assert!(created["createdAt"].as_str().is_some());

    let req = test::TestRequest::get()
        .uri("/api/photographers/2/inquiries")
        .to_request();
    let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let entries = listed.as_array().expect("inquiry array");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["name"], "Priya Singh");

    // Another photographer's inbox stays empty.
    let req = test::TestRequest::get()
        .uri("/api/photographers/3/inquiries")
        .to_request();
    let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().expect("inquiry array").len(), 0);
}

#[actix_web::test]
async fn malformed_inquiries_are_rejected() {
    let app = init_app!(offline_store());

    let req = test::TestRequest::post()
        .uri("/api/photographers/2/inquiries")
        .set_json(serde_json::json!({
            "name": "Priya Singh",
            "email": "not-an-email",
            "message": "hello"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/photographers/2/inquiries")
        .set_json(serde_json::json!({
            "name": "Priya Singh",
            "email": "priya@example.com",
            "message": "   "
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
