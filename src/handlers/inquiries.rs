use actix_web::{HttpResponse, Responder, web};

use crate::client::SourceError;
use crate::directory::store::DirectoryStore;
use crate::inquiries::InquiryBook;
use crate::models::inquiries::CreateInquiry;

/// POST /api/photographers/{id}/inquiries — send an inquiry to a photographer.
///
/// The payload must carry a name, a plausible email and a message; the
/// photographer must exist (the lookup reconciles with the upstream the same
/// way the detail view does).
pub async fn create_inquiry(
    store: web::Data<DirectoryStore>,
    book: web::Data<InquiryBook>,
    path: web::Path<u64>,
    body: web::Json<CreateInquiry>,
) -> impl Responder {
    let photographer_id = path.into_inner();
    let input = body.into_inner();

    // 1. Reject bad payloads before touching the directory.
    if let Err(problem) = input.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": problem,
        }));
    }

    // 2. Verify the photographer exists.
    let photographer = match store.get_or_reconcile(photographer_id).await {
        Ok(p) => p,
        Err(SourceError::NotFound(_)) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Photographer {photographer_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": format!("Failed to fetch photographer {photographer_id}: {e}"),
            }));
        }
    };

    // 3. Record it.
    let inquiry = book.submit(photographer_id, input);
    tracing::info!(photographer = %photographer.name, inquiry = %inquiry.id, "Inquiry recorded");
    HttpResponse::Created().json(inquiry)
}

/// GET /api/photographers/{id}/inquiries — inquiries recorded for a
/// photographer this process lifetime.
pub async fn get_inquiries(book: web::Data<InquiryBook>, path: web::Path<u64>) -> impl Responder {
    HttpResponse::Ok().json(book.for_photographer(path.into_inner()))
}
