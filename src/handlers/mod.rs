pub mod inquiries;
pub mod photographers;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Photographer directory routes (public — browsing needs no account) ──
    cfg.service(
        web::scope("/photographers")
            .route("", web::get().to(photographers::list_photographers))
            .route("/{id}", web::get().to(photographers::get_photographer))
            .route("/{id}/inquiries", web::post().to(inquiries::create_inquiry))
            .route("/{id}/inquiries", web::get().to(inquiries::get_inquiries)),
    );
}
