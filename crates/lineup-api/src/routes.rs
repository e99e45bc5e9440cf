//! Route configuration
//!
//! One `configure` entry point registering the whole HTTP surface;
//! the server calls it from `App::configure`.

use actix_web::{web, HttpResponse};

use crate::handlers::{account, listing, tables};

/// Register every application route plus the liveness probe.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(listing::index)
        .service(listing::search)
        .service(account::register_form)
        .service(account::register)
        .service(account::login_form)
        .service(account::login)
        .service(account::logout)
        .service(account::dashboard)
        .service(tables::new_table_form)
        .service(tables::create_table)
        .service(tables::table_detail)
        .service(tables::add_entry)
        .service(tables::delete_table)
        .route("/healthz", web::get().to(healthz_handler));
}

/// Liveness probe. JSON on purpose: probes and dashboards consume it,
/// not browsers.
async fn healthz_handler() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "lineup-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
