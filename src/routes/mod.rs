// Route exports
pub mod leads;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(leads::configure));
}
