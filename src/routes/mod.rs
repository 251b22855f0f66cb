// Route exports
pub mod leads;
pub mod relay;

use actix_cors::Cors;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            // The relay manages its own cross-origin headers; the scorer
            // routes get the standard permissive middleware
            .wrap(Cors::permissive())
            .configure(leads::configure),
    )
    .configure(relay::configure)
    .default_service(web::route().to(relay::fallback));
}
