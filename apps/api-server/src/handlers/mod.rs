//! HTTP handlers and route configuration.

mod content;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/author", web::get().to(content::author))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(content::list_posts))
                    // Fixed segments must precede the slug route
                    .route("/recent", web::get().to(content::recent_posts))
                    .route("/dates", web::get().to(content::available_dates))
                    .route("/{slug}", web::get().to(content::post_by_slug)),
            )
            .route(
                "/pages/{page}/{locale}",
                web::get().to(content::page_content),
            ),
    );
}
