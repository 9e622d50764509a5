use actix_web::{web, HttpResponse};

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Welcome to Casting Agency API!</h1>")
}

/// Landing page for the identity provider's login redirect.
async fn login_results() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body("<h1>Please copy the JWT</h1>")
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/login-results", web::get().to(login_results));
}
