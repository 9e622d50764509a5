use actix_web::{web, App, HttpServer};
use backend::config::auth::AuthConfig;
use backend::config::db::{DbKind, DbProfile};
use backend::infra::state::build_state;
use backend::middleware::{RequestTrace, StructuredLogger};
use backend::{routes, telemetry, AuthGuard};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker-compose env_file, or `set -a; . ./.env; set +a` locally).
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = match std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
    {
        Ok(port) => port,
        Err(_) => {
            error!("BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        }
    };

    // Identity provider settings are validated before anything else starts.
    let auth_config = match AuthConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid auth configuration");
            std::process::exit(1);
        }
    };
    info!(
        domain = auth_config.domain(),
        audience = auth_config.audience(),
        jwks_timeout_secs = auth_config.jwks_timeout().as_secs(),
        "auth configured"
    );

    let guard = match AuthGuard::from_config(auth_config) {
        Ok(guard) => guard,
        Err(e) => {
            error!(error = %e, "failed to build auth guard");
            std::process::exit(1);
        }
    };

    let app_state = match build_state(guard)
        .with_db(DbProfile::Prod, DbKind::Postgres)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(%host, port, "starting casting backend");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
