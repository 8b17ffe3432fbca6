//! Backend entry-point: wires REST endpoints and OpenAPI docs.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use backend::ApiDoc;
use backend::RequestTrace;
use backend::inbound::http::health::HealthState;
use backend::server::{ServerSettings, build_state, routes};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())?;
    let state = web::Data::new(build_state(Arc::new(DefaultClock)));
    let health_state = web::Data::new(HealthState::new());

    // Clones for the server factory so the originals stay usable below.
    let server_state = state.clone();
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_state.clone())
            .app_data(server_health_state.clone())
            .wrap(RequestTrace)
            .configure(routes);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind((settings.host(), settings.port()))?;

    health_state.mark_ready();
    info!(host = %settings.host(), port = %settings.port(), "listening");
    server.run().await?;
    Ok(())
}
