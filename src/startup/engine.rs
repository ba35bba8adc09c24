use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{self, TrailingSlash};
use actix_web::{web, App, HttpServer};
use anyhow::Result;
use tracing_actix_web::TracingLogger;

use crate::configuration::{Settings, ANY_ORIGIN};
use crate::routes::*;

use super::prepare::Kits;

pub struct Engine {
    web_server: Server,
    port: u16,
}

/// Version string reported by `/` and `/health`.
pub struct AppVersion(pub String);

/// CORS policy from `application.allowed_origins`, which `load_settings` has already checked.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.iter().any(|o| o == ANY_ORIGIN) {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method().allow_any_header().max_age(3600)
}

impl Engine {
    pub fn build(config: Settings, kits: Kits) -> Result<Self> {
        let workout_log = web::Data::new(kits.workout_log);
        let version = web::Data::new(AppVersion(config.application.version));
        let allowed_origins = config.application.allowed_origins;
        let json_limit = config.application.json_limit;
        let port = kits.listener.local_addr()?.port();

        let server = HttpServer::new(move || {
            App::new()
                .wrap(build_cors(&allowed_origins))
                .wrap(middleware::NormalizePath::new(TrailingSlash::Trim))
                .wrap(TracingLogger::default())
                .app_data(
                    web::JsonConfig::default()
                        .limit(json_limit)
                        .error_handler(json_error_handler),
                )
                .route("/", web::get().to(home))
                .route("/health", web::get().to(health_check))
                .service(
                    web::scope("/api").service(
                        web::scope("/workouts")
                            .route("", web::get().to(get_workouts))
                            .route("", web::post().to(add_workout)),
                    ),
                )
                .app_data(workout_log.clone())
                .app_data(version.clone())
        })
        .listen(kits.listener)?
        .run();

        tracing::info!("Server ready on port {port}");

        Ok(Self {
            web_server: server,
            port,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn spinup(self) -> Result<(), std::io::Error> {
        self.web_server.await
    }
}
