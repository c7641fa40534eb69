use super::*;
use crate::dto::ApiError;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::error::InternalError;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let host = web::Data::new(Host::from(config.rules()));
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(host.clone())
                .configure(Self::routes)
        })
        .workers(config.workers)
        .bind(config.bind.as_str())?
        .run()
        .await
    }

    /// Route table, shared between the live server and tests.
    #[rustfmt::skip]
    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(Self::json())
            .route("/health", web::get().to(handlers::health))
            .service(
                web::scope("/api")
                    .route("/player/register", web::post().to(handlers::register))
                    .route("/game/start", web::post().to(handlers::start))
                    .route("/game/play_round", web::post().to(handlers::play_round))
                    .route("/game", web::get().to(handlers::game))
                    .route("/leaderboard", web::get().to(handlers::leaderboard)),
            );
    }

    /// Bodies parse as JSON whatever their content type; parse failures
    /// answer with the same `{error}` shape as arena rejections.
    fn json() -> web::JsonConfig {
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|e, _| {
                let body = ApiError {
                    error: e.to_string(),
                };
                InternalError::from_response(e, HttpResponse::BadRequest().json(body)).into()
            })
    }
}
