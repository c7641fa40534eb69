use super::Host;
use crate::arena::ArenaError;
use crate::dto::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

fn rejected(e: ArenaError) -> HttpResponse {
    log::warn!("rejected request: {}", e);
    HttpResponse::BadRequest().json(ApiError::from(e))
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}
pub async fn register(host: web::Data<Host>, req: web::Json<RegisterPlayer>) -> impl Responder {
    match host.register(req.name.as_deref().unwrap_or_default()).await {
        Err(e) => rejected(e),
        Ok(standing) => HttpResponse::Ok().json(ApiPlayer::from(standing)),
    }
}
pub async fn start(host: web::Data<Host>, req: web::Json<StartGame>) -> impl Responder {
    let p1 = req.player1.as_deref().unwrap_or_default();
    let p2 = req.player2.as_deref().unwrap_or_default();
    match host.start(p1, p2).await {
        Err(e) => rejected(e),
        Ok(lineup) => HttpResponse::Ok().json(ApiStart::from(lineup)),
    }
}
pub async fn play_round(host: web::Data<Host>, body: web::Bytes) -> impl Responder {
    match host.play_round(&body).await {
        Err(e) => rejected(e),
        Ok(report) => HttpResponse::Ok().json(ApiRound::from(report)),
    }
}
pub async fn leaderboard(host: web::Data<Host>) -> impl Responder {
    HttpResponse::Ok().json(host.snapshot().await)
}
pub async fn game(host: web::Data<Host>) -> impl Responder {
    HttpResponse::Ok().json(ApiGame::from(host.game().await))
}
