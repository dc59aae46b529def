use actix_web::{web, App, HttpServer, HttpResponse, Result, HttpRequest, middleware};
use chrono::Utc;
use log::info;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::config::AppConfig;
use crate::error::TournamentError;
use crate::schedule::MatchResult;
use crate::standings::RankingMode;
use crate::tournament::{generate_id, Tournament, TournamentSettings};

// In-memory storage for tournaments, keyed by share code
pub struct AppState {
    pub tournaments: Mutex<HashMap<String, Tournament>>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        AppState {
            tournaments: Mutex::new(HashMap::new()),
            config,
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, HashMap<String, Tournament>>> {
        self.tournaments
            .lock()
            .map_err(|_| actix_web::error::ErrorInternalServerError("Tournament store unavailable"))
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    players: Vec<String>,
    num_tables: usize,
    #[serde(default)]
    bonus_points_enabled: bool,
    bonus_points_per_match: Option<u32>,
}

#[derive(Deserialize)]
pub struct StandingsQuery {
    #[serde(default)]
    mode: RankingMode,
}

fn is_admin(req: &HttpRequest, state: &AppState) -> bool {
    let password = req
        .headers()
        .get("X-Admin-Password")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    password == state.config.admin_password
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({"success": false, "error": "Unauthorized"}))
}

fn not_found(what: &str) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({"success": false, "error": format!("{} not found", what)}))
}

fn error_response(err: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({"success": false, "error": err.to_string()});
    match err {
        TournamentError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Returns the tournament unless it is unknown or expired; expired ones are dropped
fn live_tournament<'a>(tournaments: &'a mut HashMap<String, Tournament>, id: &str) -> Option<&'a mut Tournament> {
    let code = id.to_uppercase();
    if tournaments.get(&code)?.is_expired(Utc::now()) {
        info!("Tournament {} expired", code);
        tournaments.remove(&code);
        return None;
    }
    tournaments.get_mut(&code)
}

// Admin login endpoint
async fn admin_login(
    req: web::Json<LoginRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if req.password == state.config.admin_password {
        Ok(HttpResponse::Ok().json(serde_json::json!({"success": true})))
    } else {
        Ok(HttpResponse::Unauthorized().json(serde_json::json!({"success": false, "error": "Invalid password"})))
    }
}

async fn create_tournament(
    req: HttpRequest,
    body: web::Json<CreateTournamentRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !is_admin(&req, &state) {
        return Ok(unauthorized());
    }

    let body = body.into_inner();
    let settings = TournamentSettings {
        num_tables: body.num_tables,
        bonus_points_enabled: body.bonus_points_enabled,
        bonus_points_per_match: body.bonus_points_per_match.unwrap_or(state.config.bonus_points_per_match),
    };

    let mut tournament = match Tournament::create(&body.players, settings, state.config.tournament_ttl()) {
        Ok(tournament) => tournament,
        Err(e) => return Ok(error_response(&e)),
    };

    let mut tournaments = state.store()?;
    let now = Utc::now();
    let before = tournaments.len();
    tournaments.retain(|_, t| !t.is_expired(now));
    if tournaments.len() < before {
        info!("Dropped {} expired tournament(s)", before - tournaments.len());
    }
    while tournaments.contains_key(&tournament.id) {
        tournament.id = generate_id(&mut rand::thread_rng());
    }
    tournaments.insert(tournament.id.clone(), tournament.clone());

    Ok(HttpResponse::Created().json(tournament))
}

async fn get_tournament(
    id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut tournaments = state.store()?;
    match live_tournament(&mut tournaments, &id) {
        Some(tournament) => Ok(HttpResponse::Ok().json(&*tournament)),
        None => Ok(not_found("Tournament")),
    }
}

async fn get_standings(
    id: web::Path<String>,
    query: web::Query<StandingsQuery>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut tournaments = state.store()?;
    match live_tournament(&mut tournaments, &id) {
        Some(tournament) => Ok(HttpResponse::Ok().json(tournament.standings(query.mode))),
        None => Ok(not_found("Tournament")),
    }
}

async fn put_result(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    body: web::Json<MatchResult>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !is_admin(&req, &state) {
        return Ok(unauthorized());
    }
    let (id, match_id) = path.into_inner();

    let mut tournaments = state.store()?;
    let Some(tournament) = live_tournament(&mut tournaments, &id) else {
        return Ok(not_found("Tournament"));
    };

    match tournament.record_result(&match_id, body.into_inner()) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "playerStats": tournament.player_stats,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn delete_result(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    if !is_admin(&req, &state) {
        return Ok(unauthorized());
    }
    let (id, match_id) = path.into_inner();

    let mut tournaments = state.store()?;
    let Some(tournament) = live_tournament(&mut tournaments, &id) else {
        return Ok(not_found("Tournament"));
    };

    match tournament.clear_result(&match_id) {
        Ok(()) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "playerStats": tournament.player_stats,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Registers the API routes; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(admin_login))
        .route("/api/tournaments", web::post().to(create_tournament))
        .route("/api/tournaments/{id}", web::get().to(get_tournament))
        .route("/api/tournaments/{id}/standings", web::get().to(get_standings))
        .service(
            web::resource("/api/tournaments/{id}/matches/{match_id}/result")
                .route(web::put().to(put_result))
                .route(web::delete().to(delete_result)),
        );
}

pub async fn start_server(config: AppConfig) -> std::io::Result<()> {
    let port = config.port;
    let app_state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
