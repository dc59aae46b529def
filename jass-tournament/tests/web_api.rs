//! Integration tests for the HTTP API: creating tournaments, entering results and reading standings.

use actix_web::{test, web, App};
use chrono::Duration;
use jass_tournament::config::AppConfig;
use jass_tournament::web::{configure, AppState};
use jass_tournament::{Tournament, TournamentSettings};
use serde_json::{json, Value};

const PASSWORD: &str = "secret";

fn state() -> web::Data<AppState> {
    web::Data::new(AppState::new(AppConfig {
        admin_password: PASSWORD.to_string(),
        ..AppConfig::default()
    }))
}

fn roster(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("Player {}", i + 1)).collect()
}

#[actix_web::test]
async fn login_checks_password() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"password": PASSWORD}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({"password": "wrong"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn create_requires_admin() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .set_json(json!({"players": roster(8), "numTables": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn create_rejects_short_roster() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"players": roster(7), "numTables": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn full_tournament_flow() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({
            "players": roster(6),
            "numTables": 1,
            "bonusPointsEnabled": true
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let created: Value = test::read_body_json(resp).await;

    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["schedule"].as_array().unwrap().len(), 5);
    assert_eq!(created["bonusPointsPerMatch"], 43);
    assert_eq!(created["schedule"][0]["sitting"].as_array().unwrap().len(), 2);
    let winner = created["schedule"][0]["matches"][0]["team1"][0].as_u64().unwrap() as usize;

    // lookup is case-insensitive on the share code
    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{}", id.to_lowercase()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // invalid total is rejected
    let req = test::TestRequest::put()
        .uri(&format!("/api/tournaments/{}/matches/r0-m0/result", id))
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"team1Score": 400, "team2Score": 200}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    // unknown match
    let req = test::TestRequest::put()
        .uri(&format!("/api/tournaments/{}/matches/r0-m5/result", id))
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"team1Score": 400, "team2Score": 228}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let req = test::TestRequest::put()
        .uri(&format!("/api/tournaments/{}/matches/r0-m0/result", id))
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"team1Score": 400, "team2Score": 228, "team1Matches": 1, "team2Matches": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["playerStats"][winner]["totalPoints"], 400);
    assert_eq!(body["playerStats"][winner]["bonusPoints"], 43);

    let req = test::TestRequest::get()
        .uri(&format!("/api/tournaments/{}/standings?mode=average", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let standings: Value = test::read_body_json(resp).await;
    assert_eq!(standings.as_array().unwrap().len(), 6);
    assert_eq!(standings[0]["totalPoints"], 400);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/tournaments/{}/matches/r0-m0/result", id))
        .insert_header(("X-Admin-Password", PASSWORD))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["playerStats"][winner]["gamesPlayed"], 0);
}

#[actix_web::test]
async fn unknown_tournament_is_not_found() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
    let req = test::TestRequest::get().uri("/api/tournaments/ABC123").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn create_drops_expired_tournaments() {
    let state = state();
    let stale = Tournament::create(roster(4), TournamentSettings::new(1), Duration::zero()).unwrap();
    let stale_id = stale.id.clone();
    state.tournaments.lock().unwrap().insert(stale_id.clone(), stale);

    let app = test::init_service(App::new().app_data(state.clone()).configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"players": roster(4), "numTables": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);

    let tournaments = state.tournaments.lock().unwrap();
    assert_eq!(tournaments.len(), 1);
    assert!(!tournaments.contains_key(&stale_id));
}

#[actix_web::test]
async fn oversized_bonus_is_rejected_and_store_stays_usable() {
    let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({
            "players": roster(4),
            "numTables": 1,
            "bonusPointsEnabled": true,
            "bonusPointsPerMatch": 4_000_000_000u32
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let req = test::TestRequest::post()
        .uri("/api/tournaments")
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"players": roster(4), "numTables": 1, "bonusPointsEnabled": true}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::put()
        .uri(&format!("/api/tournaments/{}/matches/r0-m0/result", id))
        .insert_header(("X-Admin-Password", PASSWORD))
        .set_json(json!({"team1Score": 628, "team2Score": 0, "team1Matches": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
