//! Integration tests for the application state: directory caching against
//! a mock backend, failure handling, and the board-to-report hand-off.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use menuflow_app::config::AppConfig;
use menuflow_app::error::AppError;
use menuflow_app::notifications::NotificationLevel;
use menuflow_app::state::AppState;
use menuflow_core::client::{Client, NewClient};
use menuflow_core::stage::{DemandStatus, Stage};
use menuflow_gateway::GatewayError;

#[derive(Default)]
struct Backend {
    clients: Vec<Client>,
    next_id: i64,
}

type Shared = Arc<Mutex<Backend>>;

async fn list(State(state): State<Shared>) -> Json<Vec<Client>> {
    Json(state.lock().unwrap().clients.clone())
}

async fn create(State(state): State<Shared>, Json(body): Json<NewClient>) -> Json<Client> {
    let mut backend = state.lock().unwrap();
    backend.next_id += 1;
    let client = body.with_id(backend.next_id);
    backend.clients.push(client.clone());
    Json(client)
}

async fn update(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<NewClient>,
) -> Result<Json<Client>, StatusCode> {
    let mut backend = state.lock().unwrap();
    let slot = backend
        .clients
        .iter_mut()
        .find(|c| c.id == Some(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = body.with_id(id);
    Ok(Json(slot.clone()))
}

async fn delete(State(state): State<Shared>, Path(id): Path<i64>) -> StatusCode {
    let mut backend = state.lock().unwrap();
    let before = backend.clients.len();
    backend.clients.retain(|c| c.id != Some(id));
    if backend.clients.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Spawn the mock backend and return an `AppState` pointed at it.
async fn spawn_app() -> AppState {
    let state: Shared = Arc::default();
    let app = Router::new()
        .route("/api/v1/client", get(list).post(create))
        .route(
            "/api/v1/client/{id}",
            axum::routing::put(update).delete(delete),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    AppState::new(&AppConfig {
        gateway_url: format!("http://{addr}/api/v1"),
    })
}

fn form(name: &str, status: Stage) -> NewClient {
    NewClient {
        name: name.into(),
        contact: "(11) 98765-4321".into(),
        email: "contato@example.com".into(),
        status,
    }
}

fn today() -> NaiveDate {
    "2025-06-20".parse().unwrap()
}

#[tokio::test]
async fn created_client_appears_exactly_once_in_the_next_listing() {
    let mut app = spawn_app().await;

    app.directory.list().await.unwrap();
    assert_eq!(app.directory.cached().map(<[Client]>::len), Some(0));

    app.create_client(&form("Restaurante A", Stage::Collection))
        .await
        .unwrap();

    // The mutation invalidated the cache; the next list() refetches.
    assert!(app.directory.cached().is_none());
    let listed = app.directory.list().await.unwrap();
    let matching: Vec<_> = listed
        .iter()
        .filter(|c| c.name == "Restaurante A" && c.status == Stage::Collection)
        .collect();
    assert_eq!(matching.len(), 1);
    assert!(matching[0].id.is_some());
    assert!(app.notifications.is_empty());
}

#[tokio::test]
async fn validation_failure_blocks_submission_locally() {
    let mut app = spawn_app().await;
    app.directory.list().await.unwrap();

    let mut bad = form("Restaurante A", Stage::Collection);
    bad.email = "sem-arroba".into();

    let err = app.create_client(&bad).await.unwrap_err();
    assert_matches!(err, AppError::Core(_));

    // Nothing was sent: the cache is still valid and still empty.
    assert_eq!(app.directory.cached().map(<[Client]>::len), Some(0));
    let drained = app.notifications.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn deleting_a_missing_id_leaves_the_list_unchanged() {
    let mut app = spawn_app().await;
    app.create_client(&form("Restaurante A", Stage::Collection))
        .await
        .unwrap();
    let before: Vec<Client> = app.directory.list().await.unwrap().to_vec();

    let err = app.delete_client(999).await.unwrap_err();
    assert_matches!(err, AppError::Gateway(GatewayError::NotFound { id: 999 }));

    // Failed mutation: cache untouched, error notification queued.
    assert_eq!(app.directory.cached(), Some(&before[..]));
    let drained = app.notifications.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NotificationLevel::Error);
}

#[tokio::test]
async fn update_round_trip_reflects_exactly_the_new_status() {
    let mut app = spawn_app().await;
    app.create_client(&form("X", Stage::Collection)).await.unwrap();

    let fetched = app.directory.list().await.unwrap()[0].clone();
    let id = fetched.id.unwrap();

    let mut changed = form("X", Stage::Creation);
    changed.contact = fetched.contact.clone();
    changed.email = fetched.email.clone();
    app.update_client(id, &changed).await.unwrap();

    let refetched = app.directory.list().await.unwrap()[0].clone();
    assert_eq!(refetched.status, Stage::Creation);
    assert_eq!(refetched.id, fetched.id);
    assert_eq!(refetched.name, fetched.name);
    assert_eq!(refetched.contact, fetched.contact);
    assert_eq!(refetched.email, fetched.email);
}

#[tokio::test]
async fn refresh_after_a_mutation_reflects_the_backend_state() {
    let mut app = spawn_app().await;
    app.directory.list().await.unwrap();

    // The mutation bumps the cache generation; the follow-up refresh is
    // the newest fetch and must win.
    app.create_client(&form("Restaurante A", Stage::Collection))
        .await
        .unwrap();
    app.directory.refresh().await.unwrap();
    assert_eq!(app.directory.cached().map(<[Client]>::len), Some(1));
}

#[tokio::test]
async fn completing_the_final_stage_lands_in_the_finished_report() {
    let mut app = spawn_app().await;
    let key = app
        .board
        .demands(Stage::Deployment)
        .first()
        .map(|d| d.key.clone())
        .expect("seeded deployment demand");

    let rows_before = app.report.rows().len();
    app.set_demand_status(&key, DemandStatus::Done, today())
        .unwrap();

    assert_eq!(app.board.demands(Stage::Deployment).len(), 1);
    assert_eq!(app.report.rows().len(), rows_before + 1);
    let admitted = app.report.rows().last().unwrap();
    assert_eq!(admitted.name, "Lanchonete C");
    assert_eq!(admitted.completion_date, today());

    let drained = app.notifications.drain();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].level, NotificationLevel::Info);
}

#[tokio::test]
async fn completing_a_non_final_stage_advances_the_demand() {
    let mut app = spawn_app().await;
    let key = app
        .board
        .demands(Stage::Collection)
        .first()
        .map(|d| d.key.clone())
        .expect("seeded collection demand");

    app.set_demand_status(&key, DemandStatus::Done, today())
        .unwrap();

    assert_eq!(app.board.demands(Stage::Collection).len(), 2);
    assert_eq!(app.board.demands(Stage::Creation).len(), 3);
    assert_eq!(app.board.get(&key).unwrap().1.status, DemandStatus::Waiting);
    assert!(!app.notifications.is_empty());
}
