//! `RemoteRepository` against a wiremock PostgREST stand-in.
//!
//! The adapter uses the blocking reqwest client, so each test owns a tokio
//! runtime only to start the mock server and mount expectations; the
//! repository calls themselves run on the test thread.

use fitlog::config::RemoteConfig;
use fitlog::errors::AppError;
use fitlog::models::{GoalPatch, NewWorkout, WorkoutPatch, WorkoutType};
use fitlog::repository::{GoalStore, RemoteRepository, WorkoutStore};
use fitlog::session::Session;
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workout_row() -> serde_json::Value {
    json!([{
        "id": "w-1",
        "user_id": "u-1",
        "title": "Morning Run",
        "type": "running",
        "duration": 45,
        "distance": 5.2,
        "calories": 420,
        "notes": null,
        "date": "2024-01-15T07:30:00+00:00",
        "completed": true,
        "created_at": "2024-01-15T07:31:02.123456+00:00"
    }])
}

fn start() -> (Runtime, MockServer) {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

fn repo(server: &MockServer) -> RemoteRepository {
    let cfg = RemoteConfig {
        url: server.uri(),
        api_key: "anon-key".into(),
        timeout_secs: 5,
    };
    let session = Session::new("u-1", Some("session-token".into())).unwrap();
    RemoteRepository::new(&cfg, &session).unwrap()
}

/// Every request must carry the project key and the session token.
fn authed(m: wiremock::MockBuilder) -> wiremock::MockBuilder {
    m.and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer session-token"))
}

#[test]
fn list_filters_by_owner_and_orders_server_side() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("GET")).and(path("/rest/v1/workouts")))
            .and(query_param("select", "*"))
            .and(query_param("user_id", "eq.u-1"))
            .and(query_param("order", "created_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(workout_row()))
            .expect(1)
            .mount(&server),
    );

    let workouts = repo(&server).list_workouts().unwrap();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].kind, WorkoutType::Running);
    assert_eq!(workouts[0].distance, Some(5.2));
}

#[test]
fn create_asks_for_the_representation() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("POST")).and(path("/rest/v1/workouts")))
            .and(header("prefer", "return=representation"))
            .and(body_partial_json(json!({ "type": "running", "user_id": "u-1" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(workout_row()))
            .expect(1)
            .mount(&server),
    );

    let created = repo(&server)
        .create_workout(NewWorkout {
            // overwritten with the session user
            user_id: "someone-else".into(),
            title: "Morning Run".into(),
            kind: WorkoutType::Running,
            duration: 45,
            distance: Some(5.2),
            calories: 420,
            notes: None,
            date: chrono::DateTime::parse_from_rfc3339("2024-01-15T07:30:00+00:00").unwrap(),
            completed: true,
            location: None,
        })
        .unwrap();
    assert_eq!(created.id, "w-1");
}

#[test]
fn non_success_status_becomes_remote_error() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("GET")).and(path("/rest/v1/goals")))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "JWT expired" })),
            )
            .mount(&server),
    );

    match repo(&server).list_goals().unwrap_err() {
        AppError::Remote { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "JWT expired");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn update_workout_of_missing_row_is_not_found() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("PATCH")).and(path("/rest/v1/workouts")))
            .and(query_param("id", "eq.w-9"))
            .and(query_param("user_id", "eq.u-1"))
            .and(header("prefer", "return=representation"))
            .and(body_partial_json(json!({ "title": "Evening Run" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server),
    );

    let patch = WorkoutPatch {
        title: Some("Evening Run".into()),
        ..WorkoutPatch::default()
    };
    let err = repo(&server).update_workout("w-9", &patch).unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "workout", .. }));
}

#[test]
fn update_goal_of_missing_row_is_not_found() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("PATCH")).and(path("/rest/v1/goals")))
            .and(query_param("id", "eq.g-9"))
            .and(query_param("user_id", "eq.u-1"))
            .and(body_partial_json(json!({ "current": 3.0 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server),
    );

    let patch = GoalPatch {
        current: Some(3.0),
        ..GoalPatch::default()
    };
    let err = repo(&server).update_goal("g-9", &patch).unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "goal", .. }));
}

#[test]
fn delete_of_missing_row_is_not_found() {
    let (rt, server) = start();
    rt.block_on(
        authed(Mock::given(method("DELETE")).and(path("/rest/v1/workouts")))
            .and(query_param("id", "eq.nope"))
            .and(query_param("user_id", "eq.u-1"))
            .and(header("prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server),
    );

    let err = repo(&server).delete_workout("nope").unwrap_err();
    assert!(matches!(err, AppError::NotFound { kind: "workout", .. }));
}
