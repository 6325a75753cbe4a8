//! Adapter for the hosted backend's REST interface (PostgREST dialect).
//!
//! Rows are filtered and ordered server-side; every request carries the
//! project `apikey` and the session's bearer token.

use super::{GoalStore, Repository, WorkoutStore};
use crate::config::RemoteConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, GoalPatch, NewGoal, NewWorkout, Workout, WorkoutPatch};
use crate::session::Session;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

const WORKOUTS: &str = "workouts";
const GOALS: &str = "goals";
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub struct RemoteRepository {
    client: Client,
    base_url: String,
    api_key: String,
    token: String,
    user_id: String,
}

impl RemoteRepository {
    pub fn new(cfg: &RemoteConfig, session: &Session) -> AppResult<Self> {
        let token = session.require_token()?.to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            token,
            user_id: session.user_id().to_string(),
        })
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.token)
            .header("Accept", "application/json")
    }

    fn owner_filter(&self) -> String {
        format!("eq.{}", self.user_id)
    }

    fn list<T: DeserializeOwned>(&self, table: &str) -> AppResult<Vec<T>> {
        let owner = self.owner_filter();
        let req = self.client.get(self.endpoint(table)).query(&[
            ("select", "*"),
            ("user_id", owner.as_str()),
            ("order", "created_at.desc"),
        ]);
        let rows: Vec<T> = send(self.authed(req), table, "list")?.json()?;
        debug!(table, count = rows.len(), "remote list");
        Ok(rows)
    }

    fn insert<B: Serialize, T: DeserializeOwned>(&self, table: &str, body: &B) -> AppResult<T> {
        let req = self
            .client
            .post(self.endpoint(table))
            .header("Prefer", "return=representation")
            .json(body);
        let rows: Vec<T> = send(self.authed(req), table, "create")?.json()?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::Remote {
                status: 201,
                message: format!("{table}: insert returned no row"),
            })
    }

    fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        table: &str,
        kind: &'static str,
        id: &str,
        body: &B,
    ) -> AppResult<T> {
        let id_filter = format!("eq.{id}");
        let owner = self.owner_filter();
        let req = self
            .client
            .patch(self.endpoint(table))
            .query(&[("id", id_filter.as_str()), ("user_id", owner.as_str())])
            .header("Prefer", "return=representation")
            .json(body);
        let rows: Vec<T> = send(self.authed(req), table, "update")?.json()?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::not_found(kind, id))
    }

    fn remove(&self, table: &str, kind: &'static str, id: &str) -> AppResult<()> {
        let id_filter = format!("eq.{id}");
        let owner = self.owner_filter();
        let req = self
            .client
            .delete(self.endpoint(table))
            .query(&[("id", id_filter.as_str()), ("user_id", owner.as_str())])
            .header("Prefer", "return=representation");
        let rows: Vec<serde_json::Value> = send(self.authed(req), table, "delete")?.json()?;
        if rows.is_empty() {
            return Err(AppError::not_found(kind, id));
        }
        Ok(())
    }
}

/// Send and turn any non-2xx answer into `AppError::Remote`.
fn send(req: RequestBuilder, table: &str, op: &str) -> AppResult<Response> {
    let resp = req.send()?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().unwrap_or_default();
    let message = error_message(&body);
    error!(table, op, status = status.as_u16(), %message, "remote request failed");
    Err(AppError::Remote {
        status: status.as_u16(),
        message,
    })
}

/// PostgREST and the auth gateway put the reason under `message` (or `msg`).
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("msg"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}

impl WorkoutStore for RemoteRepository {
    fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.list(WORKOUTS)
    }

    fn create_workout(&self, mut new: NewWorkout) -> AppResult<Workout> {
        new.user_id = self.user_id.clone();
        self.insert(WORKOUTS, &new)
    }

    fn update_workout(&self, id: &str, patch: &WorkoutPatch) -> AppResult<Workout> {
        self.patch(WORKOUTS, "workout", id, patch)
    }

    fn delete_workout(&self, id: &str) -> AppResult<()> {
        self.remove(WORKOUTS, "workout", id)
    }
}

impl GoalStore for RemoteRepository {
    fn list_goals(&self) -> AppResult<Vec<Goal>> {
        self.list(GOALS)
    }

    fn create_goal(&self, mut new: NewGoal) -> AppResult<Goal> {
        new.user_id = self.user_id.clone();
        self.insert(GOALS, &new)
    }

    fn update_goal(&self, id: &str, patch: &GoalPatch) -> AppResult<Goal> {
        self.patch(GOALS, "goal", id, patch)
    }

    fn delete_goal(&self, id: &str) -> AppResult<()> {
        self.remove(GOALS, "goal", id)
    }
}

impl Repository for RemoteRepository {
    fn backend_name(&self) -> &'static str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(error_message(r#"{"message":"JWT expired","code":"PGRST301"}"#), "JWT expired");
        assert_eq!(error_message(r#"{"msg":"Invalid API key"}"#), "Invalid API key");
        assert_eq!(error_message("  gateway timeout \n"), "gateway timeout");
    }

    #[test]
    fn remote_requires_a_token() {
        let session = Session::new("u-1", None).unwrap();
        let cfg = RemoteConfig {
            url: "http://localhost:1".into(),
            api_key: "anon".into(),
            timeout_secs: 1,
        };
        assert!(matches!(
            RemoteRepository::new(&cfg, &session),
            Err(AppError::MissingSession(_))
        ));
    }
}
