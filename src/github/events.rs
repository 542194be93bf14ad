//! Recent push activity from the public events endpoint.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const FEED_LEN: usize = 5;
pub const SHORT_SHA_LEN: usize = 7;

const PUSH_EVENT: &str = "PushEvent";

// Raw shape of a push from `/users/{user}/events/public`. Other event kinds
// are never decoded, so their payloads can look like anything.

#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    pub actor: RawActor,
    pub repo: RawRepo,
    #[serde(default)]
    pub payload: RawPayload,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawActor {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub commits: Vec<RawCommit>,
    #[serde(default)]
    pub head: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCommit {
    #[serde(default)]
    pub sha: Option<String>,
}

/// One row of the activity feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PushEvent {
    pub created_at: DateTime<Utc>,
    pub actor: String,
    pub repo: String,
    pub short_sha: String,
    pub commit_url: String,
}

impl RawEvent {
    /// Sha of the first listed commit, or the push head when the payload
    /// carries no commit list.
    fn commit_sha(&self) -> Option<&str> {
        self.payload
            .commits
            .first()
            .and_then(|c| c.sha.as_deref())
            .or(self.payload.head.as_deref())
            .filter(|sha| !sha.is_empty())
    }
}

fn is_push(event: &Value) -> bool {
    event.get("type").and_then(Value::as_str) == Some(PUSH_EVENT)
}

/// Keeps the first [`FEED_LEN`] push events, in the order GitHub returned them
/// (newest first). Events are filtered by `type` before anything else is
/// decoded; pushes that fail to decode or carry no commit sha are skipped.
pub fn push_events(raw: Vec<Value>, web_host: &str) -> Vec<PushEvent> {
    raw.into_iter()
        .filter(is_push)
        .filter_map(|v| serde_json::from_value::<RawEvent>(v).ok())
        .filter_map(|e| {
            let sha = e.commit_sha()?;
            Some(PushEvent {
                created_at: e.created_at,
                actor: e.actor.login.clone(),
                repo: e.repo.name.clone(),
                short_sha: sha.chars().take(SHORT_SHA_LEN).collect(),
                commit_url: format!("https://{web_host}/{}/commit/{sha}", e.repo.name),
            })
        })
        .take(FEED_LEN)
        .collect()
}

/// `MM/DD/YYYY, HH:MM` in 24h time, shifted by `offset_minutes` east of UTC.
pub fn format_timestamp(ts: DateTime<Utc>, offset_minutes: i32) -> String {
    let local = FixedOffset::east_opt(offset_minutes * 60)
        .map(|tz| ts.with_timezone(&tz).format("%m/%d/%Y, %H:%M").to_string());
    local.unwrap_or_else(|| ts.format("%m/%d/%Y, %H:%M").to_string())
}
