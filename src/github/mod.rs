//! GitHub REST + GraphQL access for the activity widgets.

pub mod calendar;
pub mod events;

use anyhow::{bail, Context, Result};
use gloo_net::http::{Request, Response};

use calendar::{ContributionCalendar, ContributionQuery, GraphQlResponse};
use events::{push_events, PushEvent};

/// Fetches the public events of `username` and keeps the latest pushes.
pub async fn fetch_push_events(
    api_base: &str,
    web_host: &str,
    username: &str,
) -> Result<Vec<PushEvent>> {
    let url = format!("{api_base}/users/{username}/events/public");

    let resp = Request::get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()
        .await
        .context("Failed to send events request")?;
    let resp = ensure_ok(resp, "events").await?;

    // Kept untyped; each push is decoded on its own in `push_events`.
    let raw = resp
        .json::<Vec<serde_json::Value>>()
        .await
        .context("Failed to deserialize events response")?;

    Ok(push_events(raw, web_host))
}

/// Fetches the one-year contribution calendar of `username`.
pub async fn fetch_contribution_calendar(
    api_base: &str,
    token: &str,
    username: &str,
) -> Result<ContributionCalendar> {
    let url = format!("{api_base}/graphql");

    let resp = Request::post(&url)
        .header("Authorization", &format!("Bearer {token}"))
        .json(&ContributionQuery::new(username))
        .context("Failed to encode GraphQL query")?
        .send()
        .await
        .context("Failed to send GraphQL request")?;
    let resp = ensure_ok(resp, "GraphQL").await?;

    let body = resp
        .json::<GraphQlResponse>()
        .await
        .context("Failed to deserialize GraphQL response")?;

    body.into_calendar()
}

async fn ensure_ok(resp: Response, what: &str) -> Result<Response> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("GitHub {what} API error (HTTP {status}): {body}");
    }
    Ok(resp)
}
