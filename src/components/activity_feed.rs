//! Recent push activity, newest first.

use chrono::{DateTime, Utc};
use wasm_bindgen::JsValue;
use yew::prelude::*;

use super::Terminal;
use crate::fetch::{use_fetch_once, FetchState};
use crate::github::events::{format_timestamp, PushEvent};
use crate::github::fetch_push_events;

pub const FEED_ERROR: &str = "Failed to fetch GitHub events";

#[derive(Properties, PartialEq)]
pub struct ActivityFeedProps {
    pub username: AttrValue,
    pub api_base: AttrValue,
    pub web_host: AttrValue,
}

#[function_component(ActivityFeed)]
pub fn activity_feed(props: &ActivityFeedProps) -> Html {
    let state = {
        let username = props.username.to_string();
        let api_base = props.api_base.to_string();
        let web_host = props.web_host.to_string();
        use_fetch_once("activity feed", FEED_ERROR, move || async move {
            fetch_push_events(&api_base, &web_host, &username).await
        })
    };

    html! {
        <Terminal prompt="open source activity" busy={state.is_pending()}>
            { feed_body(&*state, local_offset_minutes) }
        </Terminal>
    }
}

/// Maps the fetch state to the widget body. `offset_at` gives the UTC offset
/// (minutes east) in effect at each event's timestamp.
pub fn feed_body(
    state: &FetchState<Vec<PushEvent>>,
    offset_at: impl Fn(DateTime<Utc>) -> i32,
) -> Html {
    match state {
        FetchState::Idle | FetchState::Loading => html! {
            <div class="skeleton-stack">
                <div class="skeleton row" />
                <div class="skeleton row" />
                <div class="skeleton row" />
            </div>
        },
        FetchState::Failure(msg) => html! { <div class="error">{ *msg }</div> },
        FetchState::Success(events) if events.is_empty() => html! {
            <div class="dim">{"no recent pushes"}</div>
        },
        FetchState::Success(events) => html! {
            <div class="feed">
                { for events.iter().map(|e| feed_row(e, offset_at(e.created_at))) }
            </div>
        },
    }
}

fn feed_row(event: &PushEvent, offset: i32) -> Html {
    html! {
        <div class="feed-row">
            <span class="dim">{ format!("[{}]", format_timestamp(event.created_at, offset)) }</span>
            <span class="bright">{ event.actor.clone() }</span>
            <span class="dim">{"committed in"}</span>
            <span class="bright">{ format!("[{}]", event.repo) }</span>
            <a href={event.commit_url.clone()} target="_blank" rel="noopener noreferrer">
                { format!("#{}#", event.short_sha) }
            </a>
        </div>
    }
}

// JS reports minutes *behind* UTC for that instant (DST aware); flip it to
// an east-of-UTC offset.
fn local_offset_minutes(ts: DateTime<Utc>) -> i32 {
    let date = js_sys::Date::new(&JsValue::from_f64(ts.timestamp_millis() as f64));
    -(date.get_timezone_offset() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(repo: &str, sha: &str) -> PushEvent {
        PushEvent {
            created_at: "2024-05-02T12:34:00Z".parse().unwrap(),
            actor: "bucurdavid".into(),
            repo: repo.into(),
            short_sha: sha.chars().take(7).collect(),
            commit_url: format!("https://github.com/{repo}/commit/{sha}"),
        }
    }

    fn utc(_: DateTime<Utc>) -> i32 {
        0
    }

    #[test]
    fn failure_renders_only_the_error_text() {
        let body = feed_body(&FetchState::Failure(FEED_ERROR), utc);
        assert_eq!(body, html! { <div class="error">{ FEED_ERROR }</div> });
    }

    #[test]
    fn idle_and_loading_render_the_skeleton() {
        let skeleton = html! {
            <div class="skeleton-stack">
                <div class="skeleton row" />
                <div class="skeleton row" />
                <div class="skeleton row" />
            </div>
        };
        assert_eq!(feed_body(&FetchState::Idle, utc), skeleton);
        assert_eq!(feed_body(&FetchState::Loading, utc), skeleton);
    }

    #[test]
    fn success_renders_one_row_per_event() {
        let events = vec![event("me/a", "abcdef1234"), event("me/b", "1234567890")];
        let expected = html! {
            <div class="feed">
                { for [feed_row(&events[0], 0), feed_row(&events[1], 0)] }
            </div>
        };
        assert_eq!(feed_body(&FetchState::Success(events.clone()), utc), expected);
    }

    #[test]
    fn each_row_uses_the_offset_at_its_own_timestamp() {
        let mut winter = event("me/a", "abcdef1234");
        winter.created_at = "2024-01-15T12:00:00Z".parse().unwrap();
        let summer = event("me/b", "1234567890");

        // +60 in January, +120 otherwise, like a CET/CEST browser.
        let cet = |ts: DateTime<Utc>| if ts.format("%m").to_string() == "01" { 60 } else { 120 };
        let body = feed_body(&FetchState::Success(vec![winter.clone(), summer.clone()]), cet);

        let expected = html! {
            <div class="feed">
                { for [feed_row(&winter, 60), feed_row(&summer, 120)] }
            </div>
        };
        assert_eq!(body, expected);
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let body = feed_body(&FetchState::Success(Vec::new()), utc);
        assert_eq!(body, html! { <div class="dim">{"no recent pushes"}</div> });
    }

    #[test]
    fn busy_only_while_pending() {
        assert!(FetchState::<Vec<PushEvent>>::Idle.is_pending());
        assert!(FetchState::<Vec<PushEvent>>::Loading.is_pending());
        assert!(!FetchState::<Vec<PushEvent>>::Failure(FEED_ERROR).is_pending());
        assert!(!FetchState::Success(vec![event("me/a", "abc")]).is_pending());
    }
}
