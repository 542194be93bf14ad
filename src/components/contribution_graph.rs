//! One-year contribution calendar, graded by daily count.

use anyhow::bail;
use yew::prelude::*;

use super::Terminal;
use crate::fetch::{use_fetch_once, FetchState};
use crate::github::calendar::{
    last_month_weeks, month_labels, ContributionCalendar, ContributionDay, ContributionWeek, Tier,
};
use crate::github::fetch_contribution_calendar;

pub const GRAPH_ERROR: &str = "Failed to fetch contribution data";

const WEEKDAYS: [&str; 3] = ["Mon", "Wed", "Fri"];

#[derive(Properties, PartialEq)]
pub struct ContributionGraphProps {
    pub username: AttrValue,
    pub api_base: AttrValue,
    #[prop_or_default]
    pub token: Option<AttrValue>,
}

#[function_component(ContributionGraph)]
pub fn contribution_graph(props: &ContributionGraphProps) -> Html {
    let state = {
        let username = props.username.to_string();
        let api_base = props.api_base.to_string();
        let token = props.token.as_ref().map(|t| t.to_string());
        use_fetch_once("contribution graph", GRAPH_ERROR, move || async move {
            let Some(token) = token else {
                bail!("no GitHub token configured; set GITHUB_TOKEN at build time");
            };
            fetch_contribution_calendar(&api_base, &token, &username).await
        })
    };

    html! {
        <Terminal prompt="contributions" busy={state.is_pending()} aside={graph_aside(&*state)}>
            { graph_body(&*state) }
        </Terminal>
    }
}

/// Header summary; only a loaded calendar has one.
pub fn graph_aside(state: &FetchState<ContributionCalendar>) -> Html {
    match state {
        FetchState::Success(cal) => html! {
            <span class="dim small">
                <span class="desktop-only">
                    { format!("{} contributions in the last year", cal.total_contributions) }
                </span>
                <span class="mobile-only">{"Last 30 days"}</span>
            </span>
        },
        _ => html! {},
    }
}

pub fn graph_body(state: &FetchState<ContributionCalendar>) -> Html {
    match state {
        FetchState::Idle | FetchState::Loading => html! {
            <div class="skeleton-stack"><div class="skeleton block" /></div>
        },
        FetchState::Failure(msg) => html! { <div class="error">{ *msg }</div> },
        FetchState::Success(cal) => calendar_view(cal),
    }
}

fn calendar_view(cal: &ContributionCalendar) -> Html {
    let columns = format!("grid-template-columns: repeat({}, var(--cell));", cal.weeks.len());

    html! {
        <div class="graph">
            <div class="months desktop-only" style={columns}>
                { for month_labels(&cal.weeks).into_iter().map(|(col, name)| html! {
                    <span style={format!("grid-column: {};", col + 1)}>{ name }</span>
                }) }
            </div>

            <div class="graph-body">
                <div class="weekdays">
                    { for WEEKDAYS.iter().map(|d| html! { <span>{ *d }</span> }) }
                </div>
                <div class="weeks desktop-only">
                    { for cal.weeks.iter().map(week_column) }
                </div>
                <div class="weeks mobile-only">
                    { for last_month_weeks(&cal.weeks).iter().map(week_column) }
                </div>
            </div>

            <div class="legend">
                <span>{"Less"}</span>
                { for Tier::ALL.iter().map(|t| html! { <div class={t.css_class()} /> }) }
                <span>{"More"}</span>
            </div>
        </div>
    }
}

fn week_column(week: &ContributionWeek) -> Html {
    html! {
        <div class="week">
            { for week.contribution_days.iter().map(day_cell) }
        </div>
    }
}

fn day_cell(day: &ContributionDay) -> Html {
    let tier = Tier::from_count(day.contribution_count);
    html! {
        <div class={tier.css_class()} data-level={tier.level().to_string()}>
            <span class="tooltip">
                { format!(
                    "{} contributions on {}",
                    day.contribution_count,
                    day.date.format("%m/%d/%Y")
                ) }
            </span>
        </div>
    }
}
