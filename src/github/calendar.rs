//! Contribution calendar query, decoding and grading.

use anyhow::{anyhow, bail, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Weeks shown on narrow screens. One more than four so a whole calendar
/// month is always covered.
pub const NARROW_WEEKS: usize = 5;

pub const CONTRIBUTION_QUERY: &str = r#"
query($userName: String!) {
  user(login: $userName) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct ContributionQuery<'a> {
    pub query: &'static str,
    pub variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables<'a> {
    pub user_name: &'a str,
}

impl<'a> ContributionQuery<'a> {
    pub fn new(user_name: &'a str) -> Self {
        Self {
            query: CONTRIBUTION_QUERY,
            variables: QueryVariables { user_name },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u32,
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub contribution_count: u32,
    pub date: NaiveDate,
}

// GraphQL envelope: data.user.contributionsCollection.contributionCalendar

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<GraphQlData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlData {
    pub user: Option<GraphQlUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl GraphQlResponse {
    pub fn into_calendar(self) -> Result<ContributionCalendar> {
        if !self.errors.is_empty() {
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            bail!("GraphQL errors: {}", messages.join("; "));
        }
        self.data
            .and_then(|d| d.user)
            .map(|u| u.contributions_collection.contribution_calendar)
            .ok_or_else(|| anyhow!("GraphQL response has no user data"))
    }
}

/// Trailing [`NARROW_WEEKS`] weeks of the calendar, untouched.
pub fn last_month_weeks(weeks: &[ContributionWeek]) -> &[ContributionWeek] {
    &weeks[weeks.len().saturating_sub(NARROW_WEEKS)..]
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Labels closer than this many columns would overlap.
const MIN_LABEL_GAP: usize = 3;

/// Column index and label for each week where a new month begins. When two
/// labels would sit within [`MIN_LABEL_GAP`] columns, the later month wins.
pub fn month_labels(weeks: &[ContributionWeek]) -> Vec<(usize, &'static str)> {
    let mut out: Vec<(usize, &'static str)> = Vec::new();
    let mut prev: Option<u32> = None;
    for (col, week) in weeks.iter().enumerate() {
        let Some(first) = week.contribution_days.first() else { continue };
        let month = first.date.month0();
        if prev != Some(month) {
            let label = (col, MONTHS[month as usize]);
            match out.last_mut() {
                Some(last) if col - last.0 < MIN_LABEL_GAP => *last = label,
                _ => out.push(label),
            }
            prev = Some(month);
        }
    }
    out
}

/// Visual intensity of a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl Tier {
    pub const ALL: [Tier; 5] = [Tier::None, Tier::Low, Tier::Medium, Tier::High, Tier::Max];

    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Tier::None,
            1..=3 => Tier::Low,
            4..=6 => Tier::Medium,
            7..=9 => Tier::High,
            _ => Tier::Max,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tier::None => "cell tier-0",
            Tier::Low => "cell tier-1",
            Tier::Medium => "cell tier-2",
            Tier::High => "cell tier-3",
            Tier::Max => "cell tier-4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn week(start: NaiveDate, counts: [u32; 7]) -> ContributionWeek {
        ContributionWeek {
            contribution_days: counts
                .iter()
                .enumerate()
                .map(|(i, c)| ContributionDay {
                    contribution_count: *c,
                    date: start + chrono::Duration::days(i as i64),
                })
                .collect(),
        }
    }

    fn year_of_weeks(n: usize) -> Vec<ContributionWeek> {
        weeks_from(NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(), n)
    }

    fn weeks_from(start: NaiveDate, n: usize) -> Vec<ContributionWeek> {
        (0..n)
            .map(|i| week(start + chrono::Duration::weeks(i as i64), [i as u32; 7]))
            .collect()
    }

    #[test]
    fn tier_boundaries() {
        let expected = [(0, 0), (1, 1), (3, 1), (4, 2), (6, 2), (7, 3), (9, 3), (10, 4), (500, 4)];
        for (count, level) in expected {
            assert_eq!(Tier::from_count(count).level(), level, "count {count}");
        }
    }

    #[test]
    fn tier_is_monotone() {
        let mut prev = Tier::from_count(0);
        for c in 1..=50 {
            let t = Tier::from_count(c);
            assert!(t >= prev, "tier dropped at {c}");
            prev = t;
        }
    }

    #[test]
    fn legend_covers_every_tier_in_order() {
        let levels: Vec<u8> = Tier::ALL.iter().map(|t| t.level()).collect();
        assert_eq!(levels, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn narrow_view_is_last_five_weeks() {
        let weeks = year_of_weeks(53);
        let narrow = last_month_weeks(&weeks);
        assert_eq!(narrow.len(), 5);
        assert_eq!(narrow, &weeks[48..]);
    }

    #[test]
    fn narrow_view_of_short_calendar_is_whole_calendar() {
        let weeks = year_of_weeks(3);
        assert_eq!(last_month_weeks(&weeks), &weeks[..]);
        assert!(last_month_weeks(&[]).is_empty());
    }

    #[test]
    fn decodes_graphql_envelope() {
        let body = json!({
            "data": { "user": { "contributionsCollection": { "contributionCalendar": {
                "totalContributions": 42,
                "weeks": [
                    { "contributionDays": [
                        { "contributionCount": 0, "date": "2024-01-07" },
                        { "contributionCount": 5, "date": "2024-01-08" }
                    ] }
                ]
            } } } }
        });
        let resp: GraphQlResponse = serde_json::from_value(body).unwrap();
        let cal = resp.into_calendar().unwrap();
        assert_eq!(cal.total_contributions, 42);
        assert_eq!(cal.weeks[0].contribution_days[1].contribution_count, 5);
        assert_eq!(
            cal.weeks[0].contribution_days[1].date,
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()
        );
    }

    #[test]
    fn unknown_user_is_an_error() {
        let body = json!({
            "data": { "user": null },
            "errors": [{ "type": "NOT_FOUND", "message": "Could not resolve to a User" }]
        });
        let resp: GraphQlResponse = serde_json::from_value(body).unwrap();
        let err = resp.into_calendar().unwrap_err();
        assert!(err.to_string().contains("Could not resolve"));
    }

    #[test]
    fn null_data_is_an_error() {
        let resp: GraphQlResponse = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(resp.into_calendar().is_err());
    }

    #[test]
    fn query_body_shape() {
        let body = serde_json::to_value(ContributionQuery::new("octocat")).unwrap();
        assert_eq!(body["variables"]["userName"], "octocat");
        assert!(body["query"].as_str().unwrap().contains("contributionCalendar"));
    }

    #[test]
    fn month_labels_mark_first_week_of_each_month() {
        let weeks = year_of_weeks(10);
        let labels = month_labels(&weeks);
        // weeks start 2023-10-01, 10-08, ... 11-05 is column 5, 12-03 is column 9
        assert_eq!(labels, vec![(0, "Oct"), (5, "Nov"), (9, "Dec")]);
    }

    #[test]
    fn crowded_month_label_gives_way_to_the_next_month() {
        // 2023-10-29 is the only October column; November starts at column 1.
        let weeks = weeks_from(NaiveDate::from_ymd_opt(2023, 10, 29).unwrap(), 6);
        assert_eq!(month_labels(&weeks), vec![(1, "Nov"), (5, "Dec")]);
    }

    #[test]
    fn month_labels_never_sit_closer_than_the_gap() {
        for day in 1..=28 {
            let start = NaiveDate::from_ymd_opt(2023, 1, day).unwrap();
            let labels = month_labels(&weeks_from(start, 53));
            for pair in labels.windows(2) {
                assert!(pair[1].0 - pair[0].0 >= MIN_LABEL_GAP, "{start}: {labels:?}");
            }
        }
    }
}
