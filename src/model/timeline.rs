use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Controls how much of the calendar the view window spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Week,
    #[default]
    Month,
    Quarter,
}

/// Host-supplied view configuration. A missing or unparseable anchor falls
/// back to the caller's "today" when the window is resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(default)]
    pub granularity: Granularity,
    #[serde(default, rename = "anchorDate", with = "super::dates::option")]
    pub anchor: Option<NaiveDate>,
}

impl ViewConfig {
    pub fn new(granularity: Granularity, anchor: NaiveDate) -> Self {
        Self {
            granularity,
            anchor: Some(anchor),
        }
    }
}

/// The inclusive date range currently displayed. Derived from a
/// [`ViewConfig`]; recomputed whenever granularity or anchor changes,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewWindow {
    #[serde(with = "super::dates")]
    pub start: NaiveDate,
    #[serde(with = "super::dates")]
    pub end: NaiveDate,
    pub total_days: i64,
}

impl ViewWindow {
    /// Resolve the display window for a configuration.
    ///
    /// Week runs Monday through Sunday around the anchor. Month covers the
    /// anchor's calendar month. Quarter starts at the first of the anchor's
    /// month and ends on the last day of the month 90 days past the anchor —
    /// an approximation, not a true calendar quarter, kept for parity with
    /// the console this engine was extracted from.
    pub fn resolve(config: &ViewConfig, today: NaiveDate) -> Self {
        let anchor = config.anchor.unwrap_or(today);
        let (start, end) = match config.granularity {
            Granularity::Week => {
                let start =
                    anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
                (start, start + Duration::days(6))
            }
            Granularity::Month => (first_of_month(anchor), last_of_month(anchor)),
            Granularity::Quarter => (
                first_of_month(anchor),
                last_of_month(anchor + Duration::days(90)),
            ),
        };
        let total_days = ((end - start).num_days() + 1).max(1);
        Self {
            start,
            end,
            total_days,
        }
    }

    /// Whole days from the window start to `date`. Negative before the window.
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.start).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .map(|first_of_next| first_of_next - Duration::days(1))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_window_is_monday_through_sunday() {
        // 2024-03-07 is a Thursday.
        let config = ViewConfig::new(Granularity::Week, date(2024, 3, 7));
        let window = ViewWindow::resolve(&config, date(2024, 1, 1));
        assert_eq!(window.start, date(2024, 3, 4));
        assert_eq!(window.end, date(2024, 3, 10));
        assert_eq!(window.total_days, 7);
    }

    #[test]
    fn month_window_covers_calendar_month() {
        let config = ViewConfig::new(Granularity::Month, date(2024, 3, 1));
        let window = ViewWindow::resolve(&config, date(2024, 1, 1));
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.end, date(2024, 3, 31));
        assert_eq!(window.total_days, 31);
    }

    #[test]
    fn month_window_handles_leap_february() {
        let config = ViewConfig::new(Granularity::Month, date(2024, 2, 15));
        let window = ViewWindow::resolve(&config, date(2024, 1, 1));
        assert_eq!(window.end, date(2024, 2, 29));
        assert_eq!(window.total_days, 29);
    }

    #[test]
    fn quarter_window_spans_roughly_ninety_days() {
        let config = ViewConfig::new(Granularity::Quarter, date(2024, 1, 1));
        let window = ViewWindow::resolve(&config, date(2024, 1, 1));
        // Anchor + 90 days = 2024-03-31, so the window closes with March.
        assert_eq!(window.start, date(2024, 1, 1));
        assert_eq!(window.end, date(2024, 3, 31));
        assert_eq!(window.total_days, 91);
    }

    #[test]
    fn quarter_crosses_year_boundary() {
        let config = ViewConfig::new(Granularity::Quarter, date(2023, 11, 1));
        let window = ViewWindow::resolve(&config, date(2023, 11, 1));
        assert_eq!(window.start, date(2023, 11, 1));
        assert_eq!(window.end, date(2024, 1, 31));
    }

    #[test]
    fn missing_anchor_falls_back_to_today() {
        let config = ViewConfig {
            granularity: Granularity::Month,
            anchor: None,
        };
        let window = ViewWindow::resolve(&config, date(2024, 3, 15));
        assert_eq!(window.start, date(2024, 3, 1));
        assert_eq!(window.end, date(2024, 3, 31));
    }

    #[test]
    fn unparseable_anchor_in_payload_falls_back_to_today() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"granularity": "week", "anchorDate": "sometime"}"#).unwrap();
        assert_eq!(config.anchor, None);
        let window = ViewWindow::resolve(&config, date(2024, 3, 7));
        assert_eq!(window.start, date(2024, 3, 4));
    }

    #[test]
    fn day_offset_is_signed() {
        let config = ViewConfig::new(Granularity::Month, date(2024, 3, 1));
        let window = ViewWindow::resolve(&config, date(2024, 1, 1));
        assert_eq!(window.day_offset(date(2024, 3, 5)), 4);
        assert_eq!(window.day_offset(date(2024, 2, 28)), -2);
    }
}
