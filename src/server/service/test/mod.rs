use chrono::{Duration, Utc};

mod booking;
mod invitation;

/// A calendar date `days` from today as `YYYY-MM-DD`.
fn date_from_today(days: i64) -> String {
    (Utc::now() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}
