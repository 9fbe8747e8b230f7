use chrono::{NaiveTime, Timelike};
use eatery_store::RestaurantRecord;

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Parses a 24-hour "HH:MM" value.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_OF_DAY_FORMAT).ok()
}

/// Drops seconds so "23:59" still covers 23:59:59.
fn truncate_to_minute(now: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now)
}

/// A restaurant's daily opening window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: NaiveTime,
    pub close: NaiveTime,
}

impl OpeningHours {
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// `None` when either bound is missing or not a valid "HH:MM".
    pub fn from_record(record: &RestaurantRecord) -> Option<Self> {
        let open = parse_time_of_day(record.open_hour.as_deref()?)?;
        let close = parse_time_of_day(record.close_hour.as_deref()?)?;
        Some(Self::new(open, close))
    }

    /// Closing time falls on the next day, e.g. 22:00-02:00.
    pub fn is_overnight(&self) -> bool {
        self.open > self.close
    }

    /// Inclusive at both ends. Equal bounds mean open around the clock.
    pub fn contains(&self, now: NaiveTime) -> bool {
        let now = truncate_to_minute(now);
        if self.open < self.close {
            self.open <= now && now <= self.close
        } else {
            now >= self.open || now <= self.close
        }
    }
}

/// Whether `record` is open at `now`. Records with unusable hours count as closed.
pub fn is_open(record: &RestaurantRecord, now: NaiveTime) -> bool {
    match OpeningHours::from_record(record) {
        Some(hours) => hours.contains(now),
        None => {
            log::warn!(
                "Treating '{}' as closed: unusable hours open={:?} close={:?}",
                record.name,
                record.open_hour,
                record.close_hour
            );
            false
        }
    }
}
