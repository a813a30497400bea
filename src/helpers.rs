use chrono::{NaiveDateTime, Utc};

/// Current UTC time without offset, the representation stored in timestamp columns
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
