//! Formatos de fecha y hora que espera PPL MyAPI
//!
//! Las órdenes usan fecha y hora combinadas (ISO-8601 con offset), mientras
//! que la entrega especial y los filtros usan fecha sola y hora sola.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, SecondsFormat};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// `2024-03-01`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `08:30:00`
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// `2024-03-01T08:30:00+01:00`
pub fn format_date_time(date_time: DateTime<FixedOffset>) -> String {
    date_time.to_rfc3339_opts(SecondsFormat::Secs, false)
}
