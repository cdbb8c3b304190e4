use chrono::Duration;

use crate::types::{Instant, TimeReference};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

// Largest magnitude that still converts to i64 without saturating.
const I64_LIMIT: f64 = 9_223_372_036_854_775_807.0;

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_year(year: i32) -> i64 {
    if leap_year(year) {
        366
    } else {
        365
    }
}

/// Drops the fractional part of a day offset, toward zero.
///
/// # Panics
/// If `day` is NaN, infinite, or too large for an `i64`.
pub fn truncate_day(day: f64) -> i64 {
    let whole = day.trunc();
    if !whole.is_finite() || whole.abs() >= I64_LIMIT {
        panic!("day offset {} is not a representable whole day", day);
    }
    whole as i64
}

/// Fractional hours as a duration, to the microsecond.
///
/// # Panics
/// If `h` is NaN, infinite, or too large for a microsecond count.
pub fn hours(h: f64) -> Duration {
    let micros = (h * MICROS_PER_HOUR).round();
    if !micros.is_finite() || micros.abs() >= I64_LIMIT {
        panic!("hour value {} is not a representable duration", h);
    }
    Duration::microseconds(micros as i64)
}

/// `day_zero + day_of_year days + local_hour hours - utc_offset_hours hours`.
///
/// # Panics
/// If an hour value is not finite, or the result falls outside the range
/// chrono can represent.
pub fn local_to_utc(
    day_zero: Instant,
    utc_offset_hours: f64,
    day_of_year: i64,
    local_hour: f64,
) -> Instant {
    day_zero + Duration::days(day_of_year) + hours(local_hour) - hours(utc_offset_hours)
}

/// See [`local_to_utc`], anchored at the reference's day zero.
///
/// # Panics
/// As [`local_to_utc`], or if the reference year is out of range.
pub fn instant_from_local(reference: &TimeReference, day_of_year: i64, local_hour: f64) -> Instant {
    local_to_utc(
        reference.day_zero(),
        reference.utc_offset_hours,
        day_of_year,
        local_hour,
    )
}

pub fn instants_at_fixed_local_time(
    reference: &TimeReference,
    local_time: f64,
    days: &[i64],
) -> Vec<Instant> {
    let day_zero = reference.day_zero();
    days.iter()
        .map(|&d| local_to_utc(day_zero, reference.utc_offset_hours, d, local_time))
        .collect()
}

pub fn instants_at_fixed_day(
    reference: &TimeReference,
    day: i64,
    local_times: &[f64],
) -> Vec<Instant> {
    let day_zero = reference.day_zero();
    local_times
        .iter()
        .map(|&t| local_to_utc(day_zero, reference.utc_offset_hours, day, t))
        .collect()
}
