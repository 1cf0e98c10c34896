//! duration.rs
//!
//! Calendar arithmetic for the About card: elapsed experience as whole
//! years and months, and age in whole years.
//!
//! `today` is always passed in by the caller, so every function here is
//! pure. Experience only compares months (the day of month is ignored),
//! while age compares month and day. The two rules differ on purpose.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{DateError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Elapsed time in whole years plus a month remainder in `0..=11`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    pub years: i32,
    pub months: u32,
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_duration(self.years, self.months))
    }
}

/// Parses a `YYYY-MM-DD` string, ignoring surrounding whitespace.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
        DateError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}

/// Years and months from `start` to `today`, ignoring the day of month.
pub fn compute_experience(start: NaiveDate, today: NaiveDate) -> Duration {
    let mut years = today.year() - start.year();
    let mut months = today.month() as i32 - start.month() as i32;

    // Borrow a year on month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Duration {
        years,
        months: months as u32,
    }
}

pub fn experience_since(start: &str, today: NaiveDate) -> Result<Duration> {
    Ok(compute_experience(parse_date(start)?, today))
}

/// Renders e.g. "2 years, 3 months". Zero years wins over zero months,
/// so `(0, 0)` is "0 months".
pub fn format_duration(years: i32, months: u32) -> String {
    if years == 0 {
        format!("{months} month{}", plural(months as i64))
    } else if months == 0 {
        format!("{years} year{}", plural(years as i64))
    } else {
        format!(
            "{years} year{}, {months} month{}",
            plural(years as i64),
            plural(months as i64)
        )
    }
}

/// Whole years from `birth` to `today`, counting the birthday itself.
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn age_since(birth: &str, today: NaiveDate) -> Result<i32> {
    Ok(compute_age(parse_date(birth)?, today))
}

pub(crate) fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}
