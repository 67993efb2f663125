//! Tenure and milestone calculation.
//!
//! Tenure is the calendar difference between the hire date and today, broken
//! into years, months and days with a borrow algorithm. Missing, unparsable or
//! future hire dates yield `None` rather than an error.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Milestone, TenureInfo};

/// Parses a hire date given as an ISO-8601 date or timestamp.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::parse_hire_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2020, 3, 15);
/// assert_eq!(parse_hire_date("2020-03-15"), expected);
/// assert_eq!(parse_hire_date("2020-03-15T08:30:00Z"), expected);
/// assert_eq!(parse_hire_date("not a date"), None);
/// ```
pub fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn plural(count: u32, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

fn long_label(years: u32, months: u32, days: u32) -> String {
    if years > 0 {
        if months > 0 {
            format!("{}, {}", plural(years, "year"), plural(months, "month"))
        } else {
            plural(years, "year")
        }
    } else if months > 0 {
        if months < 6 && days > 0 {
            format!("{}, {}", plural(months, "month"), plural(days, "day"))
        } else {
            plural(months, "month")
        }
    } else {
        plural(days, "day")
    }
}

fn short_label(years: u32, months: u32, days: u32) -> String {
    if years > 0 {
        if months > 0 {
            format!("{}y {}m", years, months)
        } else {
            format!("{}y", years)
        }
    } else if months > 0 {
        if months < 6 && days > 0 {
            format!("{}m {}d", months, days)
        } else {
            format!("{}m", months)
        }
    } else {
        format!("{}d", days)
    }
}

/// Returns the milestone tier for a number of years of employment.
///
/// Each tier includes its lower edge: exactly 5 years is silver and exactly
/// 25 years is diamond.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::milestone_for_years;
/// use timecard_engine::models::Milestone;
/// use rust_decimal::Decimal;
///
/// assert_eq!(milestone_for_years(Decimal::new(5, 0)), Milestone::Silver);
/// assert_eq!(milestone_for_years(Decimal::new(499, 2)), Milestone::Standard);
/// assert_eq!(milestone_for_years(Decimal::new(25, 0)), Milestone::Diamond);
/// ```
pub fn milestone_for_years(years: Decimal) -> Milestone {
    if years < Decimal::ONE {
        Milestone::None
    } else if years < Decimal::from(5) {
        Milestone::Standard
    } else if years < Decimal::from(10) {
        Milestone::Silver
    } else if years < Decimal::from(20) {
        Milestone::Gold
    } else if years < Decimal::from(25) {
        Milestone::Platinum
    } else {
        Milestone::Diamond
    }
}

/// Calculates tenure from a hire date as of `today`.
///
/// Returns `None` when the hire date is missing or after `today`. A negative
/// day difference borrows the length of the preceding calendar month (again,
/// if still negative); a negative month difference borrows a year.
///
/// # Examples
///
/// ```
/// use timecard_engine::calculation::calculate_tenure;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 3, 15);
/// let today = NaiveDate::from_ymd_opt(2023, 5, 20).unwrap();
///
/// let tenure = calculate_tenure(hired, today).unwrap();
/// assert_eq!((tenure.years, tenure.months, tenure.days), (3, 2, 5));
/// assert_eq!(tenure.label, "3 years, 2 months");
/// assert_eq!(tenure.short_label, "3y 2m");
/// ```
pub fn calculate_tenure(hire_date: Option<NaiveDate>, today: NaiveDate) -> Option<TenureInfo> {
    let hire_date = hire_date?;
    if hire_date > today {
        return None;
    }

    let mut years = today.year() - hire_date.year();
    let mut months = today.month() as i32 - hire_date.month() as i32;
    let mut days = today.day() as i32 - hire_date.day() as i32;

    // Walk back one calendar month per borrow; the day before the 1st is
    // the last day of the preceding month.
    let mut month_start = today.with_day(1)?;
    while days < 0 {
        let last_of_previous = month_start.pred_opt()?;
        days += last_of_previous.day() as i32;
        month_start = last_of_previous.with_day(1)?;
        months -= 1;
    }
    while months < 0 {
        months += 12;
        years -= 1;
    }

    // hire_date <= today keeps every component non-negative here.
    let (years, months, days) = (years as u32, months as u32, days as u32);

    Some(TenureInfo {
        years,
        months,
        days,
        total_days: (today - hire_date).num_days(),
        label: long_label(years, months, days),
        short_label: short_label(years, months, days),
        milestone: milestone_for_years(Decimal::from(years)),
    })
}

/// Calculates tenure from a raw hire date string against the local calendar date.
pub fn tenure_as_of_today(hire_date: Option<&str>) -> Option<TenureInfo> {
    let today = Local::now().date_naive();
    calculate_tenure(hire_date.and_then(parse_hire_date), today)
}
