use chrono::{Datelike, Months, NaiveDate};

use crate::models::SalesRecord;

/// First day of the month containing `date`
pub fn month_floor(date: NaiveDate) -> NaiveDate {
    // from_ymd_opt cannot fail for day 1 of an existing month
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Ascending first-of-month sequence covering `start..=end`.
/// Always yields at least the start month; a degenerate `end < start`
/// interval collapses to `[start]` instead of failing.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let start = month_floor(start);
    let end = month_floor(end);

    let mut months = vec![start];
    let mut cursor = start;
    while cursor < end {
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => {
                cursor = next;
                months.push(next);
            }
            None => break,
        }
    }
    months
}

/// Whole calendar months from `earlier` to `later`, counted with
/// month-end-clamped addition: a month is complete once `earlier` plus
/// that many months (clamped to the month end) is on or before `later`.
/// So Jan 31 2023 -> Feb 28 2023 is 1 month (the clamp lands on Feb 28),
/// while Jan 31 2024 -> Feb 28 2024 is 0 (the clamp lands on Feb 29).
/// Negative when `later` precedes `earlier`.
pub fn months_between(earlier: NaiveDate, later: NaiveDate) -> i32 {
    let mut months = (later.year() - earlier.year()) * 12
        + (later.month() as i32 - earlier.month() as i32);

    if months > 0 {
        if let Some(shifted) = earlier.checked_add_months(Months::new(months as u32)) {
            if shifted > later {
                months -= 1;
            }
        }
    } else if months < 0 {
        if let Some(shifted) = earlier.checked_sub_months(Months::new(months.unsigned_abs())) {
            if shifted < later {
                months += 1;
            }
        }
    }
    months
}

/// Partition `records` into the given months by calendar month of their date.
/// Records outside every month are dropped; months with no records map to
/// an empty bucket.
pub fn bucket_monthly<'a>(
    months: &[NaiveDate],
    records: &'a [SalesRecord],
) -> Vec<Vec<&'a SalesRecord>> {
    months
        .iter()
        .map(|month| {
            records
                .iter()
                .filter(|r| month_floor(r.date) == *month)
                .collect()
        })
        .collect()
}
