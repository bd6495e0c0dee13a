//! Appointment availability.
//!
//! Intersects the weekly templates with per-date overrides and the booking
//! ledger to produce, for each calendar day of a range, the bookable and
//! booked slots.

use crate::domain::entities::{
    AvailabilityQuery, BlockedDate, BookedSlot, DayAvailability, DayTemplate, DATE_FORMAT,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, HashMap};

/// Longest range a single availability request may cover
pub const MAX_RANGE_DAYS: i64 = 366;

/// Horizon used when the caller gives neither a month nor explicit dates
pub const DEFAULT_HORIZON_MONTHS: u32 = 3;

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if end < start {
            return Err(DomainError::ValidationError(
                "endDate must not be before startDate".to_string(),
            ));
        }
        if (end - start).num_days() >= MAX_RANGE_DAYS {
            return Err(DomainError::ValidationError(format!(
                "Date range may span at most {} days",
                MAX_RANGE_DAYS
            )));
        }
        Ok(Self { start, end })
    }

    /// Whole calendar month
    pub fn month(year: i32, month: u32) -> DomainResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DomainError::ValidationError(format!("Invalid month: {}-{}", year, month)))?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| DomainError::ValidationError("Month out of range".to_string()))?;
        Self::new(start, end)
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn start_key(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_key(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}

pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::ValidationError(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

fn parse_month(value: &str) -> DomainResult<DateRange> {
    let invalid = || DomainError::ValidationError(format!("Invalid month '{}', expected YYYY-MM", value));

    let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
    if year.len() != 4 || month.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }

    DateRange::month(year, month)
}

/// Resolve the requested range: `month` wins, then `startDate`/`endDate`,
/// otherwise the next three months starting today.
pub fn resolve_range(query: &AvailabilityQuery, today: NaiveDate) -> DomainResult<DateRange> {
    if let Some(month) = query.month.as_deref().filter(|m| !m.trim().is_empty()) {
        return parse_month(month);
    }

    match (query.start_date.as_deref(), query.end_date.as_deref()) {
        (Some(start), Some(end)) => DateRange::new(parse_date(start)?, parse_date(end)?),
        (None, None) => {
            let end = today
                .checked_add_months(Months::new(DEFAULT_HORIZON_MONTHS))
                .ok_or_else(|| DomainError::Internal("Date overflow".to_string()))?;
            Ok(DateRange { start: today, end })
        }
        _ => Err(DomainError::ValidationError(
            "startDate and endDate must be provided together".to_string(),
        )),
    }
}

/// Slots a day offers before overrides and bookings are applied
fn base_slots(template: Option<&DayTemplate>, day_of_week: i64) -> Vec<String> {
    match template {
        Some(t) if t.is_active => t.time_slots.clone(),
        Some(_) => Vec::new(),
        None => DayTemplate::default_for(day_of_week).time_slots,
    }
}

/// Compute availability for every day of `range`.
///
/// `now` is the business-local wall clock. Days before `now.date()` are
/// closed; on the current day slots at or before the current minute are
/// dropped. `is_open` only reflects whether the day is bookable at all, so a
/// fully booked day reports `is_open: true` with an empty `available` list.
pub fn compute_availability(
    range: DateRange,
    templates: &[DayTemplate],
    blocked_dates: &[BlockedDate],
    booked_slots: &[BookedSlot],
    now: NaiveDateTime,
) -> BTreeMap<String, DayAvailability> {
    let today = now.date();
    let current_time = now.format("%H:%M").to_string();

    let templates_by_day: HashMap<i64, &DayTemplate> =
        templates.iter().map(|t| (t.day_of_week, t)).collect();
    let blocked_by_date: HashMap<&str, &BlockedDate> =
        blocked_dates.iter().map(|b| (b.date.as_str(), b)).collect();

    let mut booked_by_date: HashMap<&str, Vec<String>> = HashMap::new();
    for slot in booked_slots {
        booked_by_date
            .entry(slot.date.as_str())
            .or_default()
            .push(slot.time.clone());
    }

    let mut result = BTreeMap::new();

    for date in range.days() {
        let key = date.format(DATE_FORMAT).to_string();
        let day_of_week = date.weekday().num_days_from_sunday() as i64;

        let base = base_slots(templates_by_day.get(&day_of_week).copied(), day_of_week);
        let blocked = blocked_by_date.get(key.as_str()).copied();
        let is_day_blocked = blocked.map(BlockedDate::blocks_whole_day).unwrap_or(false);
        let blocked_times: &[String] = blocked.map(|b| b.blocked_times.as_slice()).unwrap_or(&[]);
        let booked = booked_by_date.remove(key.as_str()).unwrap_or_default();

        let is_past = date < today;
        let is_today = date == today;

        let available = if is_past || is_day_blocked {
            Vec::new()
        } else {
            base.iter()
                .filter(|slot| !blocked_times.contains(*slot))
                .filter(|slot| !booked.contains(*slot))
                .filter(|slot| !is_today || slot.as_str() > current_time.as_str())
                .cloned()
                .collect()
        };

        let is_open = !is_past && !is_day_blocked && !base.is_empty();

        result.insert(
            key,
            DayAvailability {
                available,
                booked,
                is_open,
            },
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    fn at(d: &str, time: &str) -> NaiveDateTime {
        date(d).and_time(NaiveTime::parse_from_str(time, "%H:%M").unwrap())
    }

    fn slots(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn booked(d: &str, time: &str) -> BookedSlot {
        BookedSlot {
            date: d.to_string(),
            time: time.to_string(),
        }
    }

    // 2026-10-19 is a Monday
    const MONDAY: &str = "2026-10-19";

    #[test]
    fn test_monday_with_one_confirmed_booking() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00", "10:00", "14:00"]), true)];
        let range = DateRange::single(date(MONDAY));

        let result = compute_availability(
            range,
            &templates,
            &[],
            &[booked(MONDAY, "10:00")],
            at("2026-10-15", "08:00"),
        );

        let day = &result[MONDAY];
        assert_eq!(day.available, slots(&["09:00", "14:00"]));
        assert_eq!(day.booked, slots(&["10:00"]));
        assert!(day.is_open);
    }

    #[test]
    fn test_past_days_are_closed() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00"]), true)];
        let range = DateRange::new(date("2026-10-05"), date("2026-10-12")).unwrap();

        let result = compute_availability(range, &templates, &[], &[], at("2026-10-15", "08:00"));

        assert_eq!(result.len(), 8);
        for day in result.values() {
            assert!(!day.is_open);
            assert!(day.available.is_empty());
        }
    }

    #[test]
    fn test_inactive_template_has_no_slots() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00", "10:00"]), false)];
        let result = compute_availability(
            DateRange::single(date(MONDAY)),
            &templates,
            &[],
            &[],
            at("2026-10-15", "08:00"),
        );

        let day = &result[MONDAY];
        assert!(day.available.is_empty());
        assert!(!day.is_open);
    }

    #[test]
    fn test_whole_day_block() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00", "10:00"]), true)];
        let blocked = vec![BlockedDate::new(MONDAY.to_string(), vec![], Some("Verlof".to_string()))];

        let result = compute_availability(
            DateRange::single(date(MONDAY)),
            &templates,
            &blocked,
            &[],
            at("2026-10-15", "08:00"),
        );

        let day = &result[MONDAY];
        assert!(day.available.is_empty());
        assert!(!day.is_open);
    }

    #[test]
    fn test_partial_block_removes_only_listed_times() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00", "10:00", "11:00"]), true)];
        let blocked = vec![BlockedDate::new(MONDAY.to_string(), slots(&["10:00"]), None)];

        let result = compute_availability(
            DateRange::single(date(MONDAY)),
            &templates,
            &blocked,
            &[],
            at("2026-10-15", "08:00"),
        );

        let day = &result[MONDAY];
        assert_eq!(day.available, slots(&["09:00", "11:00"]));
        assert!(day.is_open);
    }

    #[test]
    fn test_today_drops_elapsed_slots() {
        // 2026-10-15 is a Thursday
        let templates = vec![DayTemplate::new(4, slots(&["09:00", "10:00", "11:00", "14:00"]), true)];

        let result = compute_availability(
            DateRange::single(date("2026-10-15")),
            &templates,
            &[],
            &[],
            at("2026-10-15", "10:00"),
        );

        let day = &result["2026-10-15"];
        assert_eq!(day.available, slots(&["11:00", "14:00"]));
        assert!(day.is_open);
    }

    #[test]
    fn test_fully_booked_day_is_still_open() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00"]), true)];

        let result = compute_availability(
            DateRange::single(date(MONDAY)),
            &templates,
            &[],
            &[booked(MONDAY, "09:00")],
            at("2026-10-15", "08:00"),
        );

        let day = &result[MONDAY];
        assert!(day.available.is_empty());
        assert!(day.is_open);
    }

    #[test]
    fn test_missing_template_uses_default_week() {
        // 2026-10-17 is a Saturday, 2026-10-16 a Friday
        let range = DateRange::new(date("2026-10-16"), date("2026-10-17")).unwrap();
        let result = compute_availability(range, &[], &[], &[], at("2026-10-15", "08:00"));

        assert_eq!(result["2026-10-16"].available.len(), 7);
        assert!(result["2026-10-16"].is_open);
        assert!(result["2026-10-17"].available.is_empty());
        assert!(!result["2026-10-17"].is_open);
    }

    #[test]
    fn test_duplicate_slots_are_kept() {
        let templates = vec![DayTemplate::new(1, slots(&["09:00", "09:00"]), true)];
        let result = compute_availability(
            DateRange::single(date(MONDAY)),
            &templates,
            &[],
            &[],
            at("2026-10-15", "08:00"),
        );

        assert_eq!(result[MONDAY].available, slots(&["09:00", "09:00"]));
    }

    #[test]
    fn test_resolve_month() {
        let query = AvailabilityQuery {
            month: Some("2026-02".to_string()),
            ..Default::default()
        };
        let range = resolve_range(&query, date("2026-10-15")).unwrap();
        assert_eq!(range.start, date("2026-02-01"));
        assert_eq!(range.end, date("2026-02-28"));
    }

    #[test]
    fn test_resolve_december() {
        let query = AvailabilityQuery {
            month: Some("2026-12".to_string()),
            ..Default::default()
        };
        let range = resolve_range(&query, date("2026-10-15")).unwrap();
        assert_eq!(range.end, date("2026-12-31"));
    }

    #[test]
    fn test_resolve_default_horizon() {
        let range = resolve_range(&AvailabilityQuery::default(), date("2026-10-15")).unwrap();
        assert_eq!(range.start, date("2026-10-15"));
        assert_eq!(range.end, date("2027-01-15"));
    }

    #[test]
    fn test_resolve_rejects_malformed_input() {
        let bad_month = AvailabilityQuery {
            month: Some("2026-13".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_range(&bad_month, date("2026-10-15")),
            Err(DomainError::ValidationError(_))
        ));

        let bad_date = AvailabilityQuery {
            start_date: Some("15/10/2026".to_string()),
            end_date: Some("2026-10-20".to_string()),
            ..Default::default()
        };
        assert!(resolve_range(&bad_date, date("2026-10-15")).is_err());

        let half_range = AvailabilityQuery {
            start_date: Some("2026-10-15".to_string()),
            ..Default::default()
        };
        assert!(resolve_range(&half_range, date("2026-10-15")).is_err());

        let reversed = AvailabilityQuery {
            start_date: Some("2026-10-20".to_string()),
            end_date: Some("2026-10-15".to_string()),
            ..Default::default()
        };
        assert!(resolve_range(&reversed, date("2026-10-15")).is_err());
    }
}
