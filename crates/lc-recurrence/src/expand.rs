//! Expansion of an event into the occurrences inside a query window.
//!
//! Instance start dates are generated in ascending order from the event's
//! own start date, which is always the first instance.  Each date keeps the
//! event's time of day and duration.  Generation stops at the window end,
//! at the termination of the rule, or at the occurrence cap of the
//! calendar's settings, whichever comes first.

use crate::event::{Event, Occurrence};
use crate::frequency::{Anchor, Frequency};
use crate::query::{Granularity, QueryKind, QueryWindow};
use crate::rule::Termination;
use lc_core::Result;
use lc_lunar::LunarCalendar;
use lc_time::date::days_in_month;
use lc_time::{Date, DateTime, TimeUnit};
use std::collections::BTreeMap;
use tracing::{debug, warn};

// ── Instant generation ────────────────────────────────────────────────────────

/// Start dates of a periodic event, ascending, none after `limit`.
enum Instants<'a> {
    Solar {
        frequency: Frequency,
        origin: Date,
        step: i32,
        limit: Date,
    },
    LunarYearly {
        calendar: &'a LunarCalendar,
        lunar_year: i32,
        month: u8,
        is_leap: bool,
        day: u8,
        limit: Date,
    },
    LunarMonthly {
        calendar: &'a LunarCalendar,
        cursor: Date,
        day: u8,
        limit: Date,
    },
}

impl<'a> Instants<'a> {
    fn new(
        calendar: &'a LunarCalendar,
        event: &Event,
        window: &QueryWindow,
        limit: Date,
    ) -> Result<Self> {
        let origin = event.start.date();
        let frequency = event.rule.frequency;

        // Without a count to honour, generation may begin just before the
        // window instead of at the event itself.
        let skip_to = match event.rule.termination {
            Termination::Count(_) => None,
            _ => {
                let span_days = event.duration_seconds().div_euclid(86_400) as i32 + 1;
                Some(window.start.date() - span_days).filter(|&d| d > origin)
            }
        };

        let lunar = event.rule.anchor == Anchor::Lunar
            && matches!(frequency, Frequency::Monthly | Frequency::Yearly);
        if !lunar {
            let gap = skip_to.map_or(0, |d| d - origin);
            let step = match frequency {
                Frequency::Daily | Frequency::Workdays => gap,
                Frequency::Weekly => gap / 7,
                _ => 0,
            };
            return Ok(Instants::Solar {
                frequency,
                origin,
                step,
                limit,
            });
        }

        let info = calendar.lunar_day_info(origin)?;
        Ok(if frequency == Frequency::Yearly {
            // Lunar year L ends before February 21 of L + 1.
            let first_year = skip_to.map_or(info.lunar_year, |d| d.year() - 1);
            Instants::LunarYearly {
                calendar,
                lunar_year: first_year.max(info.lunar_year),
                month: info.month,
                is_leap: info.is_leap,
                day: info.day,
                limit,
            }
        } else {
            Instants::LunarMonthly {
                calendar,
                cursor: skip_to.unwrap_or(origin),
                day: info.day,
                limit,
            }
        })
    }
}

/// The date `months` calendar months after `origin` with the same day of
/// month: `Some(None)` if that month is too short, `None` once the month
/// lies past `limit` or outside the representable range.
fn same_day_after(origin: Date, months: i32, limit: Date) -> Option<Option<Date>> {
    let first = origin.start_of_month().advance(months, TimeUnit::Months).ok()?;
    if first > limit {
        return None;
    }
    let day = origin.day_of_month();
    Some((day <= days_in_month(first.year(), first.month())).then(|| first + (day as i32 - 1)))
}

impl Iterator for Instants<'_> {
    type Item = Result<Date>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Instants::Solar {
                frequency,
                origin,
                step,
                limit,
            } => loop {
                let k = *step;
                *step += 1;
                let candidate = match frequency {
                    Frequency::None => return None,
                    Frequency::Daily | Frequency::Workdays => Some(*origin + k),
                    Frequency::Weekly => Some(*origin + 7 * k),
                    Frequency::Monthly => same_day_after(*origin, k, *limit)?,
                    Frequency::Yearly => same_day_after(*origin, 12 * k, *limit)?,
                };
                let Some(date) = candidate else { continue };
                if date > *limit {
                    return None;
                }
                if *frequency == Frequency::Workdays && k > 0 && date.weekday().is_weekend() {
                    continue;
                }
                return Some(Ok(date));
            },
            Instants::LunarYearly {
                calendar,
                lunar_year,
                month,
                is_leap,
                day,
                limit,
            } => loop {
                // Every day of lunar year L falls after January 20 of L.
                let year = *lunar_year;
                if year > limit.year() {
                    return None;
                }
                *lunar_year += 1;
                match calendar.solar_date_for_lunar(year, *month, *is_leap, *day) {
                    Err(e) => return Some(Err(e)),
                    Ok(Some(date)) if date > *limit => return None,
                    Ok(Some(date)) => return Some(Ok(date)),
                    Ok(None) => continue,
                }
            },
            Instants::LunarMonthly {
                calendar,
                cursor,
                day,
                limit,
            } => loop {
                if *cursor > *limit {
                    return None;
                }
                let record = match calendar.lunar_month_containing(*cursor) {
                    Ok(record) => record,
                    Err(e) => return Some(Err(e)),
                };
                *cursor = record.first_day + record.days as i32;
                if let Some(date) = record.date_of_day(*day) {
                    if date > *limit {
                        return None;
                    }
                    return Some(Ok(date));
                }
            },
        }
    }
}

// ── Expansion ─────────────────────────────────────────────────────────────────

/// Every occurrence of `event` that touches `window`, ascending by start
/// then end, without duplicates.
///
/// Lunar-anchored monthly and yearly rules follow the event's lunar month
/// and day: a leap-month anchor only recurs in years with the same leap
/// month, and a lunar day missing from a short month is skipped, as is a
/// Gregorian day missing from a solar month.
///
/// # Errors
/// Only lunar-anchored rules can fail, when a lunar year table cannot be
/// built for a year the window reaches.
pub fn expand_recurrence(
    calendar: &LunarCalendar,
    event: &Event,
    window: &QueryWindow,
    granularity: Granularity,
) -> Result<Vec<Occurrence>> {
    if window.is_empty() {
        debug!(start = %window.start, end = %window.end, "empty query window");
        return Ok(Vec::new());
    }

    let mut out = Vec::new();
    let rule = &event.rule;
    if !rule.is_recurring() {
        if window.intersects(event.start, event.end) {
            out.push(Occurrence::new(event.start, event.end));
        }
    } else {
        let duration = event.duration_seconds();
        let cap = calendar.settings().max_occurrences;
        let mut limit = window.end.date();
        if let Termination::Until(until) = rule.termination {
            limit = limit.min(until.date());
        }

        let mut generated: u32 = 0;
        for date in Instants::new(calendar, event, window, limit)? {
            let start = event.start.with_date(date?);
            if start > window.end {
                break;
            }
            match rule.termination {
                Termination::Until(until) if start > until => break,
                Termination::Count(n) if generated >= n => break,
                _ => {}
            }
            generated += 1;
            if rule.is_excluded(start) {
                continue;
            }
            let end = start.add_seconds(duration);
            if !window.intersects(start, end) {
                continue;
            }
            if out.len() >= cap {
                warn!(cap, event_start = %event.start, "occurrence cap reached, expansion truncated");
                break;
            }
            out.push(Occurrence::new(start, end));
        }
    }

    if granularity == Granularity::PerDay {
        out = out
            .into_iter()
            .flat_map(split_by_day)
            .filter(|piece| window.intersects(piece.start, piece.end))
            .collect();
    }
    out.sort();
    out.dedup_by(|a, b| a.start == b.start && a.end == b.end);
    debug!(
        frequency = %rule.frequency,
        occurrences = out.len(),
        "expanded recurrence"
    );
    Ok(out)
}

/// [`expand_recurrence`] with the granularity `kind` asks for.
pub fn expand_query(
    calendar: &LunarCalendar,
    event: &Event,
    window: &QueryWindow,
    kind: &QueryKind,
) -> Result<Vec<Occurrence>> {
    expand_recurrence(calendar, event, window, kind.granularity())
}

// ── Day splitting ─────────────────────────────────────────────────────────────

/// Last civil day an occurrence covers.  An end exactly at midnight does
/// not reach into the new day.
fn last_covered_day(start: DateTime, end: DateTime) -> Date {
    if end.date() > start.date() && end.seconds_of_day() == 0 {
        end.date() - 1
    } else {
        end.date()
    }
}

fn split_by_day(occurrence: Occurrence) -> Vec<Occurrence> {
    let first = occurrence.start.date();
    let last = last_covered_day(occurrence.start, occurrence.end);
    if first == last {
        return vec![occurrence];
    }
    (0..=last - first)
        .map(|i| {
            let day = first + i;
            let day_end = DateTime::at_midnight(day + 1).add_seconds(-1);
            Occurrence {
                start: occurrence.start.max(DateTime::at_midnight(day)),
                end: occurrence.end.min(day_end),
                recurrence_start: occurrence.recurrence_start,
            }
        })
        .collect()
}

/// Group occurrences by each civil day of `window` they cover.
///
/// Every day of the window has an entry, empty when nothing happens.
pub fn bucket_by_day(
    occurrences: &[Occurrence],
    window: &QueryWindow,
) -> BTreeMap<Date, Vec<Occurrence>> {
    let mut buckets = BTreeMap::new();
    if window.is_empty() {
        return buckets;
    }
    let (first, last) = (window.start.date(), window.end.date());
    let mut day = first;
    while day <= last {
        buckets.insert(day, Vec::new());
        day += 1;
    }
    for occurrence in occurrences {
        let mut day = occurrence.start.date().max(first);
        let to = last_covered_day(occurrence.start, occurrence.end).min(last);
        while day <= to {
            if let Some(bucket) = buckets.get_mut(&day) {
                bucket.push(*occurrence);
            }
            day += 1;
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RecurrenceRule;
    use lc_core::Settings;

    fn at(y: i32, m: u8, d: u8, h: u8) -> DateTime {
        DateTime::new(y, m, d, h, 0, 0).unwrap()
    }

    fn window(from: (i32, u8, u8), to: (i32, u8, u8)) -> QueryWindow {
        QueryWindow::new(
            at(from.0, from.1, from.2, 0),
            DateTime::new(to.0, to.1, to.2, 23, 59, 59).unwrap(),
        )
    }

    fn expand(event: &Event, w: &QueryWindow) -> Vec<Occurrence> {
        expand_recurrence(&LunarCalendar::default(), event, w, Granularity::Span).unwrap()
    }

    fn hourly(start: DateTime, rule: RecurrenceRule) -> Event {
        Event::new(start, start.add_seconds(3_600), rule).unwrap()
    }

    #[test]
    fn single_event_round_trips() {
        let e = Event::once(at(2024, 1, 1, 9), at(2024, 1, 1, 10)).unwrap();
        let got = expand(&e, &window((2023, 12, 1), (2024, 2, 1)));
        assert_eq!(got, [Occurrence::new(e.start, e.end)]);
        assert!(expand(&e, &window((2024, 1, 2), (2024, 2, 1))).is_empty());
    }

    #[test]
    fn daily_and_workdays() {
        let daily = hourly(at(2024, 1, 1, 9), RecurrenceRule::new(Frequency::Daily));
        assert_eq!(expand(&daily, &window((2024, 1, 1), (2024, 1, 10))).len(), 10);

        // 2024-01-01 is a Monday.
        let work = hourly(at(2024, 1, 1, 9), RecurrenceRule::new(Frequency::Workdays));
        let got = expand(&work, &window((2024, 1, 1), (2024, 1, 14)));
        assert_eq!(got.len(), 10);
        assert!(got.iter().all(|o| o.start.date().weekday().is_weekday()));
    }

    #[test]
    fn fast_forward_matches_full_walk() {
        let rule = RecurrenceRule::new(Frequency::Weekly);
        let e = hourly(at(2000, 1, 3, 9), rule.clone());
        let w = window((2024, 1, 1), (2024, 1, 31));
        let counted = hourly(
            e.start,
            rule.with_termination(Termination::Count(u32::MAX)),
        );
        assert_eq!(expand(&e, &w), expand(&counted, &w));
        assert_eq!(expand(&e, &w).len(), 5);
    }

    #[test]
    fn monthly_skips_short_months() {
        let e = hourly(at(2024, 1, 31, 9), RecurrenceRule::new(Frequency::Monthly));
        let got = expand(&e, &window((2024, 1, 1), (2024, 12, 31)));
        let months: Vec<u8> = got.iter().map(|o| o.start.date().month()).collect();
        assert_eq!(months, [1, 3, 5, 7, 8, 10, 12]);
    }

    #[test]
    fn yearly_leap_day() {
        let e = hourly(at(2024, 2, 29, 9), RecurrenceRule::new(Frequency::Yearly));
        let got = expand(&e, &window((2024, 1, 1), (2036, 12, 31)));
        let years: Vec<i32> = got.iter().map(|o| o.start.date().year()).collect();
        assert_eq!(years, [2024, 2028, 2032, 2036]);
    }

    #[test]
    fn count_includes_excluded_instances() {
        let start = at(2024, 1, 1, 9);
        let rule = RecurrenceRule::new(Frequency::Daily).with_termination(Termination::Count(3));
        let w = window((2024, 1, 1), (2024, 12, 31));
        assert_eq!(expand(&hourly(start, rule.clone()), &w).len(), 3);
        let rule = rule.with_exclusion(at(2024, 1, 2, 9));
        assert_eq!(expand(&hourly(start, rule), &w).len(), 2);
    }

    #[test]
    fn until_is_inclusive() {
        let until = at(2024, 1, 5, 9);
        let rule = RecurrenceRule::new(Frequency::Daily).with_termination(Termination::Until(until));
        let got = expand(&hourly(at(2024, 1, 1, 9), rule), &window((2024, 1, 1), (2024, 12, 31)));
        assert_eq!(got.len(), 5);
        assert_eq!(got[4].start, until);
    }

    #[test]
    fn cap_truncates() {
        let cal = LunarCalendar::new(Settings::new().with_max_occurrences(5)).unwrap();
        let e = hourly(at(2024, 1, 1, 9), RecurrenceRule::new(Frequency::Daily));
        let got = expand_recurrence(&cal, &e, &window((2024, 1, 1), (2024, 1, 31)), Granularity::Span)
            .unwrap();
        assert_eq!(got.len(), 5);
    }

    #[test]
    fn per_day_pieces() {
        let e = Event::once(at(2024, 1, 1, 20), at(2024, 1, 3, 8)).unwrap();
        let cal = LunarCalendar::default();
        let w = window((2024, 1, 1), (2024, 1, 31));
        let pieces = expand_recurrence(&cal, &e, &w, Granularity::PerDay).unwrap();
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0].start, e.start);
        assert_eq!(pieces[0].end, DateTime::new(2024, 1, 1, 23, 59, 59).unwrap());
        assert_eq!(pieces[1].start, at(2024, 1, 2, 0));
        assert_eq!(pieces[2].end, e.end);
        assert!(pieces.iter().all(|p| p.recurrence_start == e.start));

        // Only the middle day is in view.
        let w = window((2024, 1, 2), (2024, 1, 2));
        assert_eq!(expand_recurrence(&cal, &e, &w, Granularity::PerDay).unwrap().len(), 1);
        assert_eq!(expand_recurrence(&cal, &e, &w, Granularity::Span).unwrap().len(), 1);
    }

    #[test]
    fn midnight_end_stays_on_one_day() {
        let e = Event::once(at(2024, 1, 1, 22), at(2024, 1, 2, 0)).unwrap();
        let w = window((2024, 1, 1), (2024, 1, 31));
        let got = expand_query(&LunarCalendar::default(), &e, &w, &QueryKind::Plain).unwrap();
        assert_eq!(got, [Occurrence::new(e.start, e.end)]);
    }

    #[test]
    fn empty_window_is_not_an_error() {
        let e = hourly(at(2024, 1, 1, 9), RecurrenceRule::new(Frequency::Daily));
        let w = QueryWindow::new(at(2024, 2, 1, 0), at(2024, 1, 1, 0));
        assert!(expand(&e, &w).is_empty());
        assert!(bucket_by_day(&[], &w).is_empty());
    }

    #[test]
    fn buckets_cover_each_day() {
        let e = Event::once(at(2024, 1, 1, 20), at(2024, 1, 2, 8)).unwrap();
        let w = window((2024, 1, 1), (2024, 1, 3));
        let occ = expand(&e, &w);
        let buckets = bucket_by_day(&occ, &w);
        assert_eq!(buckets.len(), 3);
        let sizes: Vec<usize> = buckets.values().map(Vec::len).collect();
        assert_eq!(sizes, [1, 1, 0]);
    }
}
