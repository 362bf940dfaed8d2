//! Inline date-wheel widget state.
//!
//! The wheel edits one date-time value field by field, like the column
//! wheels of a hardware date picker: each field wraps within its own range
//! instead of carrying into its neighbor, and the day is re-clamped whenever
//! a month or year change shortens the month.

mod field;

pub use field::PickerField;

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};

/// Wheel state: the value being edited and the focused field.
#[derive(Debug, Clone)]
pub struct DateWheel {
    value: DateTime<Local>,
    field: PickerField,
}

impl DateWheel {
    /// A wheel synchronized to the owning row's value, focus on the month.
    pub fn new(value: DateTime<Local>) -> Self {
        Self {
            value,
            field: PickerField::Month,
        }
    }

    pub fn value(&self) -> DateTime<Local> {
        self.value
    }

    pub fn field(&self) -> PickerField {
        self.field
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    /// Adjust the focused field by one step. A result that does not exist as
    /// a local time (DST gap) leaves the value unchanged.
    fn step(&mut self, delta: i32) {
        let v = self.value;

        let next = match self.field {
            PickerField::Month => {
                let month0 = (v.month0() as i32 + 12 + delta).rem_euclid(12) as u32;
                let month = month0 + 1;
                let day = v.day().min(days_in_month(v.year(), month));
                v.with_day(1)
                    .and_then(|x| x.with_month(month))
                    .and_then(|x| x.with_day(day))
            }
            PickerField::Day => {
                let len = days_in_month(v.year(), v.month()) as i32;
                let day0 = (v.day() as i32 - 1 + delta).rem_euclid(len) as u32;
                v.with_day(day0 + 1)
            }
            PickerField::Year => {
                let year = v.year() + delta;
                let day = v.day().min(days_in_month(year, v.month()));
                v.with_day(day).and_then(|x| x.with_year(year))
            }
            PickerField::Hour => {
                let hour = (v.hour() as i32 + 24 + delta).rem_euclid(24) as u32;
                v.with_hour(hour)
            }
            PickerField::Minute => {
                let minute = (v.minute() as i32 + 60 + delta).rem_euclid(60) as u32;
                v.with_minute(minute)
            }
        };

        if let Some(next) = next {
            self.value = next;
        }
    }
}

/// Number of days in the given month.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wheel(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateWheel {
        DateWheel::new(Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap())
    }

    fn on(mut w: DateWheel, field: PickerField) -> DateWheel {
        while w.field() != field {
            w.focus_next();
        }
        w
    }

    #[test]
    fn test_month_wraps_within_year() {
        let mut w = on(wheel(2016, 12, 10, 9, 0), PickerField::Month);
        w.increment();
        assert_eq!(w.value().month(), 1);
        assert_eq!(w.value().year(), 2016);

        w.decrement();
        assert_eq!(w.value().month(), 12);
    }

    #[test]
    fn test_month_change_clamps_day() {
        let mut w = on(wheel(2015, 1, 31, 9, 0), PickerField::Month);
        w.increment();
        assert_eq!((w.value().month(), w.value().day()), (2, 28));

        let mut w = on(wheel(2016, 1, 31, 9, 0), PickerField::Month);
        w.increment();
        assert_eq!((w.value().month(), w.value().day()), (2, 29)); // leap year
    }

    #[test]
    fn test_day_wraps_within_month() {
        let mut w = on(wheel(2015, 2, 28, 9, 0), PickerField::Day);
        w.increment();
        assert_eq!((w.value().month(), w.value().day()), (2, 1));

        w.decrement();
        assert_eq!(w.value().day(), 28);
    }

    #[test]
    fn test_year_change_clamps_leap_day() {
        let mut w = on(wheel(2016, 2, 29, 9, 0), PickerField::Year);
        w.increment();
        assert_eq!((w.value().year(), w.value().day()), (2017, 28));
    }

    #[test]
    fn test_hour_and_minute_wrap_without_carry() {
        let mut w = on(wheel(2016, 9, 5, 23, 59), PickerField::Hour);
        w.increment();
        assert_eq!(w.value().hour(), 0);
        assert_eq!(w.value().day(), 5); // no carry into the day

        let mut w = on(wheel(2016, 9, 5, 23, 59), PickerField::Minute);
        w.increment();
        assert_eq!(w.value().minute(), 0);
        assert_eq!(w.value().hour(), 23);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2015, 2), 28);
        assert_eq!(days_in_month(2016, 2), 29);
        assert_eq!(days_in_month(2016, 12), 31);
        assert_eq!(days_in_month(2016, 9), 30);
    }
}
