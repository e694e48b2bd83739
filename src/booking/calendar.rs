use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate};

/// The month currently shown in the booking calendar.
///
/// Holds the first day of that month, so every derived date is valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    first_of_month: NaiveDate,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("Invalid calendar month: {year}-{month:02}"))?;
        Ok(Self { first_of_month })
    }

    /// Cursor for the month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_of_month: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_of_month.year()
    }

    pub fn month(&self) -> u32 {
        self.first_of_month.month()
    }

    /// Move the cursor by whole months; year boundaries wrap. Out-of-range
    /// arithmetic (beyond chrono's date range) leaves the cursor in place.
    pub fn navigate(&self, direction: i32) -> Self {
        let shifted = if direction >= 0 {
            self.first_of_month
                .checked_add_months(Months::new(direction as u32))
        } else {
            self.first_of_month
                .checked_sub_months(Months::new(direction.unsigned_abs()))
        };
        Self {
            first_of_month: shifted.unwrap_or(self.first_of_month),
        }
    }

    /// Flat 7-column grid for the month: leading `None` padding cells equal
    /// to the first day's Sunday-indexed weekday, then one cell per calendar
    /// day. No trailing padding.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first_of_month.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];

        let mut day = self.first_of_month;
        loop {
            cells.push(Some(day));
            match day.succ_opt() {
                Some(next) if next.month() == self.first_of_month.month() => day = next,
                _ => break,
            }
        }
        cells
    }
}
