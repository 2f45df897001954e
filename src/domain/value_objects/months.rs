use std::fmt::Display;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MonthError {
    #[error("invalid month format, must be YYYY-MM: {0}")]
    InvalidFormat(String),
    #[error("month out of range, must be 01-12: {0}")]
    OutOfRange(String),
}

/// A calendar month in `YYYY-MM` form, the allocation unit for revenue runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn parse(value: &str) -> Result<Self, MonthError> {
        let (year_part, month_part) = match value.split_once('-') {
            Some(parts) => parts,
            None => return Err(MonthError::InvalidFormat(value.to_string())),
        };

        if year_part.len() != 4 || month_part.len() != 2 {
            return Err(MonthError::InvalidFormat(value.to_string()));
        }

        let year = year_part
            .parse::<i32>()
            .map_err(|_| MonthError::InvalidFormat(value.to_string()))?;
        let month = month_part
            .parse::<u32>()
            .map_err(|_| MonthError::InvalidFormat(value.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthError::OutOfRange(value.to_string()));
        }

        Ok(Self { year, month })
    }

    /// The calendar month immediately before `today`.
    pub fn previous(today: NaiveDate) -> Self {
        if today.month() == 1 {
            Self {
                year: today.year() - 1,
                month: 12,
            }
        } else {
            Self {
                year: today.year(),
                month: today.month() - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Half-open UTC interval `[start, end)` covering this month.
    pub fn date_range(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.first_day(), self.next().first_day())
    }

    /// Advisory lock key; months are unique under `year * 100 + month`.
    pub fn lock_key(&self) -> i32 {
        self.year * 100 + self.month as i32
    }

    fn first_day(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(self.year, self.month, 1, 0, 0, 0)
            .single()
            .expect("first day of month is always a valid timestamp")
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
